// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised at the edges of a resize session.

use alloc::string::String;

use thiserror::Error;

/// Reasons a pointer-down on a handle did not start a session.
///
/// In every case the controller stays idle and no pointer capture is taken.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum StartError {
    /// The element is not the host's current selection, so its handles are inert.
    #[error("resize handles are inert while the element is not selected")]
    NotSelected,
    /// A session is already running for this element.
    #[error("a resize session is already active")]
    AlreadyDragging,
    /// The host has not rendered the element yet.
    #[error("the element has no rendered geometry")]
    NotMounted,
    /// The rendered size cannot produce a usable aspect ratio.
    #[error("cannot derive an aspect ratio from a {width}x{height} element")]
    DegenerateGeometry {
        /// Rendered width at pointer-down.
        width: f64,
        /// Rendered height at pointer-down.
        height: f64,
    },
}

/// The host refused an attribute write.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("host rejected attribute commit: {reason}")]
pub struct CommitError {
    reason: String,
}

impl CommitError {
    /// Creates an error carrying a host-supplied reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The host-supplied reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
