// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for resize sessions.

/// What to do when the rendered size at pointer-down has no usable aspect ratio
/// (a zero, negative, or non-finite width or height).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Refuse to start the session. The handles stay visible but inert.
    #[default]
    Reject,
    /// Start the session with an aspect ratio of 1, using the larger usable
    /// side (or the minimum size) as the starting square.
    Square,
}

/// What a cancelled session leaves behind in the document.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CancelBehavior {
    /// The last live commit stands.
    #[default]
    Keep,
    /// Write back the width and height that were declared at pointer-down.
    Revert,
}

/// Configuration for a [`ResizeController`](crate::ResizeController).
///
/// ```
/// use understory_resize::{CancelBehavior, DegeneratePolicy, ResizeConfig};
///
/// let config = ResizeConfig::new()
///     .with_min_size(16.0)
///     .with_degenerate(DegeneratePolicy::Square)
///     .with_cancel_behavior(CancelBehavior::Revert);
/// assert_eq!(config.min_size, 16.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResizeConfig {
    /// Smallest width and height a drag may produce, in pixels (default: 1.0).
    ///
    /// Both dimensions are kept at or above this value without breaking the
    /// session's aspect ratio.
    pub min_size: f64,
    /// Handling of degenerate starting geometry (default: [`DegeneratePolicy::Reject`]).
    pub degenerate: DegeneratePolicy,
    /// Handling of cancelled sessions (default: [`CancelBehavior::Keep`]).
    pub on_cancel: CancelBehavior,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            min_size: 1.0,
            degenerate: DegeneratePolicy::Reject,
            on_cancel: CancelBehavior::Keep,
        }
    }
}

impl ResizeConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum size. Negative or non-finite values are stored as `0.0`,
    /// which only keeps sizes from going negative.
    #[must_use]
    pub fn with_min_size(mut self, min_size: f64) -> Self {
        self.min_size = if min_size.is_finite() && min_size > 0.0 {
            min_size
        } else {
            0.0
        };
        self
    }

    /// Sets the degenerate-geometry policy.
    #[must_use]
    pub fn with_degenerate(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate = policy;
        self
    }

    /// Sets the cancellation behavior.
    #[must_use]
    pub fn with_cancel_behavior(mut self, behavior: CancelBehavior) -> Self {
        self.on_cancel = behavior;
        self
    }
}
