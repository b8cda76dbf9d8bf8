// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The persisted attribute set of a resizable image and the boundary used to
//! read and write it.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::error::CommitError;
use crate::length::Length;

/// Horizontal placement of the element inside its block.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    /// Flush with the start edge.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Flush with the end edge.
    Right,
}

impl Align {
    /// Attribute value as stored by the host document.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an `align` value is not `left`, `center`, or `right`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown alignment `{value}`")]
pub struct AlignParseError {
    value: String,
}

impl FromStr for Align {
    type Err = AlignParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(AlignParseError {
                value: other.to_string(),
            }),
        }
    }
}

/// Attributes a host document keeps for one image element.
///
/// `width` and `height` start out as [`Length::Auto`]; once a drag has
/// committed they are both concrete pixel lengths.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageAttributes {
    /// Opaque reference to the displayed content. `None` until the host sets it.
    pub source: Option<String>,
    /// Declared width.
    pub width: Length,
    /// Declared height.
    pub height: Length,
    /// Block alignment.
    pub align: Align,
}

impl ImageAttributes {
    /// Creates attributes for `source` with `auto` sizing and centered alignment.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::default()
        }
    }

    /// Returns a copy with `width` and `height` replaced.
    #[must_use]
    pub fn resized(&self, width: Length, height: Length) -> Self {
        Self {
            width,
            height,
            ..self.clone()
        }
    }

    /// Declared `(width, height)` pair.
    #[must_use]
    pub const fn size(&self) -> (Length, Length) {
        (self.width, self.height)
    }
}

/// Boundary to the host document's persisted attribute set.
///
/// Implementations adapt whatever node/attribute API the host editor exposes.
/// Commits are last-write-wins and may arrive at pointer-move rate; hosts that
/// care about history are expected to coalesce them.
pub trait AttributeSync {
    /// Reads the element's current attributes.
    fn read(&self) -> ImageAttributes;

    /// Writes a new `width` / `height` pair, leaving every other attribute alone.
    ///
    /// # Errors
    ///
    /// Returns [`CommitError`] when the host refuses the write, for example
    /// because the document is read-only or the node no longer exists.
    fn commit(&mut self, width: Length, height: Length) -> Result<(), CommitError>;
}
