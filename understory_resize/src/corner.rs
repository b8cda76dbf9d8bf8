// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corner handles and the cursor each one advertises.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// One of the four corner handles drawn around a selected element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Top-left handle (`TL`).
    TopLeft,
    /// Top-right handle (`TR`).
    TopRight,
    /// Bottom-left handle (`BL`).
    BottomLeft,
    /// Bottom-right handle (`BR`).
    BottomRight,
}

impl Corner {
    /// All four handles, in the order they are usually laid out.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Returns `true` for handles on the right edge.
    ///
    /// Dragging one of these to the right grows the element; dragging a
    /// left-edge handle to the right shrinks it.
    #[must_use]
    pub const fn grows_rightward(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }

    /// Sign applied to a horizontal pointer delta to get a width delta.
    #[must_use]
    pub const fn width_direction(self) -> f64 {
        if self.grows_rightward() { 1.0 } else { -1.0 }
    }

    /// Short label used by hosts that key handles by string.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TopLeft => "TL",
            Self::TopRight => "TR",
            Self::BottomLeft => "BL",
            Self::BottomRight => "BR",
        }
    }

    /// Cursor shown while hovering or dragging this handle.
    #[must_use]
    pub const fn cursor(self) -> ResizeCursor {
        match self {
            Self::TopLeft | Self::BottomRight => ResizeCursor::NwseResize,
            Self::TopRight | Self::BottomLeft => ResizeCursor::NeswResize,
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a handle label is not one of `TL`, `TR`, `BL`, `BR`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown resize handle `{label}`")]
pub struct CornerParseError {
    label: String,
}

impl FromStr for Corner {
    type Err = CornerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "TL" => Ok(Self::TopLeft),
            "TR" => Ok(Self::TopRight),
            "BL" => Ok(Self::BottomLeft),
            "BR" => Ok(Self::BottomRight),
            other => Err(CornerParseError {
                label: other.to_string(),
            }),
        }
    }
}

/// Diagonal resize cursor for a corner handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResizeCursor {
    /// North-west / south-east diagonal.
    NwseResize,
    /// North-east / south-west diagonal.
    NeswResize,
}

impl ResizeCursor {
    /// CSS `cursor` keyword for this cursor.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::NwseResize => "nwse-resize",
            Self::NeswResize => "nesw-resize",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_edge_handles_grow_rightward() {
        assert!(Corner::TopRight.grows_rightward());
        assert!(Corner::BottomRight.grows_rightward());
        assert!(!Corner::TopLeft.grows_rightward());
        assert!(!Corner::BottomLeft.grows_rightward());
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for corner in Corner::ALL {
            assert_eq!(corner.label().parse::<Corner>(), Ok(corner));
        }
        assert!("XX".parse::<Corner>().is_err());
    }

    #[test]
    fn diagonal_cursors_pair_opposite_corners() {
        assert_eq!(Corner::TopLeft.cursor(), Corner::BottomRight.cursor());
        assert_eq!(Corner::TopRight.cursor(), Corner::BottomLeft.cursor());
        assert_eq!(Corner::TopLeft.cursor().css_name(), "nwse-resize");
        assert_eq!(Corner::BottomLeft.cursor().css_name(), "nesw-resize");
    }
}
