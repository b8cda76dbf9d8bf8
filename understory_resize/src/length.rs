// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persisted element lengths: either `auto` or a pixel magnitude.
//!
//! Hosts store these as strings (`"auto"`, `"240px"`) so they can be handed
//! straight to a styling layer. [`Length`] parses and formats that form.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// A declared width or height.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Length {
    /// Let the renderer pick the size.
    #[default]
    Auto,
    /// A concrete size in pixels.
    Px(f64),
}

impl Length {
    /// Creates a pixel length.
    #[must_use]
    pub const fn px(value: f64) -> Self {
        Self::Px(value)
    }

    /// Returns `true` for [`Length::Auto`].
    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Returns the pixel magnitude, or `None` for `auto`.
    #[must_use]
    pub const fn as_px(self) -> Option<f64> {
        match self {
            Self::Auto => None,
            Self::Px(value) => Some(value),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Auto => f.write_str("auto"),
            // Avoid serializing `-0px`.
            Self::Px(0.0) => f.write_str("0px"),
            Self::Px(value) => write!(f, "{value}px"),
        }
    }
}

/// Error returned when a string is neither `auto` nor a finite pixel value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid length `{input}`: expected `auto` or a pixel value such as `240px`")]
pub struct LengthParseError {
    input: String,
}

impl LengthParseError {
    /// The rejected input, trimmed.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Length {
    type Err = LengthParseError;

    /// Accepts `auto` (any case), the empty string (treated as `auto`), `NNpx`,
    /// and a bare number, which is read as pixels the way HTML `width`
    /// attributes are.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
        match number.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Self::Px(value)),
            _ => Err(LengthParseError {
                input: trimmed.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn formats_with_px_suffix() {
        assert_eq!(Length::Auto.to_string(), "auto");
        assert_eq!(Length::px(240.0).to_string(), "240px");
        assert_eq!(Length::px(83.5).to_string(), "83.5px");
        assert_eq!(Length::px(-0.0).to_string(), "0px");
    }

    #[test]
    fn parses_host_forms() {
        assert_eq!("auto".parse(), Ok(Length::Auto));
        assert_eq!("AUTO".parse(), Ok(Length::Auto));
        assert_eq!("".parse(), Ok(Length::Auto));
        assert_eq!("240px".parse(), Ok(Length::px(240.0)));
        assert_eq!(" 12.5 px ".parse(), Ok(Length::px(12.5)));
        assert_eq!("300".parse(), Ok(Length::px(300.0)));
    }

    #[test]
    fn rejects_other_units_and_non_finite_values() {
        let err = "50%".parse::<Length>().unwrap_err();
        assert_eq!(err.input(), "50%");
        assert!("2em".parse::<Length>().is_err());
        assert!("infpx".parse::<Length>().is_err());
        assert!("NaN".parse::<Length>().is_err());
    }

    #[test]
    fn as_px_is_none_for_auto() {
        assert_eq!(Length::Auto.as_px(), None);
        assert_eq!(Length::px(4.0).as_px(), Some(4.0));
        assert!(Length::default().is_auto());
    }
}
