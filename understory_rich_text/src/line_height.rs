// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `lineHeight` global attribute on paragraphs and headings.
//!
//! Stored values are the user-facing spacing choices (`1`, `1.25`, `1.5`,
//! `2`); rendering maps each to the CSS `line-height` that looks like it.
//! The mapping is keyed by numeric value, so `1.5` and `1.50` render alike.

use alloc::format;
use alloc::string::{String, ToString};

use thiserror::Error;
use tracing::warn;

use crate::style;

/// Attribute name.
pub const LINE_HEIGHT_ATTRIBUTE: &str = "lineHeight";

/// Options for the line-height attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineHeightOptions {
    /// Node types that carry the attribute.
    pub types: &'static [&'static str],
    /// Values [`set_line_height`] accepts.
    pub heights: &'static [&'static str],
    /// Value of nodes that never had one set.
    pub default_height: &'static str,
}

impl Default for LineHeightOptions {
    fn default() -> Self {
        Self {
            types: &["paragraph", "heading"],
            heights: &["1", "1.25", "1.5", "2"],
            default_height: "1.0",
        }
    }
}

/// A line height outside the allowed set.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("line height `{value}` is not one of the allowed heights")]
pub struct LineHeightError {
    value: String,
}

/// Attribute access on the host document, as needed by the line-height commands.
pub trait NodeAttributes {
    /// Sets `name` on every selected node of `node_type`. Returns `false` if
    /// the host could not apply it.
    fn update_attribute(&mut self, node_type: &str, name: &str, value: &str) -> bool;

    /// Resets `name` to its default on every selected node of `node_type`.
    fn reset_attribute(&mut self, node_type: &str, name: &str) -> bool;
}

/// Reads the stored value from an inline style, falling back to the default.
#[must_use]
pub fn parse_style(style: &str, options: &LineHeightOptions) -> String {
    style::declaration(style, "line-height")
        .unwrap_or(options.default_height)
        .to_string()
}

/// CSS `line-height` value for a stored value. Unknown values pass through.
#[must_use]
pub fn css_value(stored: &str) -> &str {
    let Ok(value) = stored.trim().parse::<f64>() else {
        return stored;
    };
    [(1.0, "1.25"), (1.25, "1.5"), (1.5, "1.75"), (2.0, "2")]
        .into_iter()
        .find(|(key, _)| *key == value)
        .map_or(stored, |(_, css)| css)
}

/// Inline style rendered for a stored value.
#[must_use]
pub fn render_style(stored: &str) -> String {
    format!("line-height: {}", css_value(stored))
}

/// Applies `height` to every configured node type.
///
/// # Errors
///
/// Returns [`LineHeightError`] without touching the document if `height` is
/// not in `options.heights`.
pub fn set_line_height(
    doc: &mut impl NodeAttributes,
    options: &LineHeightOptions,
    height: &str,
) -> Result<bool, LineHeightError> {
    if !options.heights.contains(&height) {
        warn!(height, "rejected line height");
        return Err(LineHeightError {
            value: height.to_string(),
        });
    }
    Ok(options
        .types
        .iter()
        .all(|node_type| doc.update_attribute(node_type, LINE_HEIGHT_ATTRIBUTE, height)))
}

/// Resets the attribute on every configured node type.
pub fn unset_line_height(doc: &mut impl NodeAttributes, options: &LineHeightOptions) -> bool {
    options
        .types
        .iter()
        .all(|node_type| doc.reset_attribute(node_type, LINE_HEIGHT_ATTRIBUTE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remap_is_keyed_by_numeric_value() {
        assert_eq!(css_value("1"), "1.25");
        assert_eq!(css_value("1.0"), "1.25");
        assert_eq!(css_value("1.25"), "1.5");
        assert_eq!(css_value("1.5"), "1.75");
        assert_eq!(css_value("1.50"), "1.75");
        assert_eq!(css_value("2"), "2");
        assert_eq!(css_value("3"), "3");
        assert_eq!(css_value("normal"), "normal");
        assert_eq!(render_style("1.5"), "line-height: 1.75");
    }

    #[test]
    fn parse_falls_back_to_default() {
        let options = LineHeightOptions::default();
        assert_eq!(parse_style("line-height: 2", &options), "2");
        assert_eq!(parse_style("color: red", &options), "1.0");
    }
}
