// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `fontSize` mark: an inline `font-size` carried on a `<span>`.

use alloc::format;
use alloc::string::{String, ToString};

use crate::attrs::HtmlAttributes;
use crate::dom::DomSpec;
use crate::style;

/// Mark name.
pub const FONT_SIZE_MARK: &str = "fontSize";

/// Size applied when the mark is created without one.
pub const DEFAULT_FONT_SIZE: &str = "16px";

/// Options for the font-size mark.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontSizeOptions {
    /// Node types whose text the mark may style.
    pub types: &'static [&'static str],
}

impl Default for FontSizeOptions {
    fn default() -> Self {
        Self {
            types: &["textStyle"],
        }
    }
}

/// A font-size mark. The size is an opaque CSS length such as `18px` or `1.2rem`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontSize {
    size: String,
}

impl Default for FontSize {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_SIZE)
    }
}

impl FontSize {
    /// Creates a mark for `size`.
    #[must_use]
    pub fn new(size: impl Into<String>) -> Self {
        Self { size: size.into() }
    }

    /// CSS size value.
    #[must_use]
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Reads the mark from an inline style, if it declares `font-size`.
    #[must_use]
    pub fn parse_style(style: &str) -> Option<Self> {
        style::declaration(style, "font-size").map(|size| Self::new(size.to_string()))
    }

    /// Attributes contributed by the mark; empty when the size is empty.
    #[must_use]
    pub fn render_attributes(&self) -> HtmlAttributes {
        if self.size.is_empty() {
            return HtmlAttributes::new();
        }
        HtmlAttributes::new().with("style", format!("font-size: {}", self.size))
    }

    /// Renders the mark as a `<span>` around its content.
    #[must_use]
    pub fn render(&self) -> DomSpec {
        DomSpec::wrapping_content("span", self.render_attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_from_style_and_renders_back() {
        let mark = FontSize::parse_style("color: red; font-size: 18px").unwrap();
        assert_eq!(mark.size(), "18px");
        assert_eq!(
            mark.render().to_html("hi"),
            r#"<span style="font-size: 18px">hi</span>"#
        );
        assert!(FontSize::parse_style("color: red").is_none());
    }

    #[test]
    fn defaults_and_empty_size() {
        assert_eq!(FontSize::default().size(), "16px");
        assert!(FontSize::new("").render_attributes().is_empty());
        assert_eq!(FontSizeOptions::default().types, &["textStyle"]);
    }
}
