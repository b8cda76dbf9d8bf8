// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `inlineHeading` mark: heading-sized bold text inside a paragraph.
//!
//! Markup form: `<span data-heading="2" data-level="2" style="...">`.

use alloc::format;
use alloc::string::ToString;

use crate::attrs::HtmlAttributes;
use crate::dom::DomSpec;

/// Mark name.
pub const INLINE_HEADING_MARK: &str = "inlineHeading";

/// Options for the inline-heading mark.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineHeadingOptions {
    /// Levels the mark may be set to.
    pub levels: &'static [u8],
    /// Level used when none is given or none can be parsed.
    pub default_level: u8,
    /// Extra attributes merged into every rendered span.
    pub html_attributes: HtmlAttributes,
}

impl Default for InlineHeadingOptions {
    fn default() -> Self {
        Self {
            levels: &[1, 2, 3],
            default_level: 1,
            html_attributes: HtmlAttributes::new(),
        }
    }
}

impl InlineHeadingOptions {
    /// `level` if allowed, otherwise the default level.
    #[must_use]
    pub fn resolve(&self, level: Option<u8>) -> u8 {
        level
            .filter(|level| self.levels.contains(level))
            .unwrap_or(self.default_level)
    }
}

/// An inline heading mark.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InlineHeading {
    level: u8,
}

impl InlineHeading {
    /// Creates a mark at `level`.
    #[must_use]
    pub const fn new(level: u8) -> Self {
        Self { level }
    }

    /// Heading level.
    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// CSS font size used for a level; unknown levels render at `1rem`.
    #[must_use]
    pub const fn font_size(level: u8) -> &'static str {
        match level {
            1 => "2.25rem",
            2 => "1.5rem",
            3 => "1.125rem",
            _ => "1rem",
        }
    }

    /// Reads the mark from a `<span data-heading>` element.
    ///
    /// The level comes from `data-level`; a missing, malformed, or disallowed
    /// level falls back to the default level.
    #[must_use]
    pub fn parse(
        tag: &str,
        attrs: &HtmlAttributes,
        options: &InlineHeadingOptions,
    ) -> Option<Self> {
        if !tag.eq_ignore_ascii_case("span") || !attrs.contains("data-heading") {
            return None;
        }
        let level = attrs
            .get("data-level")
            .and_then(|value| value.trim().parse().ok());
        Some(Self::new(options.resolve(level)))
    }

    /// Renders the mark as a bold `<span>` sized for its level.
    #[must_use]
    pub fn render(&self, options: &InlineHeadingOptions) -> DomSpec {
        let level = self.level.to_string();
        let size = Self::font_size(self.level);
        let own = HtmlAttributes::new()
            .with("data-heading", level.as_str())
            .with("data-level", level)
            .with("style", format!("font-size: {size}; font-weight: bold;"));
        DomSpec::wrapping_content("span", options.html_attributes.clone().merged(&own))
    }
}
