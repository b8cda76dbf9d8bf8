// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render output: a small element tree with an optional content hole.

use alloc::string::String;
use alloc::vec::Vec;

use crate::attrs::HtmlAttributes;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "source", "wbr"];

/// What an extension renders for a node or mark.
#[derive(Clone, Debug, PartialEq, Eq)]
#[expect(
    clippy::large_enum_variant,
    reason = "elements are the common case; holes are leaves"
)]
pub enum DomSpec {
    /// An element with attributes and children.
    Element {
        /// Tag name.
        tag: String,
        /// Attributes in output order.
        attrs: HtmlAttributes,
        /// Child specs.
        children: Vec<Self>,
    },
    /// Where the node's or mark's own content goes.
    Hole,
}

impl DomSpec {
    /// An element with no children.
    #[must_use]
    pub fn element(tag: impl Into<String>, attrs: HtmlAttributes) -> Self {
        Self::Element {
            tag: tag.into(),
            attrs,
            children: Vec::new(),
        }
    }

    /// An element wrapping a single content hole, the usual shape for marks.
    #[must_use]
    pub fn wrapping_content(tag: impl Into<String>, attrs: HtmlAttributes) -> Self {
        Self::element(tag, attrs).with_child(Self::Hole)
    }

    /// Appends a child. Has no effect on [`DomSpec::Hole`].
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    /// Attributes of an element, `None` for a hole.
    #[must_use]
    pub fn attrs(&self) -> Option<&HtmlAttributes> {
        match self {
            Self::Element { attrs, .. } => Some(attrs),
            Self::Hole => None,
        }
    }

    /// Serializes to HTML, substituting `content` (already HTML) for holes.
    #[must_use]
    pub fn to_html(&self, content: &str) -> String {
        let mut out = String::new();
        self.write_html(&mut out, content);
        out
    }

    fn write_html(&self, out: &mut String, content: &str) {
        let Self::Element {
            tag,
            attrs,
            children,
        } = self
        else {
            out.push_str(content);
            return;
        };
        out.push('<');
        out.push_str(tag);
        for (name, value) in attrs.iter() {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_attribute(out, value);
            out.push('"');
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&tag.as_str()) {
            return;
        }
        for child in children {
            child.write_html(out, content);
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

fn escape_attribute(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_nested_elements_and_holes() {
        let spec = DomSpec::element("div", HtmlAttributes::new().with("class", "a"))
            .with_child(DomSpec::wrapping_content("span", HtmlAttributes::new()));
        assert_eq!(
            spec.to_html("hi"),
            r#"<div class="a"><span>hi</span></div>"#
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag_and_values_are_escaped() {
        let spec = DomSpec::element("img", HtmlAttributes::new().with("alt", r#"a "b" & <c>"#));
        assert_eq!(
            spec.to_html(""),
            r#"<img alt="a &quot;b&quot; &amp; &lt;c&gt;">"#
        );
    }
}
