// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The resizable image node: parsing from `<img>`, rendering back to markup,
//! and the alignment classes of its wrapper.

use alloc::format;
use alloc::string::{String, ToString};

use thiserror::Error;
use tracing::warn;
use understory_resize::{Align, ImageAttributes, Length};

use crate::attrs::HtmlAttributes;
use crate::dom::DomSpec;

/// Node type name the image is registered under.
pub const IMAGE_NODE: &str = "image";

/// Why an element could not be read as an image node.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ImageParseError {
    /// The element is not an `<img>`.
    #[error("expected an <img> element, found <{tag}>")]
    NotAnImage {
        /// Tag that was offered.
        tag: String,
    },
    /// The `<img>` has no `src` attribute.
    #[error("<img> without a src attribute")]
    MissingSource,
}

/// Flexbox justification class for an alignment.
#[must_use]
pub const fn justify_class(align: Align) -> &'static str {
    match align {
        Align::Left => "justify-start",
        Align::Center => "justify-center",
        Align::Right => "justify-end",
    }
}

/// Class list of the block that wraps the image in an editing view.
#[must_use]
pub fn wrapper_class(align: Align) -> String {
    format!("flex {} my-2", justify_class(align))
}

/// Reads an image node from an `<img src=...>` element.
///
/// `width` and `height` accept anything [`Length`] parses; malformed values
/// and unknown alignments fall back to the defaults (`auto`, `center`).
///
/// # Errors
///
/// Returns [`ImageParseError`] for non-`img` tags or a missing `src`.
pub fn parse_img(tag: &str, attrs: &HtmlAttributes) -> Result<ImageAttributes, ImageParseError> {
    if !tag.eq_ignore_ascii_case("img") {
        return Err(ImageParseError::NotAnImage {
            tag: tag.to_string(),
        });
    }
    let source = attrs.get("src").ok_or(ImageParseError::MissingSource)?;
    Ok(ImageAttributes {
        source: Some(source.to_string()),
        width: length_attr(attrs, "width"),
        height: length_attr(attrs, "height"),
        align: attrs
            .get("align")
            .and_then(|value| value.parse().ok())
            .unwrap_or_default(),
    })
}

fn length_attr(attrs: &HtmlAttributes, name: &str) -> Length {
    let Some(raw) = attrs.get(name) else {
        return Length::Auto;
    };
    raw.parse().unwrap_or_else(|err| {
        warn!(attribute = name, %err, "ignoring malformed image dimension");
        Length::Auto
    })
}

/// The node's attributes as HTML attributes, in `src, width, height, align`
/// order. A missing source is omitted.
#[must_use]
pub fn image_html_attributes(attrs: &ImageAttributes) -> HtmlAttributes {
    let mut html = HtmlAttributes::new();
    if let Some(source) = &attrs.source {
        html.set("src", source.as_str());
    }
    html.set("width", attrs.width.to_string());
    html.set("height", attrs.height.to_string());
    html.set("align", attrs.align.as_str());
    html
}

/// Renders an image node for serialization: a flex `div` justified by the
/// node's alignment, wrapping an `<img>` that carries the node's attributes
/// merged over `extra`.
#[must_use]
pub fn render_image(attrs: &ImageAttributes, extra: &HtmlAttributes) -> DomSpec {
    let img = extra.clone().merged(&image_html_attributes(attrs));
    let wrapper =
        HtmlAttributes::new().with("class", format!("flex {}", justify_class(attrs.align)));
    DomSpec::element("div", wrapper).with_child(DomSpec::element("img", img))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_img_with_dimensions() {
        let html: HtmlAttributes = [
            ("src", "cat.png"),
            ("width", "240px"),
            ("height", "120"),
            ("align", "right"),
        ]
        .into_iter()
        .collect();

        let attrs = parse_img("img", &html).unwrap();

        assert_eq!(attrs.source.as_deref(), Some("cat.png"));
        assert_eq!(attrs.width, Length::px(240.0));
        assert_eq!(attrs.height, Length::px(120.0));
        assert_eq!(attrs.align, Align::Right);
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let html: HtmlAttributes = [("src", "cat.png"), ("width", "50%"), ("align", "middle")]
            .into_iter()
            .collect();

        let attrs = parse_img("IMG", &html).unwrap();

        assert_eq!(attrs.width, Length::Auto);
        assert_eq!(attrs.height, Length::Auto);
        assert_eq!(attrs.align, Align::Center);
    }

    #[test]
    fn rejects_non_images_and_missing_source() {
        assert_eq!(
            parse_img("video", &HtmlAttributes::new()),
            Err(ImageParseError::NotAnImage {
                tag: "video".to_string()
            })
        );
        assert_eq!(
            parse_img("img", &HtmlAttributes::new().with("alt", "x")),
            Err(ImageParseError::MissingSource)
        );
    }

    #[test]
    fn wrapper_classes_follow_alignment() {
        assert_eq!(wrapper_class(Align::Left), "flex justify-start my-2");
        assert_eq!(wrapper_class(Align::Center), "flex justify-center my-2");
        assert_eq!(justify_class(Align::Right), "justify-end");
    }
}
