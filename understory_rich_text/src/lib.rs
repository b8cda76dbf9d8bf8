// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_rich_text --heading-base-level=0

//! Understory Rich Text: attribute and mark mappings for rich-text documents.
//!
//! This crate holds the declarative side of a few editor extensions: how
//! their attributes are read from markup and how they render back. It pairs
//! with `understory_resize`, which owns the interactive side of the image node.
//!
//! - [`image`]: the resizable image node (`<img>` parsing, wrapper layout).
//! - [`font_size`]: the `fontSize` mark, an inline `font-size` on a `<span>`.
//! - [`inline_heading`]: the `inlineHeading` mark, heading-sized bold text.
//! - [`line_height`]: the `lineHeight` attribute on paragraphs and headings.
//! - [`MarkSet`]: the marks on a text run and the commands that edit them.
//!
//! Rendering produces a [`DomSpec`] tree that can be handed to a host view
//! layer or serialized with [`DomSpec::to_html`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_resize::{Align, Length};
//! use understory_rich_text::image::{parse_img, render_image};
//! use understory_rich_text::HtmlAttributes;
//!
//! let html: HtmlAttributes = [("src", "cat.png"), ("width", "240px"), ("align", "left")]
//!     .into_iter()
//!     .collect();
//! let attrs = parse_img("img", &html).unwrap();
//! assert_eq!(attrs.width, Length::px(240.0));
//! assert_eq!(attrs.align, Align::Left);
//!
//! let spec = render_image(&attrs, &HtmlAttributes::new());
//! assert_eq!(
//!     spec.to_html(""),
//!     r#"<div class="flex justify-start"><img src="cat.png" width="240px" height="auto" align="left"></div>"#
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Builds without `std` need the
//! `libm` feature for Kurbo's float math.

#![no_std]

extern crate alloc;

mod attrs;
mod dom;
mod marks;

pub mod font_size;
pub mod image;
pub mod inline_heading;
pub mod line_height;
pub mod style;

pub use attrs::HtmlAttributes;
pub use dom::DomSpec;
pub use marks::{Mark, MarkKind, MarkSet};
