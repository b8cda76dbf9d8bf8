// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_resize --heading-base-level=0

//! Understory Resize: aspect-preserving corner resizing for embedded elements.
//!
//! This crate owns the interactive part of a resizable image (or any other
//! rectangular element) embedded in a rich-text document: a drag on one of the
//! four corner handles rescales the element uniformly and writes the new
//! `width` / `height` back into the document's attributes.
//!
//! It does not render handles, route events, or mutate documents itself.
//! Embedders implement two small traits:
//!
//! - [`AttributeSync`]: read the element's attributes and commit a new size.
//! - [`ResizeHost`]: report the rendered size and capture pointer events
//!   document-wide for the duration of a drag.
//!
//! and feed pointer and selection events into a [`ResizeController`].
//!
//! ## Sessions
//!
//! A pointer-down on a handle starts a [`DragSession`] from a
//! [`GeometrySnapshot`] of the rendered element. Each pointer-move recomputes
//! the size from that snapshot (never from the previous move), so only the
//! latest pointer position matters:
//!
//! - Right-edge handles (`TR`, `BR`) grow as the pointer moves right.
//! - Left-edge handles (`TL`, `BL`) shrink as the pointer moves right.
//! - Height is derived from the width and the aspect ratio fixed at
//!   pointer-down; vertical pointer movement is ignored.
//!
//! The host's pointer capture lives inside the session and is released when
//! the session ends, however it ends.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Size};
//! use understory_resize::{
//!     AttributeSync, CommitError, Corner, ImageAttributes, Length, ResizeController, ResizeHost,
//! };
//!
//! struct Host {
//!     attrs: ImageAttributes,
//!     captures: Rc<Cell<u32>>,
//! }
//!
//! struct Capture(Rc<Cell<u32>>);
//!
//! impl Drop for Capture {
//!     fn drop(&mut self) {
//!         self.0.set(self.0.get() - 1);
//!     }
//! }
//!
//! impl AttributeSync for Host {
//!     fn read(&self) -> ImageAttributes {
//!         self.attrs.clone()
//!     }
//!
//!     fn commit(&mut self, width: Length, height: Length) -> Result<(), CommitError> {
//!         self.attrs = self.attrs.resized(width, height);
//!         Ok(())
//!     }
//! }
//!
//! impl ResizeHost for Host {
//!     type Capture = Capture;
//!
//!     fn rendered_size(&self) -> Option<Size> {
//!         Some(Size::new(200.0, 100.0))
//!     }
//!
//!     fn capture_pointer(&mut self) -> Capture {
//!         self.captures.set(self.captures.get() + 1);
//!         Capture(self.captures.clone())
//!     }
//! }
//!
//! let captures = Rc::new(Cell::new(0));
//! let host = Host { attrs: ImageAttributes::new("cat.png"), captures: captures.clone() };
//! let mut controller = ResizeController::mount(host);
//!
//! controller.on_selection_changed(true);
//! controller.pointer_down(Corner::BottomRight, Point::new(300.0, 80.0)).unwrap();
//! assert_eq!(captures.get(), 1);
//!
//! controller.pointer_move(Point::new(350.0, 10.0)).unwrap();
//! assert_eq!(controller.pointer_up().unwrap(), Some(Size::new(250.0, 125.0)));
//! assert_eq!(captures.get(), 0);
//!
//! let attrs = controller.host().read();
//! assert_eq!(attrs.width.to_string(), "250px");
//! assert_eq!(attrs.height.to_string(), "125px");
//! ```
//!
//! ## Degenerate geometry
//!
//! A zero or non-finite starting dimension has no aspect ratio. By default
//! such a drag is refused ([`StartError::DegenerateGeometry`]);
//! [`DegeneratePolicy::Square`] starts it with a ratio of 1 instead. Sizes
//! never drop below [`ResizeConfig::min_size`] in either dimension.
//!
//! ## Logging
//!
//! Session starts, ends, refusals, and cancellations are reported through
//! [`tracing`] at `debug` / `warn`; individual resize steps at `trace`.
//!
//! This crate is `no_std` and uses `alloc`. Builds without `std` need the
//! `libm` feature for Kurbo's float math.

#![no_std]

extern crate alloc;

mod attributes;
mod config;
mod controller;
mod corner;
mod error;
mod gate;
mod length;
mod snapshot;

pub use attributes::{Align, AlignParseError, AttributeSync, ImageAttributes};
pub use config::{CancelBehavior, DegeneratePolicy, ResizeConfig};
pub use controller::{CancelReason, DragSession, ResizeController, ResizeHost};
pub use corner::{Corner, CornerParseError, ResizeCursor};
pub use error::{CommitError, StartError};
pub use gate::SelectionGate;
pub use length::{Length, LengthParseError};
pub use snapshot::GeometrySnapshot;
