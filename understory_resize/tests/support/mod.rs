// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory host document shared by the integration tests.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Size;
use understory_resize::{AttributeSync, CommitError, ImageAttributes, Length, ResizeHost};

/// What the host document has seen.
#[derive(Debug, Default)]
pub(crate) struct Document {
    pub(crate) attrs: ImageAttributes,
    pub(crate) commits: Vec<(Length, Length)>,
    pub(crate) active_captures: usize,
    pub(crate) total_captures: usize,
    pub(crate) reject_commits: bool,
    pub(crate) panic_on_commit: bool,
}

#[derive(Debug)]
pub(crate) struct TestHost {
    pub(crate) doc: Rc<RefCell<Document>>,
    pub(crate) rendered: Option<Size>,
}

/// Deregisters on drop, like a real document-level listener handle.
#[derive(Debug)]
pub(crate) struct Capture {
    doc: Rc<RefCell<Document>>,
}

impl Drop for Capture {
    fn drop(&mut self) {
        self.doc.borrow_mut().active_captures -= 1;
    }
}

impl AttributeSync for TestHost {
    fn read(&self) -> ImageAttributes {
        self.doc.borrow().attrs.clone()
    }

    fn commit(&mut self, width: Length, height: Length) -> Result<(), CommitError> {
        if self.doc.borrow().panic_on_commit {
            panic!("host blew up while committing");
        }
        let mut doc = self.doc.borrow_mut();
        if doc.reject_commits {
            return Err(CommitError::new("document is read-only"));
        }
        doc.attrs = doc.attrs.resized(width, height);
        doc.commits.push((width, height));
        Ok(())
    }
}

impl ResizeHost for TestHost {
    type Capture = Capture;

    fn rendered_size(&self) -> Option<Size> {
        self.rendered
    }

    fn capture_pointer(&mut self) -> Capture {
        let mut doc = self.doc.borrow_mut();
        doc.active_captures += 1;
        doc.total_captures += 1;
        Capture {
            doc: self.doc.clone(),
        }
    }
}

/// A mounted `cat.png` element rendered at `width` x `height`.
pub(crate) fn host(width: f64, height: f64) -> (TestHost, Rc<RefCell<Document>>) {
    let doc = Rc::new(RefCell::new(Document {
        attrs: ImageAttributes::new("cat.png"),
        ..Document::default()
    }));
    let host = TestHost {
        doc: doc.clone(),
        rendered: Some(Size::new(width, height)),
    };
    (host, doc)
}

pub(crate) fn px(width: f64, height: f64) -> (Length, Length) {
    (Length::px(width), Length::px(height))
}
