// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The marks carried by a run of text, and the commands that edit them.

use alloc::string::String;

use smallvec::SmallVec;

use crate::dom::DomSpec;
use crate::font_size::{FONT_SIZE_MARK, FontSize};
use crate::inline_heading::{INLINE_HEADING_MARK, InlineHeading, InlineHeadingOptions};

/// Discriminant of a [`Mark`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// [`FontSize`].
    FontSize,
    /// [`InlineHeading`].
    InlineHeading,
}

impl MarkKind {
    /// Registered mark name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FontSize => FONT_SIZE_MARK,
            Self::InlineHeading => INLINE_HEADING_MARK,
        }
    }
}

/// A mark with its attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mark {
    /// Inline font size.
    FontSize(FontSize),
    /// Inline heading.
    InlineHeading(InlineHeading),
}

impl Mark {
    /// Kind of this mark.
    #[must_use]
    pub const fn kind(&self) -> MarkKind {
        match self {
            Self::FontSize(_) => MarkKind::FontSize,
            Self::InlineHeading(_) => MarkKind::InlineHeading,
        }
    }

    fn render(&self, heading: &InlineHeadingOptions) -> DomSpec {
        match self {
            Self::FontSize(mark) => mark.render(),
            Self::InlineHeading(mark) => mark.render(heading),
        }
    }
}

/// The marks on a text run, at most one per kind, in application order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkSet {
    marks: SmallVec<[Mark; 2]>,
}

impl MarkSet {
    /// An unmarked run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no marks are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Marks in application order.
    pub fn iter(&self) -> impl Iterator<Item = &Mark> {
        self.marks.iter()
    }

    /// The mark of `kind`, if set.
    #[must_use]
    pub fn get(&self, kind: MarkKind) -> Option<&Mark> {
        self.marks.iter().find(|mark| mark.kind() == kind)
    }

    /// Returns `true` if a mark of `kind` is set.
    #[must_use]
    pub fn has(&self, kind: MarkKind) -> bool {
        self.get(kind).is_some()
    }

    /// Sets `mark`, replacing any mark of the same kind in place.
    pub fn set(&mut self, mark: Mark) {
        match self.marks.iter_mut().find(|m| m.kind() == mark.kind()) {
            Some(slot) => *slot = mark,
            None => self.marks.push(mark),
        }
    }

    /// Removes the mark of `kind`. Returns `true` if one was set.
    pub fn unset(&mut self, kind: MarkKind) -> bool {
        let before = self.marks.len();
        self.marks.retain(|mark| mark.kind() != kind);
        self.marks.len() != before
    }

    /// Sets the run's font size.
    pub fn set_font_size(&mut self, size: impl Into<String>) {
        self.set(Mark::FontSize(FontSize::new(size)));
    }

    /// Clears the run's font size. Returns `true` if one was set.
    pub fn unset_font_size(&mut self) -> bool {
        self.unset(MarkKind::FontSize)
    }

    /// Removes an existing inline heading, otherwise sets one at `level` (or
    /// the default level when `level` is missing or not allowed).
    ///
    /// Returns `true` if the run is now an inline heading.
    pub fn toggle_inline_heading(
        &mut self,
        level: Option<u8>,
        options: &InlineHeadingOptions,
    ) -> bool {
        if self.unset(MarkKind::InlineHeading) {
            return false;
        }
        let heading = InlineHeading::new(options.resolve(level));
        self.set(Mark::InlineHeading(heading));
        true
    }

    /// Renders the run: marks nest outermost-first, with the text in the
    /// innermost hole. Returns [`DomSpec::Hole`] for an unmarked run.
    #[must_use]
    pub fn render(&self, heading: &InlineHeadingOptions) -> DomSpec {
        self.marks
            .iter()
            .rev()
            .fold(DomSpec::Hole, |inner, mark| {
                nest(mark.render(heading), inner)
            })
    }
}

/// Replaces the hole in `outer` with `inner`.
fn nest(outer: DomSpec, inner: DomSpec) -> DomSpec {
    match outer {
        DomSpec::Hole => inner,
        DomSpec::Element {
            tag,
            attrs,
            children,
        } => {
            let mut inner = Some(inner);
            let children = children
                .into_iter()
                .map(|child| match child {
                    DomSpec::Hole => inner.take().unwrap_or(DomSpec::Hole),
                    other => other,
                })
                .collect();
            DomSpec::Element {
                tag,
                attrs,
                children,
            }
        }
    }
}
