// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection gate: handles are only interactive while the element is selected.

use crate::corner::Corner;

/// Projects the host's selection state onto "are the resize handles live?".
///
/// The gate holds nothing but the last reported selection flag and a revision
/// counter that bumps when the flag actually flips, so observers can cheaply
/// tell whether handles need to be redrawn.
///
/// ```
/// use understory_resize::{Corner, SelectionGate};
///
/// let mut gate = SelectionGate::new();
/// assert!(gate.handles().is_empty());
///
/// assert!(gate.on_selection_changed(true));
/// assert_eq!(gate.handles(), &Corner::ALL);
///
/// // Repeated notifications are no-ops.
/// assert!(!gate.on_selection_changed(true));
/// assert_eq!(gate.revision(), 1);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionGate {
    selected: bool,
    revision: u64,
}

impl SelectionGate {
    /// Creates a closed gate (element not selected).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: false,
            revision: 0,
        }
    }

    /// Records a selection-change notification from the host.
    ///
    /// Returns `true` if the gate flipped.
    pub fn on_selection_changed(&mut self, selected: bool) -> bool {
        if self.selected == selected {
            return false;
        }
        self.selected = selected;
        self.revision = self.revision.wrapping_add(1);
        true
    }

    /// Returns `true` while handles are visible and accept pointer-down.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.selected
    }

    /// Handles that should currently be drawn.
    #[must_use]
    pub fn handles(&self) -> &'static [Corner] {
        if self.selected { &Corner::ALL } else { &[] }
    }

    /// Number of times the gate has flipped.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let gate = SelectionGate::new();
        assert!(!gate.is_open());
        assert!(gate.handles().is_empty());
        assert_eq!(gate.revision(), 0);
    }

    #[test]
    fn revision_tracks_flips_only() {
        let mut gate = SelectionGate::new();
        assert!(!gate.on_selection_changed(false));
        assert!(gate.on_selection_changed(true));
        assert!(gate.on_selection_changed(false));
        assert!(!gate.on_selection_changed(false));
        assert_eq!(gate.revision(), 2);
        assert!(gate.handles().is_empty());
    }
}
