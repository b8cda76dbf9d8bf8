// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize controller: the drag state machine for corner handles.

use core::fmt;
use core::mem;

use kurbo::{Point, Size};
use tracing::{debug, trace, warn};

use crate::attributes::{AttributeSync, ImageAttributes};
use crate::config::{CancelBehavior, ResizeConfig};
use crate::corner::Corner;
use crate::error::{CommitError, StartError};
use crate::gate::SelectionGate;
use crate::length::Length;
use crate::snapshot::GeometrySnapshot;

/// Capabilities a resize controller needs from the environment that embeds it.
///
/// This is the whole coupling surface to the host UI: read the rendered size,
/// capture pointer events document-wide, and (through [`AttributeSync`]) read
/// and commit attributes.
pub trait ResizeHost: AttributeSync {
    /// Registration of the document-wide pointer-move / pointer-up listeners.
    ///
    /// Dropping it must deregister them.
    type Capture;

    /// Size of the element as currently rendered, or `None` if it is not mounted.
    fn rendered_size(&self) -> Option<Size>;

    /// Starts routing pointer-move and pointer-up events from anywhere in the
    /// document to the controller.
    fn capture_pointer(&mut self) -> Self::Capture;
}

/// Why a session ended without a pointer-up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CancelReason {
    /// The window or tab lost focus mid-drag.
    FocusLost,
    /// The host lost pointer capture (for example, the pointer was cancelled).
    CaptureLost,
    /// The user asked to abort the drag.
    Escape,
}

/// The transient state of one drag: which handle, and where it started.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    corner: Corner,
    snapshot: GeometrySnapshot,
}

impl DragSession {
    /// Creates a session for `corner` starting from `snapshot`.
    #[must_use]
    pub const fn new(corner: Corner, snapshot: GeometrySnapshot) -> Self {
        Self { corner, snapshot }
    }

    /// The handle being dragged.
    #[must_use]
    pub const fn corner(&self) -> Corner {
        self.corner
    }

    /// Starting geometry.
    #[must_use]
    pub const fn snapshot(&self) -> &GeometrySnapshot {
        &self.snapshot
    }

    /// Size for a pointer at `pointer_x`.
    ///
    /// Only horizontal movement is sensed. Width moves with the pointer for
    /// right-edge handles and against it for left-edge handles; height always
    /// follows from the session's aspect ratio. The result is computed from
    /// the snapshot alone, so it does not depend on earlier moves.
    ///
    /// Width is clamped so that neither dimension drops below `min_size` or
    /// overflows to infinity. A NaN pointer yields the smallest size.
    #[must_use]
    pub fn size_at(&self, pointer_x: f64, min_size: f64) -> Size {
        let ratio = self.snapshot.aspect_ratio();
        let delta_x = pointer_x - self.snapshot.start_pointer_x();
        let raw = self.snapshot.start_size().width + self.corner.width_direction() * delta_x;
        let floor = min_size.max(min_size * ratio);
        let ceiling = f64::MAX * ratio.min(1.0);
        let width = if raw.is_nan() {
            floor
        } else {
            raw.max(floor).min(ceiling)
        };
        Size::new(width, width / ratio)
    }
}

struct ActiveDrag<C> {
    session: DragSession,
    declared_at_start: (Length, Length),
    last_size: Option<Size>,
    _capture: C,
}

enum Phase<C> {
    Idle,
    Dragging(ActiveDrag<C>),
}

/// Drives corner-resize sessions for one element.
///
/// ## Lifecycle
///
/// 1) [`ResizeController::mount`] reads the element's attributes once.
/// 2) [`ResizeController::on_selection_changed`] opens or closes the handles.
/// 3) [`ResizeController::pointer_down`] on a handle snapshots the rendered
///    geometry and takes a document-wide pointer capture from the host.
/// 4) Every [`ResizeController::pointer_move`] recomputes the size from the
///    snapshot and commits it.
/// 5) [`ResizeController::pointer_up`] or [`ResizeController::cancel`] ends the
///    session and drops the capture.
///
/// The capture returned by [`ResizeHost::capture_pointer`] is owned by the
/// session, and dropping it is what releases the host's listeners. Every way
/// out of a session drops it: pointer-up, cancellation, a failed commit, a
/// panic unwinding out of the host, [`ResizeController::unmount`], or the
/// controller being dropped.
pub struct ResizeController<H: ResizeHost> {
    host: H,
    config: ResizeConfig,
    gate: SelectionGate,
    attributes: ImageAttributes,
    phase: Phase<H::Capture>,
}

impl<H: ResizeHost> fmt::Debug for ResizeController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeController")
            .field("config", &self.config)
            .field("gate", &self.gate)
            .field("attributes", &self.attributes)
            .field("session", &self.session())
            .finish_non_exhaustive()
    }
}

impl<H: ResizeHost> ResizeController<H> {
    /// Mounts a controller with the default [`ResizeConfig`].
    pub fn mount(host: H) -> Self {
        Self::with_config(host, ResizeConfig::default())
    }

    /// Mounts a controller, reading the element's attributes once.
    pub fn with_config(host: H, config: ResizeConfig) -> Self {
        let attributes = host.read();
        debug!(
            width = %attributes.width,
            height = %attributes.height,
            align = %attributes.align,
            "resizable element mounted"
        );
        Self {
            host,
            config,
            gate: SelectionGate::new(),
            attributes,
            phase: Phase::Idle,
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// The embedding host.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Current selection gate.
    #[must_use]
    pub const fn gate(&self) -> &SelectionGate {
        &self.gate
    }

    /// Attributes as currently displayed, including live drag sizes.
    #[must_use]
    pub const fn attributes(&self) -> &ImageAttributes {
        &self.attributes
    }

    /// Displayed `(width, height)`.
    #[must_use]
    pub const fn display_size(&self) -> (Length, Length) {
        self.attributes.size()
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Dragging(active) => Some(&active.session),
        }
    }

    /// Handles that should currently be drawn.
    #[must_use]
    pub fn handles(&self) -> &'static [Corner] {
        self.gate.handles()
    }

    /// Forwards a host selection-change notification to the gate.
    ///
    /// Deselecting mid-drag does not end the session; the capture is
    /// document-wide and the drag finishes on pointer-up as usual.
    pub fn on_selection_changed(&mut self, selected: bool) -> bool {
        self.gate.on_selection_changed(selected)
    }

    /// Re-reads attributes from the host, for example after an undo.
    ///
    /// Ignored while dragging, since the session owns the displayed size.
    /// Returns `true` if the attributes were refreshed.
    pub fn sync_from_host(&mut self) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.attributes = self.host.read();
        true
    }

    /// Starts a session from a pointer-down on `corner`.
    ///
    /// # Errors
    ///
    /// Returns [`StartError`] if the handles are inert, a session is already
    /// running, or the rendered geometry is missing or degenerate. The
    /// controller is unchanged in that case.
    pub fn pointer_down(
        &mut self,
        corner: Corner,
        pointer: Point,
    ) -> Result<DragSession, StartError> {
        if !self.gate.is_open() {
            debug!(%corner, "pointer-down on a handle of an unselected element");
            return Err(StartError::NotSelected);
        }
        if self.is_dragging() {
            return Err(StartError::AlreadyDragging);
        }
        let snapshot = GeometrySnapshot::capture(self.host.rendered_size(), pointer, &self.config)
            .inspect_err(|err| warn!(%corner, %err, "resize session refused"))?;

        let session = DragSession::new(corner, snapshot);
        let capture = self.host.capture_pointer();
        debug!(
            %corner,
            width = snapshot.start_size().width,
            height = snapshot.start_size().height,
            aspect_ratio = snapshot.aspect_ratio(),
            "resize session started"
        );
        self.phase = Phase::Dragging(ActiveDrag {
            session,
            declared_at_start: self.attributes.size(),
            last_size: None,
            _capture: capture,
        });
        Ok(session)
    }

    /// Applies a pointer-move and commits the resulting size.
    ///
    /// Returns `Ok(None)` when no session is active.
    ///
    /// # Errors
    ///
    /// Returns the host's [`CommitError`]. The session is torn down first, so
    /// the capture is already released when the error reaches the caller.
    pub fn pointer_move(&mut self, pointer: Point) -> Result<Option<Size>, CommitError> {
        // The session is held on the stack while the host runs, so an error
        // or a panic in `commit` drops the capture instead of leaking it.
        let Phase::Dragging(mut active) = mem::replace(&mut self.phase, Phase::Idle) else {
            return Ok(None);
        };
        let size = active.session.size_at(pointer.x, self.config.min_size);
        let (width, height) = (Length::Px(size.width), Length::Px(size.height));
        if let Err(err) = self.host.commit(width, height) {
            warn!(%err, "commit failed; ending resize session");
            return Err(err);
        }
        trace!(width = size.width, height = size.height, "resize step");
        self.attributes = self.attributes.resized(width, height);
        active.last_size = Some(size);
        self.phase = Phase::Dragging(active);
        Ok(Some(size))
    }

    /// Ends the session on pointer-up.
    ///
    /// If the pointer moved, the last live size is committed once more as the
    /// final value and returned. Returns `Ok(None)` if nothing was resized or
    /// no session was active.
    ///
    /// # Errors
    ///
    /// Returns the host's [`CommitError`] for the final commit. The session
    /// has ended either way.
    pub fn pointer_up(&mut self) -> Result<Option<Size>, CommitError> {
        let Phase::Dragging(active) = mem::replace(&mut self.phase, Phase::Idle) else {
            return Ok(None);
        };
        let Some(size) = active.last_size else {
            debug!(corner = %active.session.corner(), "resize session ended without movement");
            return Ok(None);
        };
        self.host
            .commit(Length::Px(size.width), Length::Px(size.height))
            .inspect_err(|err| warn!(%err, "final commit failed"))?;
        debug!(
            corner = %active.session.corner(),
            width = size.width,
            height = size.height,
            "resize session ended"
        );
        Ok(Some(size))
    }

    /// Ends the session without a pointer-up, for focus loss or lost capture.
    ///
    /// With [`CancelBehavior::Revert`] the width and height declared at
    /// pointer-down are committed back. Returns `Ok(false)` if no session was
    /// active.
    ///
    /// # Errors
    ///
    /// Returns the host's [`CommitError`] if reverting fails. The session has
    /// ended either way.
    pub fn cancel(&mut self, reason: CancelReason) -> Result<bool, CommitError> {
        let Phase::Dragging(active) = mem::replace(&mut self.phase, Phase::Idle) else {
            return Ok(false);
        };
        warn!(?reason, corner = %active.session.corner(), "resize session cancelled");
        if self.config.on_cancel == CancelBehavior::Revert && active.last_size.is_some() {
            let (width, height) = active.declared_at_start;
            self.host.commit(width, height)?;
            self.attributes = self.attributes.resized(width, height);
        }
        Ok(true)
    }

    /// Tears the controller down, releasing any live capture, and hands the
    /// host back.
    pub fn unmount(self) -> H {
        let Self { host, phase, .. } = self;
        if let Phase::Dragging(active) = phase {
            warn!(corner = %active.session.corner(), "element unmounted mid-drag");
        }
        host
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(corner: Corner) -> DragSession {
        let snapshot = GeometrySnapshot::capture(
            Some(Size::new(200.0, 100.0)),
            Point::new(100.0, 0.0),
            &ResizeConfig::default(),
        )
        .unwrap();
        DragSession::new(corner, snapshot)
    }

    #[test]
    fn right_handles_grow_with_pointer() {
        for corner in [Corner::BottomRight, Corner::TopRight] {
            assert_eq!(session(corner).size_at(150.0, 1.0), Size::new(250.0, 125.0));
        }
    }

    #[test]
    fn left_handles_shrink_with_pointer() {
        for corner in [Corner::TopLeft, Corner::BottomLeft] {
            assert_eq!(session(corner).size_at(150.0, 1.0), Size::new(150.0, 75.0));
            assert_eq!(session(corner).size_at(50.0, 1.0), Size::new(250.0, 125.0));
        }
    }

    #[test]
    fn crossing_the_opposite_edge_clamps_both_dimensions() {
        let size = session(Corner::BottomRight).size_at(-1000.0, 1.0);
        // Ratio 2: a 1px height floor means a 2px width floor.
        assert_eq!(size, Size::new(2.0, 1.0));

        let size = session(Corner::TopLeft).size_at(1000.0, 0.0);
        assert_eq!(size, Size::new(0.0, 0.0));
    }

    #[test]
    fn nan_pointer_falls_back_to_floor() {
        let size = session(Corner::BottomRight).size_at(f64::NAN, 4.0);
        assert_eq!(size, Size::new(8.0, 4.0));
    }

    #[test]
    fn overflowing_pointer_saturates_in_the_drag_direction() {
        let snapshot = GeometrySnapshot::capture(
            Some(Size::new(200.0, 100.0)),
            Point::new(-f64::MAX, 0.0),
            &ResizeConfig::default(),
        )
        .unwrap();

        let grow = DragSession::new(Corner::BottomRight, snapshot);
        let size = grow.size_at(f64::MAX, 1.0);
        assert_eq!(size, Size::new(f64::MAX, f64::MAX / 2.0));

        let shrink = DragSession::new(Corner::BottomLeft, snapshot);
        let size = shrink.size_at(f64::MAX, 1.0);
        assert_eq!(size, Size::new(2.0, 1.0));

        // A tall element caps the width so the height stays finite.
        let snapshot = GeometrySnapshot::capture(
            Some(Size::new(100.0, 200.0)),
            Point::ZERO,
            &ResizeConfig::default(),
        )
        .unwrap();
        let tall = DragSession::new(Corner::TopRight, snapshot);
        let size = tall.size_at(f64::INFINITY, 1.0);
        assert_eq!(size, Size::new(f64::MAX / 2.0, f64::MAX));
    }
}
