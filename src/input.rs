//! Input model: modifier keys, wheel deltas, and the drag state machine.
//!
//! `InteractionState` is everything the controller remembers between
//! events. A drag session runs from press to release (or leave) and may
//! switch between pan and orbit any number of times; each switch starts a
//! new segment through [`InteractionState::reset_session`].

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geo::{Meters, Point};

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Modifiers with only Meta held.
    #[must_use]
    pub fn meta() -> Self {
        Self { meta: true, ..Self::default() }
    }

    /// The drag mode these modifiers select. Meta orbits, anything else pans.
    #[must_use]
    pub fn drag_mode(self) -> DragMode {
        if self.meta { DragMode::Orbit } else { DragMode::Pan }
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// What a drag does to the camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragMode {
    /// Translate the map center.
    #[default]
    Pan,
    /// Rotate the camera's roll and pitch.
    Orbit,
}

/// Whether a button is currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Phase {
    /// No button held; moves are ignored.
    #[default]
    Idle,
    /// A button is held.
    Dragging {
        /// Cursor position at the press or at the last segment reset.
        /// Every move in the segment is measured from here.
        anchor: Point,
    },
}

/// Drag-tracking state carried between pointer events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    /// Press/release phase.
    pub phase: Phase,
    /// Mode of the previous processed move. Survives release, so the first
    /// move of the next drag also detects a switch.
    pub mode: DragMode,
    /// Orbit offset at the end of the previous segment; the current segment adds to it.
    pub drag_origin: Point,
    /// Map center at the start of the current pan segment.
    pub map_origin: Meters,
    /// Cursor delta from the segment anchor to the latest move.
    pub frame_delta: Point,
    /// Orbit offset in pixel units, `None` until the first orbit move.
    pub orbit_offset: Option<Point>,
}

impl InteractionState {
    /// Fresh state with the pan baseline at `map_origin`.
    #[must_use]
    pub fn new(map_origin: Meters) -> Self {
        Self { map_origin, ..Self::default() }
    }

    /// Whether a button is held.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// The segment anchor, `None` while idle.
    #[must_use]
    pub fn last_cursor(&self) -> Option<Point> {
        match self.phase {
            Phase::Idle => None,
            Phase::Dragging { anchor } => Some(anchor),
        }
    }

    /// Begin a drag session at `cursor`.
    pub fn press(&mut self, cursor: Point) {
        self.phase = Phase::Dragging { anchor: cursor };
    }

    /// End the drag session and re-base both continuity baselines so the
    /// next drag continues from here.
    pub fn release(&mut self, center: Meters) {
        self.phase = Phase::Idle;
        if let Some(offset) = self.orbit_offset {
            self.drag_origin = offset;
        }
        self.map_origin = center;
        self.frame_delta = Point::default();
    }

    /// Close the current segment and open a new one anchored at `cursor`.
    pub fn reset_session(&mut self, cursor: Point, center: Meters) {
        self.release(center);
        self.press(cursor);
    }

    /// Record `cursor` as the latest move and return its delta from the anchor.
    ///
    /// Returns `None` while idle.
    pub fn track(&mut self, cursor: Point) -> Option<Point> {
        let anchor = self.last_cursor()?;
        self.frame_delta = cursor.delta_from(anchor);
        Some(self.frame_delta)
    }
}
