// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state machine: turn pointer positions into pan deltas.
//!
//! ## Usage
//!
//! 1) On pointer down, call [`DragState::start`] with the pointer position.
//! 2) On each pointer move, call [`DragState::update`]; it returns the movement
//!    since the previous position while dragging and `None` while idle.
//! 3) On pointer up, call [`DragState::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use vantage_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Moves while idle are ignored.
//! assert_eq!(drag.update(Point::new(1.0, 1.0)), None);
//!
//! drag.start(Point::new(10.0, 20.0));
//! assert!(drag.is_dragging());
//!
//! assert_eq!(drag.update(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(drag.update(Point::new(14.0, 25.0)), Some(Vec2::new(-1.0, 0.0)));
//! assert_eq!(drag.total_offset(Point::new(14.0, 25.0)), Some(Vec2::new(4.0, 5.0)));
//!
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Phase of a drag gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragPhase {
    /// No pointer is held down.
    #[default]
    Idle,
    /// A pointer is held down.
    Dragging {
        /// Pointer position when the drag started.
        origin: Point,
        /// Pointer position at the last processed move.
        last: Point,
    },
}

/// Tracks an `Idle → Dragging → Idle` pointer gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    phase: DragPhase,
}

impl DragState {
    /// Enters the dragging phase at `pos`.
    ///
    /// Starting while already dragging restarts the gesture from `pos`.
    pub fn start(&mut self, pos: Point) {
        self.phase = DragPhase::Dragging {
            origin: pos,
            last: pos,
        };
    }

    /// Records a pointer move and returns the delta since the previous one.
    ///
    /// Returns `None` while idle; the move is then ignored entirely.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        match &mut self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging { last, .. } => {
                let delta = pos - *last;
                *last = pos;
                Some(delta)
            }
        }
    }

    /// Offset from the drag origin to `current`, while dragging.
    pub fn total_offset(&self, current: Point) -> Option<Vec2> {
        match self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging { origin, .. } => Some(current - origin),
        }
    }

    /// Returns to idle. Returns `true` if a drag was in progress.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.phase = DragPhase::Idle;
        was_dragging
    }

    /// Returns `true` while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// The current phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }
}
