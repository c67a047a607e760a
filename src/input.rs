//! Input model: the drag gesture state machine.
//!
//! The engine consumes a host-independent pointer stream — press, move,
//! release, each carrying a screen-space point — so the same state machine
//! serves mouse and touch and can be driven by synthetic events in tests.
//! A drag session exists only between pointer-down and pointer-up; its
//! baseline is captured once at press time so every move computes a total
//! delta from the start rather than accumulating frame-to-frame drift.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::{Camera, Point};

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// The user is dragging to pan the view.
    Dragging {
        /// Screen-space pointer position captured at pointer-down.
        start_screen: Point,
        /// View center captured at pointer-down; the pan baseline.
        start_camera: Camera,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}
