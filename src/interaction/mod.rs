use serde::{Deserialize, Serialize};

use crate::core::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Idle,
    Hovering,
    Pressed,
}

/// Public pointer state exposed to host applications.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    pub phase: PointerPhase,
    pub cursor: Point,
    /// Category index under the cursor, if the cursor is over data.
    pub hovered_index: Option<usize>,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            phase: PointerPhase::Idle,
            cursor: Point::new(0.0, 0.0),
            hovered_index: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    pointer: PointerState,
}

impl InteractionState {
    #[must_use]
    pub fn phase(self) -> PointerPhase {
        self.pointer.phase
    }

    #[must_use]
    pub fn pointer(self) -> PointerState {
        self.pointer
    }

    #[must_use]
    pub fn hovered_index(self) -> Option<usize> {
        self.pointer.hovered_index
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, hovered_index: Option<usize>) {
        self.pointer.cursor = Point::new(x, y);
        self.pointer.hovered_index = hovered_index;
        // A press keeps its phase while dragging.
        if self.pointer.phase == PointerPhase::Idle {
            self.pointer.phase = PointerPhase::Hovering;
        }
    }

    pub fn on_pointer_press(&mut self, x: f64, y: f64, hovered_index: Option<usize>) {
        self.pointer.cursor = Point::new(x, y);
        self.pointer.hovered_index = hovered_index;
        self.pointer.phase = PointerPhase::Pressed;
    }

    pub fn on_pointer_release(&mut self) {
        if self.pointer.phase == PointerPhase::Pressed {
            self.pointer.phase = PointerPhase::Hovering;
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer = PointerState::default();
    }
}
