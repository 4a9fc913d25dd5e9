//! Pointer events delivered by the host's event loop

use crate::Point;

/// Raw pointer input in surface coordinates.
///
/// Hosts translate their own touch/mouse events into these before handing
/// them to the surface controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
    Cancel,
}

impl PointerEvent {
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => Some(*position),
            PointerEvent::Cancel => None,
        }
    }
}
