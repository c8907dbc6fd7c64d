//! Input events accepted by the deck

use crate::gesture::Direction;

/// Pointer and button input, in arrival order
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeckInput {
    /// Pointer went down on the top card
    PressStart,
    /// Pointer moved while down
    DragMove {
        /// Horizontal offset from the press position
        dx: f32,
    },
    /// Pointer lifted
    Release {
        /// Horizontal offset from the press position at lift
        dx: f32,
    },
    /// "Like" button, dismisses to the right
    Like,
    /// "Dislike" button, dismisses to the left
    Dislike,
}

impl DeckInput {
    /// The dismissal a button maps to
    pub fn button_direction(&self) -> Option<Direction> {
        match self {
            DeckInput::Like => Some(Direction::Right),
            DeckInput::Dislike => Some(Direction::Left),
            _ => None,
        }
    }
}
