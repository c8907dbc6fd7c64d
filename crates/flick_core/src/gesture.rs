//! Gesture tracking
//!
//! The tracker turns one press-to-release cycle into [`GestureAction`]s for
//! the deck to apply to its springs. It holds no animation state of its own.
//!
//! ```text
//! Idle ──press──▶ Pressed ──move──▶ Dragging ──release──▶ Committing(dir)
//!   ▲                │                  │                       │
//!   │                └─────release──────┴──────────────▶ Cancelling
//!   └──────────── settle / advance ◀────────────────────────────┘
//! ```

use std::fmt;
use tracing::{debug, trace};

/// Which way a card leaves the deck
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// -1 for left, +1 for right
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
        }
    }
}

/// How a release resolves
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    Commit(Direction),
    Cancel,
}

/// Classify a release at offset `dx`
///
/// Offsets strictly beyond `threshold` on either side commit; exactly
/// `±threshold` cancels.
pub fn classify_release(dx: f32, threshold: f32) -> Release {
    if dx < -threshold {
        Release::Commit(Direction::Left)
    } else if dx > threshold {
        Release::Commit(Direction::Right)
    } else {
        Release::Cancel
    }
}

/// Where the current press cycle stands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Pressed,
    Dragging,
    Committing(Direction),
    Cancelling,
}

/// What the deck must do in response to an input
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureAction {
    /// Shrink the card to its pressed scale
    PressIn,
    /// Put the card exactly under the pointer
    Track(f32),
    /// Fling the card off in a direction
    Fling(Direction),
    /// Spring the card back to center and full size
    SnapBack,
}

#[derive(Clone, Debug)]
pub struct GestureTracker {
    phase: GesturePhase,
    commit_threshold: f32,
}

impl GestureTracker {
    pub fn new(commit_threshold: f32) -> Self {
        Self {
            phase: GesturePhase::Idle,
            commit_threshold,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn commit_threshold(&self) -> f32 {
        self.commit_threshold
    }

    /// Start a press cycle
    ///
    /// Legal from any phase except `Committing`; a press during `Cancelling`
    /// takes over the card mid-return.
    pub fn press_start(&mut self) -> Option<GestureAction> {
        match self.phase {
            GesturePhase::Committing(_) => {
                trace!("press ignored while committing");
                None
            }
            previous => {
                debug!(?previous, "press start");
                self.phase = GesturePhase::Pressed;
                Some(GestureAction::PressIn)
            }
        }
    }

    /// Follow the pointer
    pub fn drag_move(&mut self, dx: f32) -> Option<GestureAction> {
        match self.phase {
            GesturePhase::Pressed | GesturePhase::Dragging => {
                self.phase = GesturePhase::Dragging;
                Some(GestureAction::Track(dx))
            }
            phase => {
                trace!(?phase, dx, "move without an active press");
                None
            }
        }
    }

    /// End the press cycle and decide between commit and cancel
    pub fn release(&mut self, dx: f32) -> Option<GestureAction> {
        match self.phase {
            GesturePhase::Pressed | GesturePhase::Dragging => {
                let outcome = classify_release(dx, self.commit_threshold);
                debug!(dx, ?outcome, "release");
                match outcome {
                    Release::Commit(direction) => {
                        self.phase = GesturePhase::Committing(direction);
                        Some(GestureAction::Fling(direction))
                    }
                    Release::Cancel => {
                        self.phase = GesturePhase::Cancelling;
                        Some(GestureAction::SnapBack)
                    }
                }
            }
            phase => {
                trace!(?phase, dx, "release without an active press");
                None
            }
        }
    }

    /// The snap-back animations have come to rest
    pub fn cancel_settled(&mut self) {
        if self.phase == GesturePhase::Cancelling {
            self.phase = GesturePhase::Idle;
        }
    }

    /// A button dismissal took over, whatever the pointer was doing
    pub fn commit(&mut self, direction: Direction) {
        debug!(previous = ?self.phase, %direction, "button commit");
        self.phase = GesturePhase::Committing(direction);
    }

    /// Return to `Idle` unconditionally (after an advance)
    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(classify_release(-250.0, 250.0), Release::Cancel);
        assert_eq!(
            classify_release(-250.0001, 250.0),
            Release::Commit(Direction::Left)
        );
        assert_eq!(classify_release(250.0, 250.0), Release::Cancel);
        assert_eq!(
            classify_release(250.0001, 250.0),
            Release::Commit(Direction::Right)
        );
        assert_eq!(classify_release(0.0, 250.0), Release::Cancel);
    }

    #[test]
    fn test_full_commit_cycle() {
        let mut tracker = GestureTracker::new(250.0);
        assert_eq!(tracker.press_start(), Some(GestureAction::PressIn));
        assert_eq!(tracker.phase(), GesturePhase::Pressed);

        assert_eq!(tracker.drag_move(120.0), Some(GestureAction::Track(120.0)));
        assert_eq!(tracker.drag_move(260.0), Some(GestureAction::Track(260.0)));
        assert_eq!(tracker.phase(), GesturePhase::Dragging);

        assert_eq!(
            tracker.release(260.0),
            Some(GestureAction::Fling(Direction::Right))
        );
        assert_eq!(tracker.phase(), GesturePhase::Committing(Direction::Right));

        // Locked until the deck advances
        assert_eq!(tracker.press_start(), None);
        tracker.reset();
        assert_eq!(tracker.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_tap_cancels() {
        let mut tracker = GestureTracker::new(250.0);
        tracker.press_start();
        assert_eq!(tracker.release(0.0), Some(GestureAction::SnapBack));
        assert_eq!(tracker.phase(), GesturePhase::Cancelling);
        tracker.cancel_settled();
        assert_eq!(tracker.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_press_during_cancel_takes_over() {
        let mut tracker = GestureTracker::new(250.0);
        tracker.press_start();
        tracker.drag_move(100.0);
        tracker.release(100.0);
        assert_eq!(tracker.phase(), GesturePhase::Cancelling);

        assert_eq!(tracker.press_start(), Some(GestureAction::PressIn));
        assert_eq!(tracker.phase(), GesturePhase::Pressed);
        // A late settle notification from the old cycle is ignored
        tracker.cancel_settled();
        assert_eq!(tracker.phase(), GesturePhase::Pressed);
    }

    #[test]
    fn test_stray_events_are_ignored() {
        let mut tracker = GestureTracker::new(250.0);
        assert_eq!(tracker.drag_move(50.0), None);
        assert_eq!(tracker.release(300.0), None);
        assert_eq!(tracker.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_button_commit_takes_over_drag() {
        let mut tracker = GestureTracker::new(250.0);
        tracker.press_start();
        tracker.drag_move(120.0);
        tracker.commit(Direction::Left);
        assert_eq!(tracker.phase(), GesturePhase::Committing(Direction::Left));
        assert_eq!(tracker.press_start(), None);
        assert_eq!(tracker.release(120.0), None);
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Left.sign(), -1.0);
        assert_eq!(Direction::Right.sign(), 1.0);
        assert_eq!(Direction::Left.to_string(), "left");
    }
}
