//! Card stack controller
//!
//! [`CardDeck`] owns the two animated values of the top card (drag offset
//! and press scale), the index of the current item, and the gesture tracker.
//! Gestures and the like/dislike buttons both end in a fling of the drag
//! offset; when that fling's transition completes, the deck runs the advance
//! protocol:
//!
//! 1. press scale snaps to 1
//! 2. the index increments
//! 3. drag offset snaps to 0
//!
//! Resetting the offset last keeps the departing card from jumping back to
//! center before the next item takes its place.
//!
//! While a fling is in flight the deck is locked: further gestures and
//! button dismissals are dropped, so each completed fling advances exactly
//! one item.

use crate::config::DeckConfig;
use crate::gesture::{Direction, GestureAction, GesturePhase, GestureTracker};
use crate::input::DeckInput;
use crate::item::{Item, ItemList};
use crate::mapper;
use flick_animation::{AnimationScheduler, Completions, SpringConfig, SpringId, TransitionId};
use tracing::{debug, trace};

/// What triggered a dismissal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitSource {
    Gesture,
    Button,
}

/// A finished dismissal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Commit {
    pub direction: Direction,
    pub source: CommitSource,
    /// Index of the item that is now on top
    pub index: usize,
}

/// Result of one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Set on the frame a fling completed and the deck advanced
    pub commit: Option<Commit>,
    /// Whether the host should schedule another frame
    pub animating: bool,
}

#[derive(Clone, Copy, Debug)]
struct Fling {
    transition: TransitionId,
    direction: Direction,
    source: CommitSource,
}

pub struct CardDeck {
    config: DeckConfig,
    settle_spring: SpringConfig,
    fling_spring: SpringConfig,
    scheduler: AnimationScheduler,
    offset: SpringId,
    press_scale: SpringId,
    index: usize,
    items: Option<ItemList>,
    tracker: GestureTracker,
    fling: Option<Fling>,
}

impl CardDeck {
    pub fn new(config: DeckConfig) -> Self {
        let mut scheduler = AnimationScheduler::new();
        let offset = scheduler.register(0.0);
        let press_scale = scheduler.register(1.0);
        Self {
            settle_spring: config.settle_spring.spring_config(),
            fling_spring: config.fling_spring.spring_config(),
            tracker: GestureTracker::new(config.commit_threshold),
            config,
            scheduler,
            offset,
            press_scale,
            index: 0,
            items: None,
            fling: None,
        }
    }

    /// A deck with default tuning, already holding `items`
    pub fn with_items(items: ItemList) -> Self {
        let mut deck = Self::new(DeckConfig::default());
        deck.replace_items(items);
        deck
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    // =========================================================================
    // State read by the projector
    // =========================================================================

    /// `None` until the first item list arrives
    pub fn items(&self) -> Option<&ItemList> {
        self.items.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.items.is_some()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Item on top, if the deck is loaded and not exhausted
    pub fn current_item(&self) -> Option<&Item> {
        self.items.as_ref()?.get(self.index)
    }

    /// Item underneath the top card
    pub fn next_item(&self) -> Option<&Item> {
        self.items.as_ref()?.get(self.index + 1)
    }

    pub fn drag_offset(&self) -> f32 {
        self.scheduler.get(self.offset).unwrap_or(0.0)
    }

    pub fn press_scale(&self) -> f32 {
        self.scheduler.get(self.press_scale).unwrap_or(1.0)
    }

    /// Top card tilt in degrees
    pub fn rotation(&self) -> f32 {
        mapper::rotation(self.drag_offset())
    }

    pub fn companion_scale(&self) -> f32 {
        mapper::companion_scale(self.drag_offset())
    }

    pub fn phase(&self) -> GesturePhase {
        self.tracker.phase()
    }

    /// Check if a dismissal fling is in flight
    pub fn is_committing(&self) -> bool {
        self.fling.is_some()
    }

    /// Pending transition on the drag offset spring
    pub fn pending_offset_transition(&self) -> Option<TransitionId> {
        self.scheduler.spring(self.offset)?.pending()
    }

    /// Pending transition on the press scale spring
    pub fn pending_scale_transition(&self) -> Option<TransitionId> {
        self.scheduler.spring(self.press_scale)?.pending()
    }

    pub fn is_animating(&self) -> bool {
        self.scheduler.has_active_animations()
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Swap in a new snapshot
    ///
    /// The index is kept; a shorter list simply exhausts sooner.
    pub fn replace_items(&mut self, items: ItemList) {
        debug!(len = items.len(), index = self.index, "item list replaced");
        self.items = Some(items);
    }

    // =========================================================================
    // Input
    // =========================================================================

    pub fn handle_input(&mut self, input: DeckInput) {
        match input {
            DeckInput::PressStart => self.press_start(),
            DeckInput::DragMove { dx } => self.drag_move(dx),
            DeckInput::Release { dx } => self.release(dx),
            DeckInput::Like => {
                self.dismiss(Direction::Right);
            }
            DeckInput::Dislike => {
                self.dismiss(Direction::Left);
            }
        }
    }

    pub fn press_start(&mut self) {
        if !self.accepts_input("press") {
            return;
        }
        if let Some(action) = self.tracker.press_start() {
            self.apply(action);
        }
    }

    pub fn drag_move(&mut self, dx: f32) {
        if !self.accepts_input("move") || !Self::finite_offset(dx) {
            return;
        }
        if let Some(action) = self.tracker.drag_move(dx) {
            self.apply(action);
        }
    }

    pub fn release(&mut self, dx: f32) {
        if !self.accepts_input("release") || !Self::finite_offset(dx) {
            return;
        }
        if let Some(action) = self.tracker.release(dx) {
            self.apply(action);
        }
    }

    /// Button-driven dismissal, bypassing the drag threshold
    ///
    /// Returns `false` if the deck is not loaded or a dismissal is already
    /// in flight.
    pub fn dismiss(&mut self, direction: Direction) -> bool {
        if !self.accepts_input("dismiss") {
            return false;
        }
        // A button press takes over any drag in progress
        self.tracker.commit(direction);
        self.start_fling(direction, CommitSource::Button);
        true
    }

    pub fn like(&mut self) -> bool {
        self.dismiss(Direction::Right)
    }

    pub fn dislike(&mut self) -> bool {
        self.dismiss(Direction::Left)
    }

    fn accepts_input(&self, what: &'static str) -> bool {
        if self.items.is_none() {
            trace!(what, "input ignored, deck not loaded");
            return false;
        }
        if let Some(fling) = self.fling {
            debug!(what, direction = %fling.direction, "input ignored, dismissal in flight");
            return false;
        }
        true
    }

    fn finite_offset(dx: f32) -> bool {
        if !dx.is_finite() {
            debug!(dx, "input ignored, offset is not finite");
        }
        dx.is_finite()
    }

    fn apply(&mut self, action: GestureAction) {
        match action {
            GestureAction::PressIn => {
                self.scheduler.animate_to(
                    self.press_scale,
                    self.config.pressed_scale,
                    self.settle_spring,
                );
            }
            GestureAction::Track(dx) => {
                self.scheduler.set(self.offset, dx);
            }
            GestureAction::Fling(direction) => {
                // Press scale stays pressed for the whole fling; the advance
                // resets it.
                self.start_fling(direction, CommitSource::Gesture);
            }
            GestureAction::SnapBack => {
                self.scheduler
                    .animate_to(self.press_scale, 1.0, self.settle_spring);
                self.scheduler.animate_to(self.offset, 0.0, self.settle_spring);
            }
        }
    }

    fn start_fling(&mut self, direction: Direction, source: CommitSource) {
        let target = direction.sign() * self.config.fling_distance;
        if let Some(transition) = self
            .scheduler
            .animate_to(self.offset, target, self.fling_spring)
        {
            debug!(%direction, ?source, from = self.drag_offset(), "fling started");
            self.fling = Some(Fling {
                transition,
                direction,
                source,
            });
        }
    }

    // =========================================================================
    // Frames
    // =========================================================================

    /// Advance animations by `dt` seconds
    pub fn tick(&mut self, dt: f32) -> FrameReport {
        let completions = self.scheduler.tick(dt);
        self.finish_frame(completions)
    }

    /// Advance animations by the wall-clock time since the last frame
    pub fn tick_elapsed(&mut self) -> FrameReport {
        let completions = self.scheduler.tick_elapsed();
        self.finish_frame(completions)
    }

    fn finish_frame(&mut self, completions: Completions) -> FrameReport {
        let mut commit = None;
        for completion in completions {
            let Some(fling) = self.fling else { continue };
            if completion.spring == self.offset && completion.transition == fling.transition {
                commit = Some(self.advance(fling));
            }
        }

        if self.tracker.phase() == GesturePhase::Cancelling
            && !self.scheduler.has_active_animations()
        {
            trace!("snap back settled");
            self.tracker.cancel_settled();
        }

        FrameReport {
            commit,
            animating: self.scheduler.has_active_animations(),
        }
    }

    fn advance(&mut self, fling: Fling) -> Commit {
        self.scheduler.set(self.press_scale, 1.0);
        self.index += 1;
        self.scheduler.set(self.offset, 0.0);
        self.fling = None;
        self.tracker.reset();

        debug!(
            index = self.index,
            direction = %fling.direction,
            source = ?fling.source,
            "advanced"
        );
        Commit {
            direction: fling.direction,
            source: fling.source,
            index: self.index,
        }
    }
}
