//! Animation scheduler
//!
//! Owns every [`SpringValue`] of a view and advances them together, once per
//! display frame. Hosts either pass an explicit frame delta to
//! [`AnimationScheduler::tick`] (deterministic, used by tests and headless
//! replays) or call [`AnimationScheduler::tick_elapsed`] from a real frame
//! loop.
//!
//! The scheduler is single-threaded: gesture handlers and frame ticks run on
//! the same thread and never overlap, so no locking is involved.

use crate::spring::SpringConfig;
use crate::value::{SpringValue, TransitionId};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::time::Instant;

new_key_type! {
    /// Handle to a registered spring value
    pub struct SpringId;
}

/// Longest frame delta fed to the springs in one step (seconds)
///
/// A stalled host (hidden window, debugger) resumes with one bounded step
/// instead of a single huge integration step.
const MAX_FRAME_DELTA: f32 = 1.0 / 15.0;

/// A transition that settled during a tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Completion {
    pub spring: SpringId,
    pub transition: TransitionId,
}

/// Completions produced by one tick; views rarely own more than a couple of
/// springs.
pub type Completions = SmallVec<[Completion; 2]>;

pub struct AnimationScheduler {
    springs: SlotMap<SpringId, SpringValue>,
    last_frame: Instant,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            springs: SlotMap::with_key(),
            last_frame: Instant::now(),
        }
    }

    /// Register a spring value resting at `initial`
    pub fn register(&mut self, initial: f32) -> SpringId {
        self.springs.insert(SpringValue::new(initial))
    }

    pub fn remove(&mut self, id: SpringId) -> Option<SpringValue> {
        self.springs.remove(id)
    }

    /// Current value of a spring
    pub fn get(&self, id: SpringId) -> Option<f32> {
        self.springs.get(id).map(SpringValue::get)
    }

    pub fn spring(&self, id: SpringId) -> Option<&SpringValue> {
        self.springs.get(id)
    }

    /// Assign a value with no animation
    ///
    /// Returns `false` if the spring is not registered.
    pub fn set(&mut self, id: SpringId, value: f32) -> bool {
        match self.springs.get_mut(id) {
            Some(spring) => {
                spring.set(value);
                true
            }
            None => false,
        }
    }

    /// Start a transition on a spring, superseding any pending one
    pub fn animate_to(
        &mut self,
        id: SpringId,
        target: f32,
        config: SpringConfig,
    ) -> Option<TransitionId> {
        let was_idle = !self.has_active_animations();
        let transition = self.springs.get_mut(id)?.animate_to(target, config);
        if was_idle {
            // Reset the clock so the first tick after an idle period does not
            // see the whole idle time as one frame.
            self.last_frame = Instant::now();
        }
        Some(transition)
    }

    /// Advance every spring by `dt` seconds
    ///
    /// Returns the transitions that settled on this frame.
    pub fn tick(&mut self, dt: f32) -> Completions {
        let dt = dt.clamp(0.0, MAX_FRAME_DELTA);
        let mut completions = Completions::new();
        for (id, spring) in self.springs.iter_mut() {
            if let Some(transition) = spring.step(dt) {
                completions.push(Completion {
                    spring: id,
                    transition,
                });
            }
        }
        completions
    }

    /// Advance every spring by the wall-clock time since the previous tick
    pub fn tick_elapsed(&mut self) -> Completions {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.tick(dt)
    }

    /// Check if any spring is moving or owes a completion
    pub fn has_active_animations(&self) -> bool {
        self.springs.values().any(SpringValue::is_animating)
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
