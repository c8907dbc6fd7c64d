//! Interruptible spring-driven scalar
//!
//! A [`SpringValue`] has two write modes: [`SpringValue::set`] assigns with
//! no animation (direct manipulation, e.g. following a finger) and
//! [`SpringValue::animate_to`] starts a spring transition. Every transition
//! gets a [`TransitionId`]; the id is reported back from [`SpringValue::step`]
//! exactly once, on the frame the spring comes to rest.
//!
//! Any later write supersedes the pending transition. A superseded
//! transition never completes, so at most one completion is outstanding.

use crate::spring::{Spring, SpringConfig};

/// Identifies one `animate_to` call on a [`SpringValue`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(u64);

impl TransitionId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// A scalar animated by spring physics
#[derive(Clone, Debug)]
pub struct SpringValue {
    spring: Spring,
    pending: Option<TransitionId>,
    next_transition: u64,
}

impl SpringValue {
    pub fn new(initial: f32) -> Self {
        Self {
            spring: Spring::new(SpringConfig::default(), initial),
            pending: None,
            next_transition: 0,
        }
    }

    /// Current (possibly mid-flight) value
    pub fn get(&self) -> f32 {
        self.spring.value()
    }

    pub fn velocity(&self) -> f32 {
        self.spring.velocity()
    }

    pub fn target(&self) -> f32 {
        self.spring.target()
    }

    /// The transition whose completion is still outstanding, if any
    pub fn pending(&self) -> Option<TransitionId> {
        self.pending
    }

    /// Check if the value is still moving or owes a completion
    pub fn is_animating(&self) -> bool {
        self.pending.is_some() || !self.spring.is_settled()
    }

    /// Assign immediately, with no spring and zero lag
    ///
    /// Drops any pending transition without completing it.
    pub fn set(&mut self, value: f32) {
        if let Some(superseded) = self.pending.take() {
            tracing::trace!(transition = superseded.0, "transition superseded by set");
        }
        self.spring.snap_to(value);
    }

    /// Start a spring transition toward `target`
    ///
    /// The spring keeps its current velocity, so interrupting a transition
    /// mid-flight carries momentum into the new one.
    pub fn animate_to(&mut self, target: f32, config: SpringConfig) -> TransitionId {
        if let Some(superseded) = self.pending.take() {
            tracing::trace!(transition = superseded.0, "transition superseded by animate_to");
        }
        let id = TransitionId(self.next_transition);
        self.next_transition += 1;
        self.spring.retarget(target, config);
        self.pending = Some(id);
        id
    }

    /// Advance by `dt` seconds
    ///
    /// Returns the pending transition if it settled on this step. The value
    /// lands exactly on the target when that happens.
    pub fn step(&mut self, dt: f32) -> Option<TransitionId> {
        self.spring.step(dt);
        if !self.spring.value().is_finite() || !self.spring.velocity().is_finite() {
            tracing::warn!(target = self.spring.target(), "spring diverged, landing on target");
            self.spring.settle();
        }
        if !self.spring.is_settled() {
            return None;
        }
        let finished = self.pending.take()?;
        self.spring.settle();
        Some(finished)
    }
}

impl Default for SpringValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}
