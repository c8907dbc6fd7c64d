//! Flick Animation System
//!
//! Spring physics and frame scheduling for swipeable card views.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//!   and per-spring rest thresholds
//! - **Interruptible Values**: `SpringValue` separates direct assignment from
//!   spring transitions and reports each transition's completion once
//! - **Scheduler**: single-threaded frame clock stepping all springs together
//! - **Interpolation**: allocation-free piecewise-linear curves

pub mod interpolate;
pub mod scheduler;
pub mod spring;
pub mod value;

pub use interpolate::{Extrapolate, Interpolate, PiecewiseLinear};
pub use scheduler::{AnimationScheduler, Completion, Completions, SpringId};
pub use spring::{RestThresholds, Spring, SpringConfig};
pub use value::{SpringValue, TransitionId};
