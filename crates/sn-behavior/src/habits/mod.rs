//! Built-in habit archetypes.

pub mod idle;
pub mod linear;
pub mod simple;
pub mod straight;
pub mod wander;

pub use idle::IdleHabit;
pub use linear::{LinearPursuitHabit, Sweep};
pub use simple::{SimpleStatus, SimpleTrackingHabit};
pub use straight::StraightPursuitHabit;
pub use wander::{Patrol, WanderHabit};

/// Slowest turn or sweep rate a habit accepts, in ratio per second.
pub const MIN_ROTATION_SPEED: f32 = 0.01;

/// A rate that could never complete a rotation is raised to
/// [`MIN_ROTATION_SPEED`]; NaN or infinity falls back to `default`.
pub(crate) fn finishing_rate(speed: f32, default: f32) -> f32 {
    if speed.is_finite() { speed.max(MIN_ROTATION_SPEED) } else { default }
}
