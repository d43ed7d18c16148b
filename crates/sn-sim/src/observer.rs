//! Simulation observer trait for progress reporting and data collection.

use sn_core::{GuardId, ObjectId, Tick};

use crate::SimError;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: capture logger
///
/// ```rust,ignore
/// struct CaptureLog(Vec<(Tick, ObjectId)>);
///
/// impl SimObserver for CaptureLog {
///     fn on_capture(&mut self, tick: Tick, _guard: GuardId, target: ObjectId) {
///         self.0.push((tick, target));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.  `rays` is the number of rays cast
    /// by the sampling pass.
    fn on_tick_end(&mut self, _tick: Tick, _rays: usize) {}

    /// A guard's Sight confirmed `object` visible.
    fn on_found(&mut self, _tick: Tick, _guard: GuardId, _object: ObjectId) {}

    /// A visible object left a guard's sensing volume.
    fn on_lost(&mut self, _tick: Tick, _guard: GuardId, _object: ObjectId) {}

    /// A guard's habit changed phase during its tick.
    fn on_phase_change(&mut self, _tick: Tick, _guard: GuardId, _from: &'static str, _to: &'static str) {}

    fn on_capture(&mut self, _tick: Tick, _guard: GuardId, _target: ObjectId) {}

    /// A violation was logged and that guard's update skipped.  Not called
    /// when the run aborts instead.
    fn on_violation(&mut self, _tick: Tick, _error: &SimError) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
