//! Simulation time model.
//!
//! Time advances in fixed steps.  A `Tick` counts steps; `SimClock` maps a
//! tick to elapsed seconds:
//!
//!   elapsed_secs = tick * fixed_dt_secs
//!
//! Habits integrate rotation ratios with `fixed_dt_secs`, so the same
//! configuration always replays identically.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Fixed-step clock.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Seconds per tick.  Default: 1/50 s.
    pub fixed_dt_secs: f32,
    /// The current tick, advanced by `SimClock::advance()`.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(fixed_dt_secs: f32) -> Self {
        Self { fixed_dt_secs, current_tick: Tick::ZERO }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.fixed_dt_secs as f64
    }

    /// How many ticks span `secs` seconds (rounded up).
    #[inline]
    pub fn ticks_for_secs(&self, secs: f32) -> u64 {
        if self.fixed_dt_secs <= 0.0 {
            return 0;
        }
        (secs / self.fixed_dt_secs).ceil().max(0.0) as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Seconds per tick.  Default: 0.02 (50 Hz fixed update).
    pub fixed_dt_secs: f32,

    /// Total ticks simulated by `Sim::run`.
    pub total_ticks: u64,

    /// Run the Sight invariant checks every tick.  A failure counts as a
    /// violation.
    /// Default: on in debug builds.
    pub check_invariants: bool,

    /// Abort on an illegal state transition instead of logging it and
    /// dropping that guard's intents for the tick.  Default: on in debug
    /// builds.
    pub abort_on_violation: bool,

    /// Worker thread count for the parallel sampling pass.  `None` uses
    /// Rayon's global pool.
    pub num_threads: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_dt_secs:      0.02,
            total_ticks:        3_000,
            check_invariants:   cfg!(debug_assertions),
            abort_on_violation: cfg!(debug_assertions),
            num_threads:        None,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.fixed_dt_secs)
    }

    pub fn with_fixed_dt(mut self, secs: f32) -> Self {
        self.fixed_dt_secs = secs;
        self
    }

    pub fn with_total_ticks(mut self, ticks: u64) -> Self {
        self.total_ticks = ticks;
        self
    }

    pub fn with_invariant_checks(mut self, on: bool) -> Self {
        self.check_invariants = on;
        self
    }

    pub fn with_abort_on_violation(mut self, on: bool) -> Self {
        self.abort_on_violation = on;
        self
    }
}
