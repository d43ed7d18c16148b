//! `sn-sim` — fixed-step tick loop for guards and their perception.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Mobility     — idle actuators adopt their body's position, then every
//!                    actuator advances by fixed_dt along its corners.
//!   ② Colliders    — R-tree rebuilt from WorldObjects.
//!   ③ Containment  — per guard: tracker diff → Sight::apply (enters, exits).
//!   ④ Sampling     — Sight::sample once per guard (parallel with `parallel`).
//!   ⑤ Diagnostics  — Sight::check_invariants when config.check_invariants.
//!   ⑥ Habits       — Habit::tick per guard with a read-only HabitContext.
//!   ⑦ Apply        — intents in emission order:
//!                      MoveTo / ResetPath → mobility engine
//!                      FollowPath         → body := actuator position
//!                      Face(q)            → body rotation
//!                      Capture(obj)       → Sim::captures + observer
//! ```
//!
//! Violations (sampling errors, failed invariant checks, illegal state
//! transitions) abort the run when `config.abort_on_violation` is set.
//! Otherwise they are logged, handed to [`SimObserver::on_violation`], and
//! the offending guard skips the rest of its update for that tick.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the sampling pass on Rayon's thread pool.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sn_behavior::LinearPursuitHabit;
//! use sn_core::SimConfig;
//! use sn_mobility::StraightLinePlanner;
//! use sn_sim::{GuardSpec, NoopObserver, SimBuilder};
//! use sn_spatial::SensingVolume;
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), world, StraightLinePlanner)
//!     .guard(GuardSpec::new(guard_body, SensingVolume::cone(10.0, 40.0)?, LinearPursuitHabit::new()))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod guard;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use guard::{Guard, GuardSpec};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Capture, Sim};
