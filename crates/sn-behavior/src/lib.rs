//! `sn-behavior` — guard state machines, intents, and habit controllers.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`state`]   | `Protocol`, `StateMachine<S>`, `PursuitState`, `StraightState`    |
//! | [`intent`]  | `Intent` enum (`MoveTo`, `ResetPath`, `FollowPath`, `Face`, `Capture`) |
//! | [`context`] | `HabitContext<'a>`, `PathView`: read-only tick snapshot          |
//! | [`habit`]   | `Habit` trait                                                     |
//! | [`pursuit`] | `AccessPoints`, `Pursuit`, `Retrace`: chase-and-return bookkeeping |
//! | [`habits`]  | Idle, Wander, SimpleTracking, StraightPursuit, LinearPursuit     |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                              |
//!
//! # Design notes
//!
//! The tick loop in sn-sim calls every guard's habit after containment and
//! sampling have run.  A habit reads the world through `&HabitContext` and
//! talks back only through the returned `Vec<Intent>`, which the loop then
//! applies in order.  The one exception is the guard's own `Sight`: habits
//! get it mutably because reading the found/lost counters resets them, and
//! some archetypes switch perception off while they walk home.
//!
//! State machines never pick a transition on their own.  Habits ask for a
//! specific target state and an illegal request comes back as
//! [`BehaviorError::InvalidTransition`].

pub mod context;
pub mod error;
pub mod habit;
pub mod habits;
pub mod intent;
pub mod pursuit;
pub mod state;

#[cfg(test)]
mod tests;

pub use context::{HabitContext, PathView};
pub use error::{BehaviorError, BehaviorResult};
pub use habit::Habit;
pub use habits::{
    IdleHabit, LinearPursuitHabit, Patrol, SimpleTrackingHabit, StraightPursuitHabit, WanderHabit,
};
pub use intent::Intent;
pub use pursuit::{AccessPoints, Pursuit, Retrace};
pub use state::{Protocol, PursuitState, StateMachine, StraightState};
