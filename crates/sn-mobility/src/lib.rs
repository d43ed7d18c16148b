//! `sn-mobility` — the movement actuator behind `MoveTo` / `FollowPath`.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                         |
//! |-------------|------------------------------------------------------------------|
//! | [`planner`] | `PathPlanner` trait, `StraightLinePlanner`                       |
//! | [`state`]   | `MovementState`: per-guard simulated position and corners       |
//! | [`engine`]  | `MobilityEngine<P>`: intent-driven destinations + advancement   |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                             |
//!
//! # Movement model (simulate, then adopt)
//!
//! The actuator moves its own copy of each guard's position; it never
//! writes to the world.
//!
//! 1. A `MoveTo` intent plans corners from the simulated position via a
//!    pluggable [`PathPlanner`].
//! 2. `MobilityEngine::advance_all(dt)` walks every guard's simulated
//!    position along its corners at `speed`, snapping onto a corner when
//!    the step covers it.
//! 3. The habit sees that position as [`PathView::next_position`] and, by
//!    emitting `FollowPath`, asks the tick loop to copy it onto the body.
//!
//! A guard without a path is kept in sync with its body through
//! [`MobilityEngine::sync_idle`], so turning on the spot or being moved by
//! a script never leaves a stale position behind.
//!
//! [`PathView::next_position`]: sn_behavior::PathView::next_position

pub mod engine;
pub mod error;
pub mod planner;
pub mod state;

#[cfg(test)]
mod tests;

pub use engine::MobilityEngine;
pub use error::{MobilityError, MobilityResult};
pub use planner::{PathPlanner, StraightLinePlanner};
pub use state::MovementState;
