//! `sn-sight` — the visibility detection engine.
//!
//! A [`Sight`] belongs to one guard.  It keeps two nested sets:
//!
//! - the **containment set**: detectable objects currently inside the
//!   guard's sensing volume, maintained from enter/exit notifications;
//! - the **found set**: members of the containment set that a raycast from
//!   one of the guard's eyes has confirmed visible.
//!
//! Transitions are reported through two read-and-reset counters so a habit
//! can poll "anything new?" once per tick.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`sight`]   | `Sight`, `SampleReport`                                       |
//! | [`config`]  | `SightConfig` (ray overshoot, ignored layers, strictness)     |
//! | [`eyes`]    | `EyeSet`: local eye offsets, resolved per query             |
//! | [`set`]     | `ObjectSet`: insertion-ordered id set                        |
//! | [`tally`]   | `Tally`: read-and-reset event counter                        |
//! | [`error`]   | `SightError`, `SightResult<T>`                                |
//!
//! # Set policy
//!
//! The found set is always a subset of the containment set.  Sampling only
//! promotes a ray hit when the hit object is already contained, and
//! removing an object from containment also removes it from the found set.
//! [`Sight::check_invariants`] verifies the relation for diagnostics runs.

pub mod config;
pub mod error;
pub mod eyes;
pub mod set;
pub mod sight;
pub mod tally;


pub use config::SightConfig;
pub use error::{SightError, SightResult};
pub use eyes::EyeSet;
pub use set::ObjectSet;
pub use sight::{SampleReport, Sight};
pub use tally::Tally;
