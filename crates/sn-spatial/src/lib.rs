//! `sn-spatial` — the physics-side collaborators a Sight talks to.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`ray`]         | `Ray`, `RayHit`, `Raycaster` trait                         |
//! | [`colliders`]   | `ColliderIndex` (R-tree + exact sphere/box ray tests)      |
//! | [`volume`]      | `SensingVolume` (sphere or forward cone)                   |
//! | [`containment`] | `ContainmentTracker`, `ContainmentEvent` (enter/exit)      |
//! | [`error`]       | `SpatialError`, `SpatialResult<T>`                         |
//!
//! # Pluggability
//!
//! Sight only sees the [`Raycaster`] trait and [`ContainmentEvent`]s, so a
//! host engine can replace `ColliderIndex` and `ContainmentTracker` with its
//! own physics without touching the perception core.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod colliders;
pub mod containment;
pub mod error;
pub mod ray;
pub mod volume;


pub use colliders::{ColliderEntry, ColliderIndex};
pub use containment::{ContainmentEvent, ContainmentTracker};
pub use error::{SpatialError, SpatialResult};
pub use ray::{Ray, RayHit, Raycaster};
pub use volume::{SensingVolume, VolumeShape};
