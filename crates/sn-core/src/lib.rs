//! `sn-core` — foundational types for the `sneak` perception framework.
//!
//! Every other `sn-*` crate depends on this one.  It has no `sn-*`
//! dependencies and only two external ones (`glam` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module           | Contents                                              |
//! |------------------|-------------------------------------------------------|
//! | [`ids`]          | `ObjectId`, `GuardId`                                 |
//! | [`geom`]         | `Vec3`/`Quat` re-exports, facing helpers              |
//! | [`layer`]        | `Layer` categories, `LayerMask`                       |
//! | [`capability`]   | `Capabilities` flags (detectable, autonomous)         |
//! | [`time`]         | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`error`]        | `SnError`, `SnResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod capability;
pub mod error;
pub mod geom;
pub mod ids;
pub mod layer;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use capability::Capabilities;
pub use error::{SnError, SnResult};
pub use geom::{Quat, Vec3};
pub use ids::{GuardId, ObjectId};
pub use layer::{Layer, LayerMask};
pub use time::{SimClock, SimConfig, Tick};
