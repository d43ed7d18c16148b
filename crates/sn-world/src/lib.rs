//! `sn-world` — Structure-of-Arrays storage for world objects.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                 |
//! |------------------|----------------------------------------------------------|
//! | [`silhouette`]   | `Silhouette`: sample points that move with their owner  |
//! | [`shape`]        | `Shape`: collider geometry used by rays and volumes     |
//! | [`store`]        | `WorldObjects` (SoA arrays), `ObjectRef` read view       |
//! | [`builder`]      | `ObjectSpec` (fluent construction of one object)         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod builder;
pub mod shape;
pub mod silhouette;
pub mod store;


pub use builder::ObjectSpec;
pub use shape::Shape;
pub use silhouette::Silhouette;
pub use store::{ObjectRef, WorldObjects};
