//! `sn-patrol` — patrol routes and designer data loading.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`route`]  | `PatrolRoute`, `RouteCursor` (ping-pong traversal)            |
//! | [`loader`] | CSV loaders for routes and per-object eye/silhouette points   |
//! | [`error`]  | `PatrolError`, `PatrolResult<T>`                              |

pub mod error;
pub mod loader;
pub mod route;


pub use error::{PatrolError, PatrolResult};
pub use loader::{
    SensorPoints, load_routes_csv, load_routes_reader, load_sensor_points_csv,
    load_sensor_points_reader,
};
pub use route::{PatrolRoute, RouteCursor};
