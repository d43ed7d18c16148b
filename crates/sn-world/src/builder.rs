//! Fluent description of one world object.
//!
//! # Usage
//!
//! ```rust
//! use sn_core::{Layer, Vec3};
//! use sn_world::{ObjectSpec, Shape, WorldObjects};
//!
//! let mut world = WorldObjects::new();
//! let crate_box = world.spawn(
//!     ObjectSpec::new("crate")
//!         .at(Vec3::new(0.0, 0.0, 4.0))
//!         .shape(Shape::Box { half_extents: Vec3::splat(0.5) }),
//! );
//! let thief = world.spawn(
//!     ObjectSpec::new("thief")
//!         .at(Vec3::new(2.0, 0.0, 8.0))
//!         .detectable()
//!         .shape(Shape::Sphere { radius: 0.4 })
//!         .silhouette(vec![Vec3::new(0.0, 0.8, 0.0), Vec3::new(0.0, -0.8, 0.0)]),
//! );
//!
//! assert_eq!(world.len(), 2);
//! assert!(!world.is_detectable(crate_box));
//! assert_eq!(world.sample_points(thief)[0], Vec3::new(2.0, 0.8, 8.0));
//! assert_eq!(world.layer[crate_box.index()], Layer::DEFAULT);
//! ```

use sn_core::{Capabilities, Layer, Quat, Vec3};

use crate::Shape;

/// Everything needed to spawn an object into [`WorldObjects`][crate::WorldObjects].
#[derive(Clone, Debug)]
pub struct ObjectSpec {
    pub name:               String,
    pub position:           Vec3,
    pub rotation:           Quat,
    pub layer:              Layer,
    pub caps:               Capabilities,
    pub shape:              Option<Shape>,
    /// Offsets from `position`; resolved to world space on spawn.
    pub silhouette_offsets: Option<Vec<Vec3>>,
}

impl ObjectSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:               name.into(),
            position:           Vec3::ZERO,
            rotation:           Quat::IDENTITY,
            layer:              Layer::DEFAULT,
            caps:               Capabilities::NONE,
            shape:              None,
            silhouette_offsets: None,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn facing(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    pub fn detectable(mut self) -> Self {
        self.caps.insert(Capabilities::DETECTABLE);
        self
    }

    pub fn autonomous(mut self) -> Self {
        self.caps.insert(Capabilities::AUTONOMOUS);
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn silhouette(mut self, offsets: Vec<Vec3>) -> Self {
        self.silhouette_offsets = Some(offsets);
        self
    }
}
