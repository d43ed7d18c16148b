//! Collider shapes.

use sn_core::Vec3;

/// Collider geometry centred on the owning object's position.
///
/// Boxes are axis-aligned; object rotation does not turn them.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Sphere { radius: f32 },
    Box { half_extents: Vec3 },
}

impl Shape {
    /// Radius of the smallest sphere enclosing the shape.
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            Shape::Sphere { radius }     => radius,
            Shape::Box { half_extents }  => half_extents.length(),
        }
    }

    /// Half extents of the axis-aligned bounding box.
    pub fn half_extents(&self) -> Vec3 {
        match *self {
            Shape::Sphere { radius }     => Vec3::splat(radius),
            Shape::Box { half_extents }  => half_extents,
        }
    }

    /// Whether `point` lies inside the shape placed at `center`.
    pub fn contains(&self, center: Vec3, point: Vec3) -> bool {
        let d = point - center;
        match *self {
            Shape::Sphere { radius }    => d.length_squared() < radius * radius,
            Shape::Box { half_extents } => d.abs().cmplt(half_extents).all(),
        }
    }
}
