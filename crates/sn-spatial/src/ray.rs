//! Raycast query primitive.

use sn_core::{LayerMask, ObjectId, Vec3};

use crate::{SpatialError, SpatialResult};

// ── Ray ───────────────────────────────────────────────────────────────────────

/// A bounded half-line with a unit direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin:       Vec3,
    pub direction:    Vec3,
    pub max_distance: f32,
}

impl Ray {
    /// `direction` is normalized here.  Fails on a zero direction.
    pub fn new(origin: Vec3, direction: Vec3, max_distance: f32) -> SpatialResult<Ray> {
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            return Err(SpatialError::DegenerateRay);
        }
        Ok(Ray { origin, direction, max_distance })
    }

    /// Ray from `from` toward `to`, reaching `overshoot` past `to`.
    pub fn toward(from: Vec3, to: Vec3, overshoot: f32) -> SpatialResult<Ray> {
        let delta = to - from;
        Ray::new(from, delta, delta.length() + overshoot)
    }

    #[inline]
    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

// ── RayHit ────────────────────────────────────────────────────────────────────

/// The first collider a ray struck.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    pub object:   ObjectId,
    pub distance: f32,
    pub point:    Vec3,
}

// ── Raycaster trait ───────────────────────────────────────────────────────────

/// First-hit raycast query.
///
/// Implementations must skip colliders whose layer is in `ignore` and
/// colliders that contain the ray origin.
///
/// # Thread safety
///
/// `Send + Sync` so one index can serve a parallel sampling pass.
pub trait Raycaster: Send + Sync {
    fn raycast(&self, ray: &Ray, ignore: LayerMask) -> Option<RayHit>;
}

impl<T: Raycaster + ?Sized> Raycaster for &T {
    fn raycast(&self, ray: &Ray, ignore: LayerMask) -> Option<RayHit> {
        (**self).raycast(ray, ignore)
    }
}
