//! Geometry helpers on top of `glam`.
//!
//! Conventions: Y is up, an unrotated object faces `+Z`.  "Planar" helpers
//! ignore the Y component so a guard never pitches toward a target standing
//! on a step.

pub use glam::{Quat, Vec3};

/// Local forward axis.
pub const FORWARD: Vec3 = Vec3::Z;

/// World-space forward direction of `rotation`.
#[inline]
pub fn forward(rotation: Quat) -> Vec3 {
    rotation * FORWARD
}

/// Rotation whose forward axis points along `direction`, keeping Y up.
///
/// Returns `Quat::IDENTITY` for a zero-length direction.
pub fn look_rotation(direction: Vec3) -> Quat {
    let dir = direction.normalize_or_zero();
    if dir == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let yaw = dir.x.atan2(dir.z);
    let pitch = dir.y.atan2(Vec3::new(dir.x, 0.0, dir.z).length());
    Quat::from_rotation_y(yaw) * Quat::from_rotation_x(-pitch)
}

/// Like [`look_rotation`] but flattened onto the XZ plane.
pub fn planar_look_rotation(direction: Vec3) -> Quat {
    look_rotation(Vec3::new(direction.x, 0.0, direction.z))
}

/// Rotation from `from` toward `to`, flattened onto the XZ plane.
#[inline]
pub fn facing_toward(from: Vec3, to: Vec3) -> Quat {
    planar_look_rotation(to - from)
}

/// The same facing turned half a revolution about Y.
#[inline]
pub fn reversed(rotation: Quat) -> Quat {
    Quat::from_rotation_y(std::f32::consts::PI) * rotation
}

/// Angle between two facings, in degrees.
#[inline]
pub fn facing_gap_deg(a: Quat, b: Quat) -> f32 {
    a.angle_between(b).to_degrees()
}
