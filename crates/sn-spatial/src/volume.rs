//! Coarse sensing volumes attached to a guard.

use sn_core::geom::forward;
use sn_core::{Quat, Vec3};

use crate::{SpatialError, SpatialResult};

/// Geometry of a sensing volume, in the owner's local frame.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VolumeShape {
    Sphere { radius: f32 },
    /// Cone opening along the owner's forward axis.
    Cone { range: f32, half_angle_deg: f32 },
}

/// A trigger-like volume: objects overlapping it are "contained".
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensingVolume {
    pub shape:  VolumeShape,
    /// Local-space offset of the sphere centre / cone apex.
    pub offset: Vec3,
}

impl SensingVolume {
    pub fn sphere(radius: f32) -> SpatialResult<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(SpatialError::InvalidVolume(format!("sphere radius {radius}")));
        }
        Ok(Self { shape: VolumeShape::Sphere { radius }, offset: Vec3::ZERO })
    }

    pub fn cone(range: f32, half_angle_deg: f32) -> SpatialResult<Self> {
        if !(range > 0.0 && range.is_finite()) {
            return Err(SpatialError::InvalidVolume(format!("cone range {range}")));
        }
        if !(half_angle_deg > 0.0 && half_angle_deg <= 180.0) {
            return Err(SpatialError::InvalidVolume(format!("cone half angle {half_angle_deg}")));
        }
        Ok(Self { shape: VolumeShape::Cone { range, half_angle_deg }, offset: Vec3::ZERO })
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    /// World-space centre (sphere) or apex (cone) for an owner pose.
    #[inline]
    pub fn origin(&self, position: Vec3, rotation: Quat) -> Vec3 {
        position + rotation * self.offset
    }

    /// Radius of a sphere around [`origin`](Self::origin) enclosing the volume.
    pub fn reach(&self) -> f32 {
        match self.shape {
            VolumeShape::Sphere { radius }  => radius,
            VolumeShape::Cone { range, .. } => range,
        }
    }

    /// Whether a body at `point` with bounding radius `slack` overlaps the
    /// volume placed at the owner pose.
    pub fn overlaps(&self, position: Vec3, rotation: Quat, point: Vec3, slack: f32) -> bool {
        let apex = self.origin(position, rotation);
        let v = point - apex;
        let dist = v.length();
        match self.shape {
            VolumeShape::Sphere { radius } => dist <= radius + slack,
            VolumeShape::Cone { range, half_angle_deg } => {
                if dist > range + slack {
                    return false;
                }
                if dist <= slack {
                    return true;
                }
                let angle = forward(rotation).angle_between(v).to_degrees();
                let widen = (slack / dist).min(1.0).asin().to_degrees();
                angle <= half_angle_deg + widen
            }
        }
    }
}
