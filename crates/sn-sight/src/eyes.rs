//! Eye points.

use sn_core::{Quat, Vec3};

use crate::{SightError, SightResult};

/// Eye offsets in the owner's local frame.
///
/// World positions are recomputed from the owner's pose on every query and
/// never cached, so a turning or walking guard always looks from where it
/// actually is.
#[derive(Clone, Debug, PartialEq)]
pub struct EyeSet {
    offsets: Vec<Vec3>,
}

impl EyeSet {
    pub fn new(offsets: Vec<Vec3>) -> SightResult<Self> {
        if offsets.is_empty() {
            return Err(SightError::NoEyes);
        }
        Ok(Self { offsets })
    }

    /// One eye at the owner's origin.
    pub fn single() -> Self {
        Self { offsets: vec![Vec3::ZERO] }
    }

    #[inline]
    pub fn offsets(&self) -> &[Vec3] {
        &self.offsets
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn world_points(&self, position: Vec3, rotation: Quat) -> Vec<Vec3> {
        self.offsets.iter().map(|&o| position + rotation * o).collect()
    }
}

impl Default for EyeSet {
    fn default() -> Self {
        Self::single()
    }
}
