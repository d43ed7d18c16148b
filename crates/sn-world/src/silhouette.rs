//! Sample points describing an object's visible outline.

use sn_core::Vec3;

/// An ordered list of world-space points on an object's outline.
///
/// Points only ever move by translation with their owner; rotating the
/// owner leaves them where they are.  An object without a silhouette (or
/// with an empty one) is sampled at its own position.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Silhouette {
    points: Vec<Vec3>,
}

impl Silhouette {
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    /// Build from offsets relative to `origin`.
    pub fn from_offsets(origin: Vec3, offsets: &[Vec3]) -> Self {
        Self { points: offsets.iter().map(|&o| origin + o).collect() }
    }

    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shift every point by `delta`.
    pub fn translate(&mut self, delta: Vec3) {
        for p in &mut self.points {
            *p += delta;
        }
    }
}
