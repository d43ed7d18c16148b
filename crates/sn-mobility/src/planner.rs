//! Path planning seam.

use sn_core::Vec3;

use crate::{MobilityError, MobilityResult};

/// Turns a start and a goal into the corners to walk through.
///
/// Implementations must be `Send + Sync` so the engine can be shared with
/// worker threads.  The returned list excludes `from` and ends with `to`.
pub trait PathPlanner: Send + Sync {
    fn plan(&self, from: Vec3, to: Vec3) -> MobilityResult<Vec<Vec3>>;
}

impl<P: PathPlanner + ?Sized> PathPlanner for &P {
    fn plan(&self, from: Vec3, to: Vec3) -> MobilityResult<Vec<Vec3>> {
        (**self).plan(from, to)
    }
}

/// Open ground: one straight leg to the goal.
#[derive(Copy, Clone, Debug, Default)]
pub struct StraightLinePlanner;

impl PathPlanner for StraightLinePlanner {
    fn plan(&self, _from: Vec3, to: Vec3) -> MobilityResult<Vec<Vec3>> {
        if !to.is_finite() {
            return Err(MobilityError::NonFinite(to));
        }
        Ok(vec![to])
    }
}
