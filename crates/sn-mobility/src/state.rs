//! Per-guard movement state.

use std::collections::VecDeque;

use sn_core::Vec3;

/// The actuator's view of one guard.
///
/// `position` is the simulated position; it only reaches the world body
/// when the guard's habit follows the path.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementState {
    pub position: Vec3,

    /// Corners still ahead, nearest first.
    pub corners: VecDeque<Vec3>,

    /// Goal of the current path.  Stays set after arrival until the path
    /// is reset.
    pub destination: Option<Vec3>,

    /// Metres per second.
    pub speed: f32,
}

impl MovementState {
    /// A guard standing at `position` with no path.
    pub fn stationary(position: Vec3, speed: f32) -> Self {
        Self { position, corners: VecDeque::new(), destination: None, speed }
    }

    #[inline]
    pub fn has_path(&self) -> bool {
        self.destination.is_some()
    }

    /// `true` while corners remain.
    #[inline]
    pub fn is_moving(&self) -> bool {
        !self.corners.is_empty()
    }

    /// Walk `speed * dt` metres along the corners.
    pub fn advance(&mut self, dt_secs: f32) {
        let mut budget = self.speed * dt_secs;
        while budget > 0.0 {
            let Some(&corner) = self.corners.front() else { break };
            let gap = self.position.distance(corner);
            if gap <= budget {
                self.position = corner;
                self.corners.pop_front();
                budget -= gap;
            } else {
                self.position += (corner - self.position) / gap * budget;
                break;
            }
        }
    }

    pub fn clear_path(&mut self) {
        self.corners.clear();
        self.destination = None;
    }
}
