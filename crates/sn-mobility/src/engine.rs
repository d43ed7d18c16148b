//! High-level mobility engine: applies path intents and advances guards.

use sn_behavior::{Intent, PathView};
use sn_core::{GuardId, Vec3};

use crate::{MobilityError, MobilityResult, MovementState, PathPlanner};

/// Wraps a [`PathPlanner`] and one [`MovementState`] per guard.
///
/// # Type parameter
///
/// `P` is the planning algorithm, fixed at compile time.  The sim uses
/// [`StraightLinePlanner`][crate::StraightLinePlanner] unless the caller
/// supplies something smarter.
pub struct MobilityEngine<P: PathPlanner> {
    pub planner: P,

    /// Indexed by `GuardId`.
    pub states: Vec<MovementState>,
}

impl<P: PathPlanner> MobilityEngine<P> {
    pub fn new(planner: P) -> Self {
        Self { planner, states: Vec::new() }
    }

    /// Register the next guard, standing at `position`.  Guards must be
    /// placed in `GuardId` order.
    pub fn place(&mut self, position: Vec3, speed: f32) -> GuardId {
        let id = GuardId(self.states.len() as u16);
        self.states.push(MovementState::stationary(position, speed));
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, guard: GuardId) -> MobilityResult<&MovementState> {
        self.states.get(guard.index()).ok_or(MobilityError::UnknownGuard(guard))
    }

    fn state_mut(&mut self, guard: GuardId) -> MobilityResult<&mut MovementState> {
        self.states.get_mut(guard.index()).ok_or(MobilityError::UnknownGuard(guard))
    }

    /// Teleport `guard` to `position`, dropping any path.
    pub fn warp(&mut self, guard: GuardId, position: Vec3) -> MobilityResult<()> {
        let state = self.state_mut(guard)?;
        state.clear_path();
        state.position = position;
        Ok(())
    }

    /// Adopt the body's position for a guard that has no path.
    pub fn sync_idle(&mut self, guard: GuardId, position: Vec3) -> MobilityResult<()> {
        let state = self.state_mut(guard)?;
        if !state.has_path() {
            state.position = position;
        }
        Ok(())
    }

    /// Plan a path from the simulated position to `to`.
    pub fn set_destination(&mut self, guard: GuardId, to: Vec3) -> MobilityResult<()> {
        let from = self.state(guard)?.position;
        let corners = self.planner.plan(from, to)?;
        if corners.is_empty() {
            return Err(MobilityError::NoPath { from, to });
        }
        log::trace!("{guard} path {from} -> {to} via {} corner(s)", corners.len());
        let state = self.state_mut(guard)?;
        state.corners = corners.into();
        state.destination = Some(to);
        Ok(())
    }

    pub fn reset_path(&mut self, guard: GuardId) -> MobilityResult<()> {
        self.state_mut(guard)?.clear_path();
        Ok(())
    }

    /// Move every guard with a path along it by `dt_secs`.
    pub fn advance_all(&mut self, dt_secs: f32) {
        for state in &mut self.states {
            state.advance(dt_secs);
        }
    }

    /// What the habit gets to see about `guard`'s path.
    pub fn view(&self, guard: GuardId) -> MobilityResult<PathView> {
        let state = self.state(guard)?;
        Ok(PathView { next_position: state.position, destination: state.destination })
    }

    /// Apply the path-related part of an intent.  Other intents are left
    /// to the caller.
    pub fn apply(&mut self, guard: GuardId, intent: &Intent) -> MobilityResult<()> {
        match *intent {
            Intent::MoveTo(to) => self.set_destination(guard, to),
            Intent::ResetPath  => self.reset_path(guard),
            Intent::FollowPath | Intent::Face(_) | Intent::Capture(_) => Ok(()),
        }
    }
}
