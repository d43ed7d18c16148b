//! Unit tests for sn-mobility.

use sn_core::{GuardId, Vec3};

use crate::{MobilityEngine, MobilityError, MobilityResult, PathPlanner, StraightLinePlanner};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Goes around a pillar at the origin by way of (1, 0, 0).
struct DoglegPlanner;

impl PathPlanner for DoglegPlanner {
    fn plan(&self, _from: Vec3, to: Vec3) -> MobilityResult<Vec<Vec3>> {
        Ok(vec![Vec3::X, to])
    }
}

/// Never finds a way.
struct WallPlanner;

impl PathPlanner for WallPlanner {
    fn plan(&self, _from: Vec3, _to: Vec3) -> MobilityResult<Vec<Vec3>> {
        Ok(Vec::new())
    }
}

fn one_guard<P: PathPlanner>(planner: P) -> (MobilityEngine<P>, GuardId) {
    let mut engine = MobilityEngine::new(planner);
    let guard = engine.place(Vec3::ZERO, 1.0);
    (engine, guard)
}

// ── MovementState ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement_state {
    use std::collections::VecDeque;

    use super::*;
    use crate::MovementState;

    #[test]
    fn stationary_does_not_move() {
        let mut s = MovementState::stationary(Vec3::ONE, 3.0);
        s.advance(1.0);
        assert_eq!(s.position, Vec3::ONE);
        assert!(!s.has_path());
        assert!(!s.is_moving());
    }

    #[test]
    fn partial_step() {
        let mut s = MovementState::stationary(Vec3::ZERO, 2.0);
        s.corners = VecDeque::from([Vec3::new(0.0, 0.0, 10.0)]);
        s.advance(0.5);
        assert!((s.position - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-6);
        assert!(s.is_moving());
    }

    #[test]
    fn snaps_and_carries_leftover_across_corners() {
        let mut s = MovementState::stationary(Vec3::ZERO, 2.0);
        s.corners = VecDeque::from([Vec3::X, Vec3::new(1.0, 0.0, 4.0)]);
        s.advance(1.0);
        assert!((s.position - Vec3::new(1.0, 0.0, 1.0)).length() < 1e-6);
        assert_eq!(s.corners.len(), 1);

        s.advance(10.0);
        assert_eq!(s.position, Vec3::new(1.0, 0.0, 4.0));
        assert!(!s.is_moving());
    }
}

// ── MobilityEngine ────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use sn_behavior::Intent;

    use super::*;

    #[test]
    fn place_assigns_sequential_ids() {
        let mut engine = MobilityEngine::new(StraightLinePlanner);
        assert_eq!(engine.place(Vec3::ZERO, 1.0), GuardId(0));
        assert_eq!(engine.place(Vec3::X, 1.0), GuardId(1));
        assert_eq!(engine.len(), 2);
    }

    #[test]
    fn arrives_exactly_on_destination() {
        let (mut engine, g) = one_guard(StraightLinePlanner);
        let goal = Vec3::new(0.0, 0.0, 0.7);
        engine.set_destination(g, goal).unwrap();
        for _ in 0..10 {
            engine.advance_all(0.1);
        }
        let view = engine.view(g).unwrap();
        assert_eq!(view.next_position, goal);
        assert_eq!(view.destination, Some(goal));
        assert!(view.has_path());
    }

    #[test]
    fn reset_stops_in_place() {
        let (mut engine, g) = one_guard(StraightLinePlanner);
        engine.apply(g, &Intent::MoveTo(Vec3::new(0.0, 0.0, 5.0))).unwrap();
        engine.advance_all(1.0);
        engine.apply(g, &Intent::ResetPath).unwrap();
        engine.advance_all(1.0);
        let view = engine.view(g).unwrap();
        assert!((view.next_position.z - 1.0).abs() < 1e-6);
        assert!(!view.has_path());
    }

    #[test]
    fn follows_planner_corners() {
        let (mut engine, g) = one_guard(DoglegPlanner);
        engine.set_destination(g, Vec3::new(1.0, 0.0, 1.0)).unwrap();
        engine.advance_all(1.0);
        assert_eq!(engine.view(g).unwrap().next_position, Vec3::X);
    }

    #[test]
    fn empty_plan_is_no_path() {
        let (mut engine, g) = one_guard(WallPlanner);
        let err = engine.set_destination(g, Vec3::X).unwrap_err();
        assert!(matches!(err, MobilityError::NoPath { .. }));
        assert!(!engine.view(g).unwrap().has_path());
    }

    #[test]
    fn non_finite_goal_rejected() {
        let (mut engine, g) = one_guard(StraightLinePlanner);
        let err = engine.set_destination(g, Vec3::new(f32::NAN, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, MobilityError::NonFinite(_)));
    }

    #[test]
    fn unknown_guard() {
        let mut engine = MobilityEngine::new(StraightLinePlanner);
        assert!(matches!(engine.view(GuardId(3)), Err(MobilityError::UnknownGuard(GuardId(3)))));
        assert!(engine.reset_path(GuardId(0)).is_err());
    }

    #[test]
    fn sync_idle_only_touches_pathless_guards() {
        let (mut engine, g) = one_guard(StraightLinePlanner);
        engine.sync_idle(g, Vec3::Y).unwrap();
        assert_eq!(engine.view(g).unwrap().next_position, Vec3::Y);

        engine.set_destination(g, Vec3::new(0.0, 1.0, 3.0)).unwrap();
        engine.sync_idle(g, Vec3::ZERO).unwrap();
        assert_eq!(engine.view(g).unwrap().next_position, Vec3::Y);
    }

    #[test]
    fn warp_drops_the_path() {
        let (mut engine, g) = one_guard(StraightLinePlanner);
        engine.set_destination(g, Vec3::new(0.0, 0.0, 3.0)).unwrap();
        engine.warp(g, Vec3::new(5.0, 0.0, 5.0)).unwrap();
        engine.advance_all(1.0);
        let view = engine.view(g).unwrap();
        assert_eq!(view.next_position, Vec3::new(5.0, 0.0, 5.0));
        assert!(!view.has_path());
    }
}
