//! Unit tests for sn-behavior.

// ── Helpers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rig {
    use sn_core::{GuardId, ObjectId, Quat, Tick, Vec3};
    use sn_sight::{EyeSet, Sight, SightConfig};
    use sn_spatial::ColliderIndex;
    use sn_world::{ObjectSpec, Shape, WorldObjects};

    use crate::{Habit, HabitContext, Intent, PathView};

    /// A guard at the origin facing +Z, a thief six metres ahead, and a
    /// straight-line mover standing in for the movement actuator.
    pub struct Rig {
        pub world:       WorldObjects,
        pub guard:       ObjectId,
        pub thief:       ObjectId,
        pub sight:       Sight,
        pub destination: Option<Vec3>,
        pub speed:       f32,
        pub dt:          f32,
        pub reach:       f32,
        pub captures:    Vec<ObjectId>,
    }

    impl Rig {
        pub fn new() -> Self {
            let mut world = WorldObjects::new();
            let guard = world.spawn(
                ObjectSpec::new("guard")
                    .detectable()
                    .autonomous()
                    .shape(Shape::Sphere { radius: 0.5 }),
            );
            let thief = world.spawn(
                ObjectSpec::new("thief")
                    .at(Vec3::new(0.0, 0.0, 6.0))
                    .detectable()
                    .shape(Shape::Sphere { radius: 0.4 }),
            );
            let mut sight = Sight::new(SightConfig::default());
            sight.register(guard, EyeSet::single());
            Self {
                world,
                guard,
                thief,
                sight,
                destination: None,
                speed: 2.0,
                dt: 0.1,
                reach: 1.0,
                captures: Vec::new(),
            }
        }

        pub fn spawn_decoy(&mut self, at: Vec3) -> ObjectId {
            self.world.spawn(
                ObjectSpec::new("decoy").at(at).detectable().shape(Shape::Sphere { radius: 0.4 }),
            )
        }

        /// Containment enter followed by one sampling pass.
        pub fn spot(&mut self, objects: &[ObjectId]) {
            for &obj in objects {
                self.sight.include(obj, &self.world);
            }
            let index = ColliderIndex::from_world(&self.world).unwrap();
            self.sight.sample(&self.world, &index).unwrap();
        }

        pub fn hide(&mut self, obj: ObjectId) {
            self.sight.exclude(obj, &self.world);
        }

        pub fn position(&self) -> Vec3 {
            self.world.position[self.guard.index()]
        }

        pub fn rotation(&self) -> Quat {
            self.world.rotation[self.guard.index()]
        }

        fn next_position(&self) -> Vec3 {
            let here = self.position();
            match self.destination {
                Some(goal) => {
                    let step = self.speed * self.dt;
                    let to_goal = goal - here;
                    if to_goal.length() <= step { goal } else { here + to_goal.normalize() * step }
                }
                None => here,
            }
        }

        /// One habit tick followed by applying its intents.
        pub fn step(&mut self, habit: &mut dyn Habit) -> Vec<Intent> {
            let next = self.next_position();
            let intents = {
                let ctx = HabitContext {
                    tick:         Tick::ZERO,
                    dt_secs:      self.dt,
                    guard:        GuardId(0),
                    body:         self.guard,
                    position:     self.position(),
                    rotation:     self.rotation(),
                    reach_radius: self.reach,
                    path:         PathView { next_position: next, destination: self.destination },
                    world:        &self.world,
                };
                habit.tick(&ctx, &mut self.sight).unwrap()
            };
            for intent in &intents {
                match *intent {
                    Intent::MoveTo(goal) => self.destination = Some(goal),
                    Intent::ResetPath    => self.destination = None,
                    Intent::FollowPath   => self.world.set_position(self.guard, next).unwrap(),
                    Intent::Face(q)      => self.world.set_rotation(self.guard, q).unwrap(),
                    Intent::Capture(obj) => self.captures.push(obj),
                }
            }
            intents
        }

        /// Step until `done` holds; panics after `max` ticks.
        pub fn run_until<H: Habit>(&mut self, habit: &mut H, max: usize, done: impl Fn(&H) -> bool) -> usize {
            for n in 1..=max {
                self.step(habit);
                if done(habit) {
                    return n;
                }
            }
            panic!("condition not met within {max} ticks (phase {})", habit.phase());
        }
    }

    pub fn near(a: Vec3, b: Vec3) -> bool {
        a.distance(b) < 1e-4
    }

    pub fn same_facing(a: Quat, b: Quat) -> bool {
        a.angle_between(b) < 1e-3
    }
}

// ── State machines ────────────────────────────────────────────────────────────

#[cfg(test)]
mod state_tests {
    use crate::{BehaviorError, Protocol, PursuitState, StateMachine, StraightState};

    fn check_table<S: Protocol>(legal: &[(S, S)]) {
        for &from in S::ALL {
            for &to in S::ALL {
                let mut m = StateMachine::new(from);
                let expected = legal.contains(&(from, to));
                match m.transition(to) {
                    Ok(prev) => {
                        assert!(expected, "{from:?} -> {to:?} should be refused");
                        assert_eq!(prev, from);
                        assert_eq!(m.state(), to);
                    }
                    Err(BehaviorError::InvalidTransition { from: f, to: t }) => {
                        assert!(!expected, "{from:?} -> {to:?} should be allowed");
                        assert_eq!((f, t), (from.name(), to.name()));
                        assert_eq!(m.state(), from, "a refused transition must not move");
                    }
                    Err(other) => panic!("unexpected error {other}"),
                }
            }
        }
    }

    #[test]
    fn full_table_is_exact() {
        use PursuitState::*;
        let mut legal = vec![
            (GoBack, Wonder),
            (Wonder, Track),
            (Track, ReachedAttackDistance),
            (ReachedAttackDistance, SearchingAttackObj),
            (SearchingAttackObj, LostAttackObj),
            (ReachedAttackDistance, Attacking),
            (Track, JustLost),
            (LostAttackObj, JustLost),
            (JustLost, GoBack),
        ];
        for &s in PursuitState::ALL {
            if s != Disabled {
                legal.push((s, Disabled));
            }
        }
        check_table(&legal);
    }

    #[test]
    fn reduced_table_is_exact() {
        use StraightState::*;
        check_table(&[
            (Wonder, Track),
            (Track, ReachedAttackDistance),
            (Track, JustLost),
            (ReachedAttackDistance, JustLost),
            (JustLost, GoBack),
            (GoBack, Wonder),
        ]);
    }

    #[test]
    fn full_cycle_through_search() {
        let mut m = StateMachine::new(PursuitState::default());
        m.to_track().unwrap();
        m.to_reach_attack_distance().unwrap();
        m.to_search_attack_obj().unwrap();
        assert!(m.is_searching());
        m.to_lose_attack_obj().unwrap();
        m.to_just_lost().unwrap();
        m.to_go_back().unwrap();
        assert!(m.is_going_back());
        m.to_wonder().unwrap();
        assert!(m.is_wondering());
    }

    #[test]
    fn wonder_cannot_skip_to_search() {
        let mut m = StateMachine::new(PursuitState::Wonder);
        let err = m.to_search_attack_obj().unwrap_err();
        assert!(matches!(err, BehaviorError::InvalidTransition { from: "wonder", to: "searching-attack-obj" }));
        assert!(m.is_wondering());
    }

    #[test]
    fn disabled_is_terminal() {
        let mut m = StateMachine::new(PursuitState::Track);
        m.disable();
        m.disable();
        assert!(m.is_disabled());
        for &to in PursuitState::ALL {
            assert!(m.transition(to).is_err());
        }
    }

    #[test]
    fn default_machines_start_wondering() {
        assert_eq!(StateMachine::<PursuitState>::default().state(), PursuitState::Wonder);
        assert_eq!(StateMachine::<StraightState>::default().state(), StraightState::Wonder);
    }

    #[test]
    fn names_display() {
        assert_eq!(PursuitState::ReachedAttackDistance.to_string(), "reached-attack-distance");
        assert_eq!(StraightState::GoBack.to_string(), "go-back");
    }
}

// ── Pursuit bookkeeping ───────────────────────────────────────────────────────

#[cfg(test)]
mod pursuit_tests {
    use sn_core::{GuardId, Vec3};

    use super::rig::Rig;
    use crate::{AccessPoints, BehaviorError, HabitContext, Intent, Pursuit, Retrace};

    #[test]
    fn access_points_are_lifo() {
        let mut ap = AccessPoints::new();
        ap.push(Vec3::X);
        ap.push(Vec3::Y);
        assert_eq!(ap.last(), Some(Vec3::Y));
        assert_eq!(ap.pop(), Some(Vec3::Y));
        assert_eq!(ap.len(), 1);
        ap.clear();
        assert!(ap.is_empty());
        assert_eq!(ap.pop(), None);
    }

    #[test]
    fn begin_pushes_origin_then_target() {
        let rig = Rig::new();
        let ctx = HabitContext::at_rest(&rig.world, GuardId(0), rig.guard, 0.1, 1.0).unwrap();
        let mut p = Pursuit::new();
        let intents = p.begin(&ctx, rig.thief).unwrap();
        assert_eq!(p.access_points().as_slice(), &[Vec3::ZERO, Vec3::new(0.0, 0.0, 6.0)]);
        assert_eq!(intents[0], Intent::MoveTo(Vec3::new(0.0, 0.0, 6.0)));
        assert_eq!(p.target(), Some(rig.thief));
    }

    #[test]
    fn head_back_on_empty_stack_fails() {
        let rig = Rig::new();
        let ctx = HabitContext::at_rest(&rig.world, GuardId(0), rig.guard, 0.1, 1.0).unwrap();
        let mut p = Pursuit::new();
        assert!(matches!(p.head_back(&ctx), Err(BehaviorError::NoAccessPoint)));
        assert!(matches!(p.walk_back(&ctx, 1.0, 1.0), Err(BehaviorError::NoAccessPoint)));
    }

    #[test]
    fn walk_back_pops_waypoint_then_origin() {
        let rig = Rig::new();
        let mut ctx = HabitContext::at_rest(&rig.world, GuardId(0), rig.guard, 0.1, 1.0).unwrap();
        let mut p = Pursuit::new();
        p.begin(&ctx, rig.thief).unwrap();
        p.mark(Vec3::new(0.0, 0.0, 5.0));
        p.head_back(&ctx).unwrap();

        // Loose tolerance for the target point.
        ctx.path.next_position = Vec3::new(0.0, 0.0, 5.5);
        let (progress, intents) = p.walk_back(&ctx, 1.0, 1e-4).unwrap();
        assert_eq!(progress, Retrace::Waypoint);
        assert!(intents.contains(&Intent::MoveTo(Vec3::ZERO)));

        // Tight tolerance for the origin.
        ctx.path.next_position = Vec3::new(0.0, 0.0, 0.01);
        assert_eq!(p.walk_back(&ctx, 1.0, 1e-4).unwrap().0, Retrace::Walking);
        ctx.path.next_position = Vec3::ZERO;
        let (progress, intents) = p.walk_back(&ctx, 1.0, 1e-4).unwrap();
        assert_eq!(progress, Retrace::Home);
        assert!(intents.contains(&Intent::ResetPath));
        assert!(p.access_points().is_empty());
    }
}

// ── Patrol ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod wander_tests {
    use sn_core::Vec3;
    use sn_core::geom::facing_toward;
    use sn_patrol::PatrolRoute;

    use super::rig::{Rig, near, same_facing};
    use crate::habits::{MIN_ROTATION_SPEED, finishing_rate};
    use crate::{Habit, Intent, WanderHabit};

    fn route() -> PatrolRoute {
        PatrolRoute::new(vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0), Vec3::new(2.0, 0.0, 2.0)]).unwrap()
    }

    #[test]
    fn aligned_guard_walks_at_once() {
        let mut rig = Rig::new();
        let mut habit = WanderHabit::new(route());
        let intents = rig.step(&mut habit);
        assert!(intents.contains(&Intent::MoveTo(Vec3::new(0.0, 0.0, 2.0))));
        assert_eq!(habit.phase(), "walking");
    }

    #[test]
    fn turns_in_place_before_a_sharp_corner() {
        let mut rig = Rig::new();
        let mut habit = WanderHabit::new(route());
        rig.run_until(&mut habit, 50, |h| h.patrol().cursor().next_index() == 2);
        assert!(near(rig.position(), Vec3::new(0.0, 0.0, 2.0)));

        // 90 degrees to the next waypoint: no movement until aligned.
        let intents = rig.step(&mut habit);
        assert!(matches!(intents.as_slice(), [Intent::Face(_)]));
        assert_eq!(habit.phase(), "turning");
        assert!(near(rig.position(), Vec3::new(0.0, 0.0, 2.0)));

        rig.run_until(&mut habit, 100, |h| h.patrol().is_moving());
        let desired = facing_toward(Vec3::new(0.0, 0.0, 2.0), Vec3::new(2.0, 0.0, 2.0));
        assert!(same_facing(rig.rotation(), desired));
    }

    #[test]
    fn bounces_at_the_last_waypoint() {
        let mut rig = Rig::new();
        let mut habit = WanderHabit::new(route());
        rig.run_until(&mut habit, 300, |h| h.patrol().cursor().direction() < 0);
        assert_eq!(habit.patrol().cursor().next_index(), 1);
        assert!(near(rig.position(), Vec3::new(2.0, 0.0, 2.0)));
    }

    #[test]
    fn stalled_turn_rate_still_finishes_the_corner() {
        let mut rig = Rig::new();
        let mut habit = WanderHabit::new(route()).with_rotation_speed(-1.0);
        rig.run_until(&mut habit, 50, |h| h.patrol().cursor().next_index() == 2);
        rig.step(&mut habit);
        assert_eq!(habit.phase(), "turning");

        // 0.01 per second at 0.1 s a tick.
        rig.run_until(&mut habit, 1_100, |h| h.patrol().is_moving());
        let desired = facing_toward(Vec3::new(0.0, 0.0, 2.0), Vec3::new(2.0, 0.0, 2.0));
        assert!(same_facing(rig.rotation(), desired));
    }

    #[test]
    fn unusable_rates_are_replaced() {
        assert_eq!(finishing_rate(0.0, 0.5), MIN_ROTATION_SPEED);
        assert_eq!(finishing_rate(-3.0, 0.5), MIN_ROTATION_SPEED);
        assert_eq!(finishing_rate(f32::NAN, 0.5), 0.5);
        assert_eq!(finishing_rate(f32::INFINITY, 0.5), 0.5);
        assert_eq!(finishing_rate(1.5, 0.5), 1.5);
    }

    #[test]
    fn ignores_sightings() {
        let mut rig = Rig::new();
        let mut habit = WanderHabit::new(route());
        let thief = rig.thief;
        rig.spot(&[thief]);
        rig.step(&mut habit);
        assert_eq!(rig.sight.pending_found(), 0);
        assert!(rig.captures.is_empty());
    }
}

// ── Idle ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod idle_tests {
    use super::rig::Rig;
    use crate::IdleHabit;

    #[test]
    fn drains_counters_without_moving() {
        let mut rig = Rig::new();
        let thief = rig.thief;
        rig.spot(&[thief]);
        rig.hide(thief);
        let intents = rig.step(&mut IdleHabit);
        assert!(intents.is_empty());
        assert_eq!(rig.sight.pending_found(), 0);
        assert_eq!(rig.sight.pending_lost(), 0);
    }
}

// ── Simple tracking ───────────────────────────────────────────────────────────

#[cfg(test)]
mod simple_tests {
    use sn_core::{Quat, Vec3};

    use super::rig::{Rig, near, same_facing};
    use crate::habits::SimpleStatus;
    use crate::{Intent, SimpleTrackingHabit};

    #[test]
    fn nothing_found_nothing_done() {
        let mut rig = Rig::new();
        let mut habit = SimpleTrackingHabit::new();
        assert!(rig.step(&mut habit).is_empty());
        assert_eq!(habit.status(), SimpleStatus::Idle);
    }

    #[test]
    fn tracks_then_rests_and_returns() {
        let mut rig = Rig::new();
        let mut habit = SimpleTrackingHabit::new();
        let thief = rig.thief;
        rig.spot(&[thief]);

        let intents = rig.step(&mut habit);
        assert_eq!(intents, vec![Intent::MoveTo(Vec3::new(0.0, 0.0, 6.0))]);
        assert_eq!(habit.status(), SimpleStatus::Tracking(thief));

        rig.run_until(&mut habit, 50, |h| h.status() == SimpleStatus::Returning);
        assert!(rig.position().distance(Vec3::new(0.0, 0.0, 6.0)) <= 2.0 + 1e-4);
        assert!(!rig.sight.is_enabled());
        assert!(same_facing(rig.rotation(), Quat::from_rotation_y(std::f32::consts::PI)));

        rig.run_until(&mut habit, 50, |h| h.status() == SimpleStatus::Idle);
        assert!(near(rig.position(), Vec3::ZERO));
        assert!(same_facing(rig.rotation(), Quat::IDENTITY));
        assert!(rig.sight.is_enabled());
        assert!(!rig.sight.is_feeling_presence());
    }

    #[test]
    fn capture_radius_is_tunable() {
        let mut rig = Rig::new();
        let mut habit = SimpleTrackingHabit::new().with_capture_radius(0.5);
        let thief = rig.thief;
        rig.spot(&[thief]);

        rig.run_until(&mut habit, 60, |h| h.status() == SimpleStatus::Returning);
        let gap = rig.position().distance(Vec3::new(0.0, 0.0, 6.0));
        assert!(gap <= 0.5 + 1e-4, "stopped {gap} short");
    }

    #[test]
    fn losing_sight_turns_back() {
        let mut rig = Rig::new();
        let mut habit = SimpleTrackingHabit::new();
        let thief = rig.thief;
        rig.spot(&[thief]);
        rig.step(&mut habit);
        rig.step(&mut habit);
        rig.hide(thief);

        let intents = rig.step(&mut habit);
        assert_eq!(intents[0], Intent::MoveTo(Vec3::ZERO));
        assert_eq!(habit.status(), SimpleStatus::Returning);
        assert!(rig.sight.is_enabled());
    }
}

// ── Straight pursuit ──────────────────────────────────────────────────────────

#[cfg(test)]
mod straight_tests {
    use sn_core::{Quat, Vec3};

    use super::rig::{Rig, near, same_facing};
    use crate::{Habit, Intent, StraightPursuitHabit, StraightState};

    #[test]
    fn picks_the_closest_found_object() {
        let mut rig = Rig::new();
        let thief = rig.thief;
        let decoy = rig.spawn_decoy(Vec3::new(2.0, 0.0, 3.0));
        rig.spot(&[thief, decoy]);
        assert_eq!(rig.sight.found().first(), Some(thief));

        let mut habit = StraightPursuitHabit::new();
        let intents = rig.step(&mut habit);
        assert_eq!(intents[0], Intent::MoveTo(Vec3::new(2.0, 0.0, 3.0)));
        assert_eq!(habit.pursuit().target(), Some(decoy));
        assert_eq!(habit.state(), StraightState::Track);
    }

    #[test]
    fn reach_lose_and_come_home() {
        let mut rig = Rig::new();
        let mut habit = StraightPursuitHabit::new();
        let thief = rig.thief;
        rig.spot(&[thief]);

        rig.run_until(&mut habit, 50, |h| h.state() == StraightState::ReachedAttackDistance);
        assert!(rig.position().distance(Vec3::new(0.0, 0.0, 6.0)) <= rig.reach + 1e-4);
        assert_eq!(habit.pursuit().access_points().len(), 3);

        // Holds position while the target stays visible.
        assert!(rig.step(&mut habit).is_empty());

        rig.hide(thief);
        rig.step(&mut habit);
        assert_eq!(habit.state(), StraightState::GoBack);

        rig.run_until(&mut habit, 100, |h| h.state() == StraightState::Wonder);
        assert_eq!(rig.position(), Vec3::ZERO);
        assert!(same_facing(rig.rotation(), Quat::IDENTITY));
        assert!(habit.pursuit().access_points().is_empty());
    }

    #[test]
    fn losing_mid_chase_goes_straight_back() {
        let mut rig = Rig::new();
        let mut habit = StraightPursuitHabit::new();
        let thief = rig.thief;
        rig.spot(&[thief]);
        rig.step(&mut habit);
        rig.step(&mut habit);
        rig.step(&mut habit);
        rig.hide(thief);

        let intents = rig.step(&mut habit);
        assert_eq!(intents[0], Intent::MoveTo(Vec3::ZERO));
        assert_eq!(habit.phase(), "go-back");

        rig.run_until(&mut habit, 50, |h| h.state() == StraightState::Wonder);
        assert!(near(rig.position(), Vec3::ZERO));
    }

    #[test]
    fn default_habit_wonders() {
        let habit = StraightPursuitHabit::default();
        assert_eq!(habit.state(), StraightState::Wonder);
        assert_eq!(habit.pursuit().target(), None);
    }

    #[test]
    fn sighting_on_the_way_home_is_chased_once_home() {
        let mut rig = Rig::new();
        let mut habit = StraightPursuitHabit::new();
        let thief = rig.thief;
        rig.spot(&[thief]);
        rig.step(&mut habit);
        rig.step(&mut habit);
        rig.hide(thief);
        rig.step(&mut habit);
        assert_eq!(habit.state(), StraightState::GoBack);

        let decoy = rig.spawn_decoy(Vec3::new(-3.0, 0.0, 1.0));
        rig.spot(&[decoy]);
        assert_eq!(rig.sight.pending_found(), 1);

        // The return is not interrupted and the sighting is kept.
        rig.step(&mut habit);
        assert_eq!(habit.state(), StraightState::GoBack);
        assert_eq!(rig.sight.pending_found(), 1);

        rig.run_until(&mut habit, 50, |h| h.state() == StraightState::Wonder);
        let intents = rig.step(&mut habit);
        assert_eq!(habit.state(), StraightState::Track);
        assert_eq!(habit.pursuit().target(), Some(decoy));
        assert_eq!(intents[0], Intent::MoveTo(Vec3::new(-3.0, 0.0, 1.0)));
        assert_eq!(rig.sight.pending_found(), 0);
    }

    #[test]
    fn sighting_during_the_chase_is_chased_next() {
        let mut rig = Rig::new();
        let mut habit = StraightPursuitHabit::new();
        let thief = rig.thief;
        rig.spot(&[thief]);
        rig.step(&mut habit);

        let decoy = rig.spawn_decoy(Vec3::new(-3.0, 0.0, 1.0));
        rig.spot(&[decoy]);
        rig.step(&mut habit);
        assert_eq!(habit.state(), StraightState::Track);
        assert_eq!(habit.pursuit().target(), Some(thief));

        rig.run_until(&mut habit, 50, |h| h.state() == StraightState::ReachedAttackDistance);
        rig.hide(thief);
        rig.run_until(&mut habit, 100, |h| h.state() == StraightState::Wonder);

        rig.step(&mut habit);
        assert_eq!(habit.state(), StraightState::Track);
        assert_eq!(habit.pursuit().target(), Some(decoy));
    }

    #[test]
    fn losing_a_bystander_keeps_the_chase() {
        let mut rig = Rig::new();
        let mut habit = StraightPursuitHabit::new();
        let thief = rig.thief;
        let decoy = rig.spawn_decoy(Vec3::new(3.0, 0.0, 6.0));
        rig.spot(&[thief, decoy]);
        rig.step(&mut habit);
        assert_eq!(habit.pursuit().target(), Some(thief));

        rig.hide(decoy);
        let intents = rig.step(&mut habit);
        assert_eq!(habit.state(), StraightState::Track);
        assert_eq!(intents[0], Intent::FollowPath);
        assert_eq!(rig.sight.pending_lost(), 0);

        // Losing the target itself still ends it.
        rig.hide(thief);
        rig.step(&mut habit);
        assert_eq!(habit.state(), StraightState::GoBack);
    }
}

// ── Linear pursuit ────────────────────────────────────────────────────────────

#[cfg(test)]
mod linear_tests {
    use sn_core::geom::facing_toward;
    use sn_core::{Quat, Vec3};

    use super::rig::{Rig, near, same_facing};
    use crate::habits::Sweep;
    use crate::{LinearPursuitHabit, PursuitState};

    fn chase_and_reach(rig: &mut Rig, habit: &mut LinearPursuitHabit) {
        let thief = rig.thief;
        rig.spot(&[thief]);
        rig.step(habit);
        assert_eq!(habit.state(), PursuitState::Track);
    }

    #[test]
    fn visible_on_reach_is_attacked() {
        let mut rig = Rig::new();
        let mut habit = LinearPursuitHabit::new();
        chase_and_reach(&mut rig, &mut habit);
        rig.run_until(&mut habit, 50, |h| h.state() == PursuitState::Attacking);
        assert_eq!(rig.captures, vec![rig.thief]);

        // Terminal: nothing else happens.
        rig.step(&mut habit);
        assert_eq!(rig.captures.len(), 1);
    }

    #[test]
    fn loss_mid_chase_still_walks_on() {
        let mut rig = Rig::new();
        let mut habit = LinearPursuitHabit::new();
        chase_and_reach(&mut rig, &mut habit);
        let thief = rig.thief;
        rig.hide(thief);
        rig.step(&mut habit);
        assert_eq!(habit.state(), PursuitState::Track);
    }

    #[test]
    fn sweep_then_give_up_and_return() {
        let mut rig = Rig::new();
        let mut habit = LinearPursuitHabit::new();
        chase_and_reach(&mut rig, &mut habit);
        let thief = rig.thief;
        rig.hide(thief);
        rig.world.set_position(thief, Vec3::new(3.0, 0.0, 5.0)).unwrap();

        rig.run_until(&mut habit, 50, |h| h.state() == PursuitState::SearchingAttackObj);
        let sweep = habit.sweep().unwrap();
        assert_eq!(sweep.ratio, 0.0);
        let stop = rig.position();

        rig.run_until(&mut habit, 20, |h| h.sweep().is_some_and(|s| s.is_done()));
        assert!(same_facing(rig.rotation(), facing_toward(stop, Vec3::new(3.0, 0.0, 5.0))));
        assert_eq!(rig.position(), stop);

        rig.step(&mut habit);
        assert_eq!(habit.state(), PursuitState::GoBack);
        assert!(rig.captures.is_empty());

        rig.run_until(&mut habit, 100, |h| h.state() == PursuitState::Wonder);
        assert!(near(rig.position(), Vec3::ZERO));
        assert!(same_facing(rig.rotation(), Quat::IDENTITY));
        assert!(habit.pursuit().access_points().is_empty());
    }

    #[test]
    fn re_detection_during_sweep_captures() {
        let mut rig = Rig::new();
        let mut habit = LinearPursuitHabit::new().with_rotation_speed(0.5);
        chase_and_reach(&mut rig, &mut habit);
        let thief = rig.thief;
        rig.hide(thief);

        rig.run_until(&mut habit, 50, |h| h.state() == PursuitState::SearchingAttackObj);
        rig.step(&mut habit);
        rig.spot(&[thief]);
        rig.step(&mut habit);

        assert_eq!(habit.state(), PursuitState::Disabled);
        assert_eq!(rig.captures, vec![thief]);
        assert!(habit.sweep().is_none());
    }

    #[test]
    fn sighting_on_the_way_home_is_chased_once_home() {
        let mut rig = Rig::new();
        let mut habit = LinearPursuitHabit::new();
        chase_and_reach(&mut rig, &mut habit);
        let thief = rig.thief;
        rig.hide(thief);
        rig.run_until(&mut habit, 80, |h| h.state() == PursuitState::GoBack);

        let decoy = rig.spawn_decoy(Vec3::new(-3.0, 0.0, 1.0));
        rig.spot(&[decoy]);
        rig.step(&mut habit);
        assert_eq!(habit.state(), PursuitState::GoBack);
        assert_eq!(rig.sight.pending_found(), 1);

        rig.run_until(&mut habit, 100, |h| h.state() == PursuitState::Wonder);
        rig.step(&mut habit);
        assert_eq!(habit.state(), PursuitState::Track);
        assert_eq!(habit.pursuit().target(), Some(decoy));
        assert!(rig.captures.is_empty());
    }

    #[test]
    fn sweep_turns_at_a_constant_angular_rate() {
        let to = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let sweep = Sweep { from: Quat::IDENTITY, to, ratio: 0.25 };
        assert!(same_facing(sweep.facing(), Quat::from_rotation_y(std::f32::consts::FRAC_PI_8)));
        assert!(!Sweep { ratio: 0.99, ..sweep }.is_done());
        assert!(Sweep { ratio: 1.0, ..sweep }.is_done());
    }

    #[test]
    fn stalled_sweep_rate_still_gives_up() {
        let mut rig = Rig::new();
        let mut habit = LinearPursuitHabit::new().with_rotation_speed(0.0);
        chase_and_reach(&mut rig, &mut habit);
        let thief = rig.thief;
        rig.hide(thief);
        rig.world.set_position(thief, Vec3::new(3.0, 0.0, 5.0)).unwrap();

        rig.run_until(&mut habit, 50, |h| h.state() == PursuitState::SearchingAttackObj);
        // 0.01 per second at 0.1 s a tick.
        rig.run_until(&mut habit, 1_100, |h| h.sweep().is_some_and(|s| s.is_done()));
        rig.step(&mut habit);
        assert_eq!(habit.state(), PursuitState::GoBack);
    }
}
