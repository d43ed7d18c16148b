//! Patrol: ping-pong along a route, turning in place before each leg.

use sn_core::geom::{facing_gap_deg, facing_toward};
use sn_core::Quat;
use sn_patrol::{PatrolRoute, RouteCursor};
use sn_sight::Sight;

use crate::habits::finishing_rate;
use crate::{BehaviorResult, Habit, HabitContext, Intent};

/// Turn-ratio growth per second while rotating in place.
pub const PATROL_ROTATION_SPEED: f32 = 0.5;

/// A guard only starts walking once it faces the waypoint within this many
/// degrees.
pub const ROTATION_TOLERANCE_DEG: f32 = 20.0;

/// Distance at which a waypoint counts as reached.
pub const ARRIVAL_TOLERANCE: f32 = 0.08;

#[derive(Copy, Clone, Debug)]
struct Turn {
    from:  Quat,
    to:    Quat,
    ratio: f32,
}

/// Route-following state shared by every habit with a Wonder phase.
#[derive(Clone, Debug)]
pub struct Patrol {
    route:          PatrolRoute,
    cursor:         RouteCursor,
    rotation_speed: f32,
    turn:           Option<Turn>,
    moving:         bool,
}

impl Patrol {
    pub fn new(route: PatrolRoute) -> Self {
        let cursor = route.cursor();
        Self {
            route,
            cursor,
            rotation_speed: PATROL_ROTATION_SPEED,
            turn: None,
            moving: false,
        }
    }

    /// Turn-ratio growth per second.  A rate that would never finish a turn
    /// is raised to [`MIN_ROTATION_SPEED`](crate::habits::MIN_ROTATION_SPEED).
    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = finishing_rate(speed, PATROL_ROTATION_SPEED);
        self
    }

    pub fn route(&self) -> &PatrolRoute {
        &self.route
    }

    pub fn cursor(&self) -> RouteCursor {
        self.cursor
    }

    /// `true` while walking a leg, `false` while turning or about to turn.
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Forget any half-finished turn or leg.  The next [`step`](Self::step)
    /// re-aims at the same waypoint from wherever the guard now stands.
    pub fn interrupt(&mut self) {
        self.turn = None;
        self.moving = false;
    }

    /// One tick of patrolling.
    pub fn step(&mut self, ctx: &HabitContext<'_>) -> Vec<Intent> {
        let target = self.cursor.target(&self.route);

        if self.moving {
            let mut intents = vec![Intent::FollowPath];
            if ctx.path.next_position.distance(target) <= ARRIVAL_TOLERANCE {
                intents.push(Intent::ResetPath);
                self.moving = false;
                self.cursor.advance(&self.route);
            }
            return intents;
        }

        let desired = facing_toward(ctx.position, target);
        if facing_gap_deg(ctx.rotation, desired) > ROTATION_TOLERANCE_DEG {
            let turn = self.turn.get_or_insert(Turn { from: ctx.rotation, to: desired, ratio: 0.0 });
            turn.ratio = (turn.ratio + self.rotation_speed * ctx.dt_secs).min(1.0);
            return vec![Intent::Face(turn.from.slerp(turn.to, turn.ratio))];
        }

        self.turn = None;
        self.moving = true;
        vec![Intent::Face(desired), Intent::MoveTo(target)]
    }
}

/// A guard that only patrols.  Sightings are drained and ignored.
#[derive(Clone, Debug)]
pub struct WanderHabit {
    patrol: Patrol,
}

impl WanderHabit {
    pub fn new(route: PatrolRoute) -> Self {
        Self { patrol: Patrol::new(route) }
    }

    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.patrol = self.patrol.with_rotation_speed(speed);
        self
    }

    pub fn patrol(&self) -> &Patrol {
        &self.patrol
    }
}

impl Habit for WanderHabit {
    fn name(&self) -> &'static str {
        "wander"
    }

    fn phase(&self) -> &'static str {
        if self.patrol.is_moving() { "walking" } else { "turning" }
    }

    fn tick(&mut self, ctx: &HabitContext<'_>, sight: &mut Sight) -> BehaviorResult<Vec<Intent>> {
        sight.consume_found();
        sight.consume_lost();
        Ok(self.patrol.step(ctx))
    }
}
