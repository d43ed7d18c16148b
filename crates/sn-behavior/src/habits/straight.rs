//! Straight-line pursuit with return, on the reduced state machine.

use sn_core::ObjectId;
use sn_patrol::PatrolRoute;
use sn_sight::Sight;

use crate::habits::Patrol;
use crate::{
    BehaviorResult, Habit, HabitContext, Intent, Protocol, Pursuit, Retrace, StateMachine,
    StraightState,
};

/// The origin access point only counts as reached this close.
pub const ORIGIN_TOLERANCE: f32 = 1e-4;

/// Chases the closest found object in a straight line, holds once within
/// reach, and retraces its access points when the target is lost.
///
/// The spot where the chase ended is pushed as a third access point, so a
/// guard that reached its target walks back through the target's last
/// known position before heading home.
///
/// Intermediate access points are reached within the guard's reach radius;
/// the origin within [`ORIGIN_TOLERANCE`], after which the original facing
/// is restored and patrolling resumes.
#[derive(Clone, Debug, Default)]
pub struct StraightPursuitHabit {
    machine: StateMachine<StraightState>,
    pursuit: Pursuit,
    patrol:  Option<Patrol>,
}

impl StraightPursuitHabit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patrol `route` while in the Wonder state.
    pub fn with_patrol(mut self, route: PatrolRoute) -> Self {
        self.patrol = Some(Patrol::new(route));
        self
    }

    pub fn state(&self) -> StraightState {
        self.machine.state()
    }

    pub fn pursuit(&self) -> &Pursuit {
        &self.pursuit
    }

    fn engage(&mut self, ctx: &HabitContext<'_>, target: ObjectId) -> BehaviorResult<Option<Vec<Intent>>> {
        let Some(intents) = self.pursuit.begin(ctx, target) else {
            return Ok(None);
        };
        self.machine.transition(StraightState::Track)?;
        if let Some(patrol) = self.patrol.as_mut() {
            patrol.interrupt();
        }
        log::debug!("{} pursuing {}", ctx.guard, ctx.world.label(target));
        Ok(Some(intents))
    }

    fn give_up(&mut self, ctx: &HabitContext<'_>) -> BehaviorResult<Vec<Intent>> {
        self.machine.transition(StraightState::JustLost)?;
        self.retreat(ctx)
    }

    /// Drains the lost counter; only the target leaving the found set ends
    /// the chase.
    fn target_lost(&self, sight: &mut Sight) -> bool {
        sight.consume_lost() > 0
            && self.pursuit.target().is_none_or(|t| !sight.found().contains(t))
    }

    fn retreat(&mut self, ctx: &HabitContext<'_>) -> BehaviorResult<Vec<Intent>> {
        let intents = self.pursuit.head_back(ctx)?;
        self.machine.transition(StraightState::GoBack)?;
        Ok(intents)
    }
}

impl Habit for StraightPursuitHabit {
    fn name(&self) -> &'static str {
        "straight-pursuit"
    }

    fn phase(&self) -> &'static str {
        self.machine.state().name()
    }

    fn tick(&mut self, ctx: &HabitContext<'_>, sight: &mut Sight) -> BehaviorResult<Vec<Intent>> {
        // Counters are only read in the states that act on them; sightings
        // made while chasing or returning wait for the next Wonder.
        match self.machine.state() {
            StraightState::Wonder => {
                sight.consume_lost();
                let found = sight.consume_found();
                let sighted = if found > 0 { sight.closest_found(ctx.position, ctx.world) } else { None };
                if let Some(target) = sighted {
                    if let Some(intents) = self.engage(ctx, target)? {
                        return Ok(intents);
                    }
                }
                Ok(self.patrol.as_mut().map(|p| p.step(ctx)).unwrap_or_default())
            }

            StraightState::Track => {
                if self.target_lost(sight) {
                    return self.give_up(ctx);
                }
                let mut intents = vec![Intent::FollowPath, Intent::Face(self.pursuit.pursuit_facing())];
                let goal = self.pursuit.access_points().last();
                if goal.is_some_and(|g| ctx.path.next_position.distance(g) <= ctx.reach_radius) {
                    self.machine.transition(StraightState::ReachedAttackDistance)?;
                    self.pursuit.mark(ctx.path.next_position);
                    intents.push(Intent::ResetPath);
                }
                Ok(intents)
            }

            StraightState::ReachedAttackDistance => {
                if self.target_lost(sight) {
                    return self.give_up(ctx);
                }
                Ok(Vec::new())
            }

            StraightState::JustLost => self.retreat(ctx),

            StraightState::GoBack => {
                let (progress, intents) = self.pursuit.walk_back(ctx, ctx.reach_radius, ORIGIN_TOLERANCE)?;
                if progress == Retrace::Home {
                    self.machine.transition(StraightState::Wonder)?;
                    if let Some(patrol) = self.patrol.as_mut() {
                        patrol.interrupt();
                    }
                }
                Ok(intents)
            }
        }
    }
}
