//! Linear pursuit with a timed search sweep, on the full state machine.

use sn_core::geom::facing_toward;
use sn_core::{ObjectId, Quat};
use sn_patrol::PatrolRoute;
use sn_sight::Sight;

use crate::habits::{Patrol, finishing_rate};
use crate::{
    BehaviorResult, Habit, HabitContext, Intent, PursuitState, Protocol, Pursuit, Retrace,
    StateMachine,
};

/// Sweep-ratio growth per second.
pub const SEARCH_ROTATION_SPEED: f32 = 2.0;

/// Tolerance for every access point on the way home, origin included.
pub const RETURN_TOLERANCE: f32 = 0.08;

/// A rotation from the facing held on arrival toward the target's last
/// known bearing.  `ratio` runs from 0 to 1.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sweep {
    pub from:  Quat,
    pub to:    Quat,
    pub ratio: f32,
}

impl Sweep {
    pub fn facing(&self) -> Quat {
        self.from.slerp(self.to, self.ratio)
    }

    pub fn is_done(&self) -> bool {
        self.ratio >= 1.0
    }
}

/// Full pursuit: walk to where the target was first seen, then either
/// capture it if it is still visible or sweep toward its current bearing.
///
/// | outcome on reach            | path                                          |
/// |-----------------------------|-----------------------------------------------|
/// | target still found          | Attacking, `Capture` (terminal)               |
/// | re-acquired during sweep    | `Capture`, machine disabled (terminal)        |
/// | sweep completes             | LostAttackObj → JustLost → GoBack → Wonder    |
#[derive(Clone, Debug)]
pub struct LinearPursuitHabit {
    machine:        StateMachine<PursuitState>,
    pursuit:        Pursuit,
    patrol:         Option<Patrol>,
    sweep:          Option<Sweep>,
    rotation_speed: f32,
}

impl Default for LinearPursuitHabit {
    fn default() -> Self {
        Self {
            machine:        StateMachine::new(PursuitState::Wonder),
            pursuit:        Pursuit::new(),
            patrol:         None,
            sweep:          None,
            rotation_speed: SEARCH_ROTATION_SPEED,
        }
    }
}

impl LinearPursuitHabit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patrol `route` while in the Wonder state.
    pub fn with_patrol(mut self, route: PatrolRoute) -> Self {
        self.patrol = Some(Patrol::new(route));
        self
    }

    /// Sweep-ratio growth per second.  A rate that would never finish the
    /// sweep is raised to [`MIN_ROTATION_SPEED`](crate::habits::MIN_ROTATION_SPEED).
    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = finishing_rate(speed, SEARCH_ROTATION_SPEED);
        self
    }

    pub fn state(&self) -> PursuitState {
        self.machine.state()
    }

    pub fn pursuit(&self) -> &Pursuit {
        &self.pursuit
    }

    pub fn sweep(&self) -> Option<Sweep> {
        self.sweep
    }

    fn engage(&mut self, ctx: &HabitContext<'_>, target: ObjectId) -> BehaviorResult<Option<Vec<Intent>>> {
        let Some(intents) = self.pursuit.begin(ctx, target) else {
            return Ok(None);
        };
        self.machine.to_track()?;
        if let Some(patrol) = self.patrol.as_mut() {
            patrol.interrupt();
        }
        log::debug!("{} pursuing {}", ctx.guard, ctx.world.label(target));
        Ok(Some(intents))
    }

    fn retreat(&mut self, ctx: &HabitContext<'_>) -> BehaviorResult<Vec<Intent>> {
        self.machine.to_just_lost()?;
        let intents = self.pursuit.head_back(ctx)?;
        self.machine.to_go_back()?;
        Ok(intents)
    }

    fn arrive(&mut self, ctx: &HabitContext<'_>, sight: &Sight, mut intents: Vec<Intent>) -> BehaviorResult<Vec<Intent>> {
        intents.push(Intent::ResetPath);
        self.machine.to_reach_attack_distance()?;

        let target = self.pursuit.target();
        if let Some(target) = target.filter(|t| sight.found().contains(*t)) {
            self.machine.to_attack()?;
            log::debug!("{} attacking {}", ctx.guard, ctx.world.label(target));
            intents.push(Intent::Capture(target));
            return Ok(intents);
        }

        let bearing = target
            .and_then(|t| ctx.position_of(t))
            .or_else(|| self.pursuit.access_points().last())
            .map_or(self.pursuit.pursuit_facing(), |p| facing_toward(ctx.path.next_position, p));
        self.machine.to_search_attack_obj()?;
        self.sweep = Some(Sweep { from: self.pursuit.pursuit_facing(), to: bearing, ratio: 0.0 });
        Ok(intents)
    }
}

impl Habit for LinearPursuitHabit {
    fn name(&self) -> &'static str {
        "linear-pursuit"
    }

    fn phase(&self) -> &'static str {
        self.machine.state().name()
    }

    fn tick(&mut self, ctx: &HabitContext<'_>, sight: &mut Sight) -> BehaviorResult<Vec<Intent>> {
        // Found is only read in Wonder and while sweeping; sightings made on
        // the way there or back wait for it.
        match self.machine.state() {
            PursuitState::Wonder => {
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

            // Losing sight mid-chase does not end it; the guard still walks
            // to the last known position and searches there.
            PursuitState::Track => {
                let intents = vec![Intent::FollowPath, Intent::Face(self.pursuit.pursuit_facing())];
                let goal = self.pursuit.access_points().last();
                if goal.is_some_and(|g| ctx.path.next_position.distance(g) <= ctx.reach_radius) {
                    return self.arrive(ctx, sight, intents);
                }
                Ok(intents)
            }

            PursuitState::SearchingAttackObj => {
                let found = sight.consume_found();
                let sighted = if found > 0 { sight.closest_found(ctx.position, ctx.world) } else { None };
                if let Some(target) = sighted {
                    self.sweep = None;
                    self.machine.disable();
                    log::debug!("{} re-acquired {}", ctx.guard, ctx.world.label(target));
                    return Ok(vec![Intent::ResetPath, Intent::Capture(target)]);
                }

                match self.sweep {
                    Some(mut sweep) if !sweep.is_done() => {
                        sweep.ratio = (sweep.ratio + self.rotation_speed * ctx.dt_secs).min(1.0);
                        self.sweep = Some(sweep);
                        Ok(vec![Intent::Face(sweep.facing())])
                    }
                    _ => {
                        self.sweep = None;
                        self.machine.to_lose_attack_obj()?;
                        self.retreat(ctx)
                    }
                }
            }

            PursuitState::LostAttackObj => self.retreat(ctx),

            PursuitState::JustLost => {
                let intents = self.pursuit.head_back(ctx)?;
                self.machine.to_go_back()?;
                Ok(intents)
            }

            PursuitState::GoBack => {
                let (progress, intents) = self.pursuit.walk_back(ctx, RETURN_TOLERANCE, RETURN_TOLERANCE)?;
                if progress == Retrace::Home {
                    self.machine.to_wonder()?;
                    if let Some(patrol) = self.patrol.as_mut() {
                        patrol.interrupt();
                    }
                }
                Ok(intents)
            }

            PursuitState::ReachedAttackDistance | PursuitState::Attacking | PursuitState::Disabled => {
                Ok(Vec::new())
            }
        }
    }
}
