//! Simple tracking: walk at the first thing seen, walk home when it's gone.

use sn_core::geom::reversed;
use sn_core::{ObjectId, Quat, Vec3};
use sn_sight::Sight;

use crate::{BehaviorResult, Habit, HabitContext, Intent};

/// Closing within this distance of the target ends the chase.
pub const CAPTURE_RADIUS: f32 = 2.0;

/// How close to the origin counts as home.
pub const RETURN_TOLERANCE: f32 = 0.001;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum SimpleStatus {
    #[default]
    Idle,
    Tracking(ObjectId),
    Returning,
}

/// Tracking habit without a state machine.
///
/// On a sighting the guard remembers where it stood and walks toward the
/// first found object.  Losing it sends the guard back with its facing
/// reversed.  Getting within [`CAPTURE_RADIUS`] also sends it back, with
/// Sight switched off until it is home so the same target cannot
/// immediately re-trigger the chase.
#[derive(Clone, Debug)]
pub struct SimpleTrackingHabit {
    status:         SimpleStatus,
    origin:         Vec3,
    origin_facing:  Quat,
    capture_radius: f32,
}

impl Default for SimpleTrackingHabit {
    fn default() -> Self {
        Self {
            status:         SimpleStatus::Idle,
            origin:         Vec3::ZERO,
            origin_facing:  Quat::IDENTITY,
            capture_radius: CAPTURE_RADIUS,
        }
    }
}

impl SimpleTrackingHabit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capture_radius(mut self, radius: f32) -> Self {
        self.capture_radius = radius;
        self
    }

    pub fn status(&self) -> SimpleStatus {
        self.status
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    fn is_tracking(&self) -> bool {
        matches!(self.status, SimpleStatus::Tracking(_))
    }

    fn head_home(&mut self, ctx: &HabitContext<'_>) -> Vec<Intent> {
        self.status = SimpleStatus::Returning;
        vec![Intent::MoveTo(self.origin), Intent::Face(reversed(ctx.rotation))]
    }
}

impl Habit for SimpleTrackingHabit {
    fn name(&self) -> &'static str {
        "simple-tracking"
    }

    fn phase(&self) -> &'static str {
        match self.status {
            SimpleStatus::Idle        => "idle",
            SimpleStatus::Tracking(_) => "tracking",
            SimpleStatus::Returning   => "returning",
        }
    }

    fn tick(&mut self, ctx: &HabitContext<'_>, sight: &mut Sight) -> BehaviorResult<Vec<Intent>> {
        let found = sight.consume_found();
        let lost = sight.consume_lost();
        let mut intents = Vec::new();

        let turned_back = lost > 0 && self.is_tracking();
        if turned_back {
            intents.extend(self.head_home(ctx));
        }

        if found > 0 && sight.is_object_visible() && !self.is_tracking() {
            let sighted = sight.found().first().and_then(|t| Some((t, ctx.position_of(t)?)));
            if let Some((target, goal)) = sighted {
                // A chase that starts on the way home keeps the first origin.
                if self.status != SimpleStatus::Returning {
                    self.origin = ctx.position;
                    self.origin_facing = ctx.rotation;
                }
                log::debug!("{} tracking {}", ctx.guard, ctx.world.label(target));
                self.status = SimpleStatus::Tracking(target);
                intents.push(Intent::MoveTo(goal));
                return Ok(intents);
            }
        }

        if turned_back {
            return Ok(intents);
        }

        match self.status {
            SimpleStatus::Idle => {}
            SimpleStatus::Tracking(target) => {
                intents.push(Intent::FollowPath);
                let close = ctx
                    .position_of(target)
                    .is_some_and(|p| p.distance(ctx.path.next_position) <= self.capture_radius);
                if close && sight.found().contains(target) {
                    log::debug!("{} reached {}", ctx.guard, ctx.world.label(target));
                    intents.extend(self.head_home(ctx));
                    sight.disable();
                }
            }
            SimpleStatus::Returning => {
                intents.push(Intent::FollowPath);
                if ctx.path.next_position.distance(self.origin) <= RETURN_TOLERANCE {
                    intents.push(Intent::ResetPath);
                    intents.push(Intent::Face(self.origin_facing));
                    self.status = SimpleStatus::Idle;
                    sight.enable();
                }
            }
        }
        Ok(intents)
    }
}
