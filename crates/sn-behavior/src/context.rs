//! Read-only per-guard snapshot passed to [`Habit::tick`][crate::Habit::tick].

use sn_core::{GuardId, ObjectId, Quat, Tick, Vec3};
use sn_world::WorldObjects;

/// What a habit may know about the movement actuator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PathView {
    /// Where the actuator would put the body this tick.
    pub next_position: Vec3,
    /// Current destination, `None` without a path.
    pub destination: Option<Vec3>,
}

impl PathView {
    /// A stationary actuator at `position`.
    pub fn idle(position: Vec3) -> Self {
        Self { next_position: position, destination: None }
    }

    #[inline]
    pub fn has_path(&self) -> bool {
        self.destination.is_some()
    }
}

/// Everything a habit reads during one tick.  Built by the tick loop after
/// containment and sampling have run.
pub struct HabitContext<'a> {
    pub tick:    Tick,
    /// Seconds covered by this tick.
    pub dt_secs: f32,

    pub guard: GuardId,
    /// The guard's own world object.
    pub body:  ObjectId,

    pub position: Vec3,
    pub rotation: Quat,

    /// Collision radius plus margin: how close counts as "reached".
    pub reach_radius: f32,

    pub path:  PathView,
    pub world: &'a WorldObjects,
}

impl<'a> HabitContext<'a> {
    /// Context for a guard whose body is `body` in `world`, with a
    /// stationary actuator.  Returns `None` for an unknown body.
    pub fn at_rest(
        world:        &'a WorldObjects,
        guard:        GuardId,
        body:         ObjectId,
        dt_secs:      f32,
        reach_radius: f32,
    ) -> Option<Self> {
        let me = world.get(body)?;
        Some(Self {
            tick: Tick::ZERO,
            dt_secs,
            guard,
            body,
            position: me.position,
            rotation: me.rotation,
            reach_radius,
            path: PathView::idle(me.position),
            world,
        })
    }

    /// Current position of another object, if it exists.
    #[inline]
    pub fn position_of(&self, id: ObjectId) -> Option<Vec3> {
        self.world.position.get(id.index()).copied()
    }
}
