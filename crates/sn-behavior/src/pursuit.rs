//! Pursuit bookkeeping shared by the straight and linear pursuit habits.
//!
//! A pursuit pushes two access points when it starts: where the guard
//! stood, then where the target was.  Giving up pops the target point and
//! heads for the one below it; each point reached on the way back is popped
//! in turn.  The stack is empty exactly when the guard is home.

use sn_core::geom::facing_toward;
use sn_core::{ObjectId, Quat, Vec3};

use crate::{BehaviorError, BehaviorResult, HabitContext, Intent};

// ── AccessPoints ──────────────────────────────────────────────────────────────

/// LIFO stack of positions to retrace.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccessPoints {
    points: Vec<Vec3>,
}

impl AccessPoints {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, point: Vec3) {
        self.points.push(point);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Vec3> {
        self.points.pop()
    }

    /// The point to walk toward next.
    #[inline]
    pub fn last(&self) -> Option<Vec3> {
        self.points.last().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn as_slice(&self) -> &[Vec3] {
        &self.points
    }
}

// ── Pursuit ───────────────────────────────────────────────────────────────────

/// Progress reported by [`Pursuit::walk_back`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Retrace {
    /// Still on the way to the current access point.
    Walking,
    /// Popped an intermediate point; heading for the next one.
    Waypoint,
    /// Popped the origin.  The stack is now empty.
    Home,
}

/// Per-habit pursuit context: access points plus the facings captured when
/// the chase began.
#[derive(Clone, Debug)]
pub struct Pursuit {
    access:          AccessPoints,
    original_facing: Quat,
    pursuit_facing:  Quat,
    target:          Option<ObjectId>,
}

impl Default for Pursuit {
    fn default() -> Self {
        Self {
            access:          AccessPoints::new(),
            original_facing: Quat::IDENTITY,
            pursuit_facing:  Quat::IDENTITY,
            target:          None,
        }
    }
}

impl Pursuit {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn access_points(&self) -> &AccessPoints {
        &self.access
    }

    #[inline]
    pub fn target(&self) -> Option<ObjectId> {
        self.target
    }

    /// Facing held while closing in, computed once at the start.
    #[inline]
    pub fn pursuit_facing(&self) -> Quat {
        self.pursuit_facing
    }

    /// Facing the guard had before the chase, restored at home.
    #[inline]
    pub fn original_facing(&self) -> Quat {
        self.original_facing
    }

    /// Start chasing `target`.  Returns `None` if the target no longer
    /// exists, leaving the pursuit untouched.
    pub fn begin(&mut self, ctx: &HabitContext<'_>, target: ObjectId) -> Option<Vec<Intent>> {
        let goal = ctx.position_of(target)?;
        self.access.clear();
        self.access.push(ctx.position);
        self.access.push(goal);
        self.original_facing = ctx.rotation;
        self.pursuit_facing = facing_toward(ctx.position, goal);
        self.target = Some(target);
        Some(vec![Intent::MoveTo(goal), Intent::Face(self.pursuit_facing)])
    }

    /// Record an extra access point, e.g. where the chase ended.
    pub fn mark(&mut self, point: Vec3) {
        self.access.push(point);
    }

    /// Give up on the target and head for the access point below it.
    pub fn head_back(&mut self, ctx: &HabitContext<'_>) -> BehaviorResult<Vec<Intent>> {
        self.access.pop().ok_or(BehaviorError::NoAccessPoint)?;
        let back = self.access.last().ok_or(BehaviorError::NoAccessPoint)?;
        self.target = None;
        Ok(vec![Intent::MoveTo(back), Intent::Face(facing_toward(ctx.position, back))])
    }

    /// One tick of retracing.  Intermediate points count as reached within
    /// `loose`; the origin only within `tight`.
    pub fn walk_back(
        &mut self,
        ctx:   &HabitContext<'_>,
        loose: f32,
        tight: f32,
    ) -> BehaviorResult<(Retrace, Vec<Intent>)> {
        let here = ctx.path.next_position;
        let last = self.access.last().ok_or(BehaviorError::NoAccessPoint)?;
        let mut intents = vec![Intent::FollowPath];

        if self.access.len() == 1 {
            if here.distance(last) <= tight {
                self.access.pop();
                intents.push(Intent::ResetPath);
                intents.push(Intent::Face(self.original_facing));
                return Ok((Retrace::Home, intents));
            }
        } else if here.distance(last) <= loose {
            self.access.pop();
            let next = self.access.last().ok_or(BehaviorError::NoAccessPoint)?;
            intents.push(Intent::MoveTo(next));
            intents.push(Intent::Face(facing_toward(here, next)));
            return Ok((Retrace::Waypoint, intents));
        }
        Ok((Retrace::Walking, intents))
    }
}
