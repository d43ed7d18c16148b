//! Guards: a world body plus everything it needs to perceive and act.

use sn_behavior::Habit;
use sn_core::{GuardId, ObjectId};
use sn_sight::{EyeSet, Sight, SightConfig};
use sn_spatial::{ContainmentTracker, SensingVolume};

/// Default walking speed, metres per second.
pub const DEFAULT_SPEED: f32 = 3.5;

/// Added to the body's bounding radius to get the default reach radius.
pub const REACH_MARGIN: f32 = 0.5;

/// Reach radius for bodies without a collider.
pub const FALLBACK_REACH: f32 = 1.0;

/// Everything the builder needs to turn a world object into a guard.
pub struct GuardSpec {
    pub body:         ObjectId,
    pub volume:       SensingVolume,
    pub habit:        Box<dyn Habit>,
    pub eyes:         EyeSet,
    pub sight:        SightConfig,
    pub speed:        f32,
    /// `None` derives it from the body's collider.
    pub reach_radius: Option<f32>,
}

impl GuardSpec {
    pub fn new(body: ObjectId, volume: SensingVolume, habit: impl Habit + 'static) -> Self {
        Self {
            body,
            volume,
            habit:        Box::new(habit),
            eyes:         EyeSet::single(),
            sight:        SightConfig::default(),
            speed:        DEFAULT_SPEED,
            reach_radius: None,
        }
    }

    pub fn with_eyes(mut self, eyes: EyeSet) -> Self {
        self.eyes = eyes;
        self
    }

    pub fn with_sight_config(mut self, config: SightConfig) -> Self {
        self.sight = config;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_reach_radius(mut self, radius: f32) -> Self {
        self.reach_radius = Some(radius);
        self
    }
}

/// A live guard inside a [`Sim`][crate::Sim].
///
/// Each guard's Sight, tracker, and habit form an independent unit with no
/// state shared across guards.
pub struct Guard {
    pub id:           GuardId,
    pub body:         ObjectId,
    pub sight:        Sight,
    pub volume:       SensingVolume,
    pub tracker:      ContainmentTracker,
    pub habit:        Box<dyn Habit>,
    pub reach_radius: f32,
}

impl Guard {
    /// Current phase of the guard's habit.
    pub fn phase(&self) -> &'static str {
        self.habit.phase()
    }
}
