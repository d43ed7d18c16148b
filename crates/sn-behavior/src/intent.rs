//! Guard intents: the actions a habit requests each tick.

use sn_core::{ObjectId, Quat, Vec3};

/// An action a guard wants performed this tick.
///
/// Intents are produced by [`Habit::tick`][crate::Habit::tick] and applied
/// by the tick loop in emission order, so a later `Face` wins over an
/// earlier one.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Give the movement actuator a new destination.
    MoveTo(Vec3),

    /// Drop the current path; the actuator stops where it is.
    ResetPath,

    /// Move the body to the actuator's next interpolated position.
    FollowPath,

    /// Set the body's rotation.
    Face(Quat),

    /// A target was caught.  Recorded by the tick loop and reported to the
    /// observer.
    Capture(ObjectId),
}
