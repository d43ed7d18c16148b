use sn_core::{ObjectId, Vec3};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SightError {
    #[error("sight has no registered owner")]
    NotRegistered,

    #[error("sight owner {0} is not in the world")]
    OwnerMissing(ObjectId),

    #[error("an eye set needs at least one eye")]
    NoEyes,

    #[error("{owner} has found {object} without feeling its presence")]
    FoundNotContained { owner: ObjectId, object: ObjectId },

    #[error("{owner} contains {object}, which is not detectable")]
    MissingCapability { owner: ObjectId, object: ObjectId },

    #[error("ray from {eye} toward contained {object} hit nothing")]
    RayMissed { eye: Vec3, object: ObjectId },
}

pub type SightResult<T> = Result<T, SightError>;
