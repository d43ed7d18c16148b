use sn_core::ObjectId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("ray has no direction (origin and target coincide)")]
    DegenerateRay,

    #[error("object {0} has a non-finite position or collider")]
    NonFinite(ObjectId),

    #[error("invalid sensing volume: {0}")]
    InvalidVolume(String),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
