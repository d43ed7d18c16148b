use sn_core::{GuardId, Vec3};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("no movement state for {0}")]
    UnknownGuard(GuardId),

    #[error("no path from {from} to {to}")]
    NoPath { from: Vec3, to: Vec3 },

    #[error("non-finite destination {0}")]
    NonFinite(Vec3),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
