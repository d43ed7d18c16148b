use sn_behavior::BehaviorError;
use sn_core::{GuardId, SnError};
use sn_mobility::MobilityError;
use sn_sight::SightError;
use sn_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{guard}: sight violation: {source}")]
    Sight {
        guard:  GuardId,
        #[source]
        source: SightError,
    },

    #[error("{guard}: behavior violation: {source}")]
    Behavior {
        guard:  GuardId,
        #[source]
        source: BehaviorError,
    },

    #[error("mobility error: {0}")]
    Mobility(#[from] MobilityError),

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("world error: {0}")]
    World(#[from] SnError),
}

impl SimError {
    /// The guard a violation belongs to, if any.
    pub fn guard(&self) -> Option<GuardId> {
        match self {
            SimError::Sight { guard, .. } | SimError::Behavior { guard, .. } => Some(*guard),
            _ => None,
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
