use sn_sight::SightError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("invalid transition {from} -> {to}")]
    InvalidTransition { from: &'static str, to: &'static str },

    #[error("retrace requested with no access point left")]
    NoAccessPoint,

    #[error(transparent)]
    Sight(#[from] SightError),

    #[error("behavior configuration error: {0}")]
    Config(String),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
