//! Framework error type.
//!
//! Sub-crates define their own error enums and either wrap `SnError` as one
//! variant or convert into it with `From`.

use thiserror::Error;

use crate::{GuardId, ObjectId};

/// The base error type shared by the `sn-*` crates.
#[derive(Debug, Error)]
pub enum SnError {
    #[error("object {0} not found")]
    ObjectNotFound(ObjectId),

    #[error("guard {0} not found")]
    GuardNotFound(GuardId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for the `sn-*` crates.
pub type SnResult<T> = Result<T, SnError>;
