use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatrolError {
    #[error("patrol data parse error: {0}")]
    Parse(String),

    #[error("route {route} has {got} waypoint(s); at least 2 are required")]
    TooFewWaypoints { route: u32, got: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PatrolResult<T> = Result<T, PatrolError>;
