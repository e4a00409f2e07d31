use thiserror::Error;

/// Errors raised by match coordination.
///
/// Precondition violations (`EmptyRoster`, `InvalidCollection`) are recoverable and raised
/// at the point of violation. `SelectionExhausted` signals a broken weighting invariant and
/// must never be retried.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("cannot perform operation on an empty roster")]
    EmptyRoster,

    #[error("collection cannot be empty")]
    InvalidCollection,

    #[error("failed to select an option for draw {draw}; cumulative probability walk ended")]
    SelectionExhausted { draw: f64 },

    #[error("selector catalog cannot be empty")]
    EmptyCatalog,

    #[error("invalid selector configuration: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

pub type Result<T, E = MatchError> = std::result::Result<T, E>;
