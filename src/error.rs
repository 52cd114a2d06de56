//! Error types for position operations

/// Position-specific errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Coordinate outside the board
    #[error("coordinate ({x}, {y}) is outside a {size}x{size} board")]
    OutOfRange { x: i32, y: i32, size: usize },

    /// Two positions of different board sizes
    #[error("board size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Board size of zero or above the supported maximum
    #[error("invalid board size {0}")]
    InvalidSize(usize),

    /// Turn set to an empty cell state
    #[error("turn must be Black or White")]
    InvalidTurn,
}

/// Result type for position operations
pub type PositionResult<T> = Result<T, PositionError>;
