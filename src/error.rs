use thiserror::Error;

/// Top-level error type for the snapkit engine.
#[derive(Debug, Error)]
pub enum SnapError {
    /// A shape-specific calculator was handed the wrong number of points.
    ///
    /// This indicates a classifier/calculator mismatch in the caller, not
    /// bad content data.
    #[error("{calculator} expects {expected} points, got {actual}")]
    PointCount {
        calculator: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An owner handle does not resolve to a piece in the store.
    #[error("piece not found: {0}")]
    PieceNotFound(String),
}

/// Convenience type alias for results using [`SnapError`].
pub type Result<T> = std::result::Result<T, SnapError>;
