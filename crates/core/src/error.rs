//! Error types for session construction.

use crate::types::MIN_DIM;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid grid dimension {dim}: must be at least {min} and dim * dim must fit in memory", min = MIN_DIM)]
    InvalidDimension { dim: usize },

    #[error("grid of dimension {dim} needs {expected} cells, got {actual}")]
    CellCountMismatch {
        dim: usize,
        expected: usize,
        actual: usize,
    },
}
