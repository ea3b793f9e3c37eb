//! Error types for board queries and move generation.

use std::fmt;

use crate::coord::Coord;

/// Errors from the board-query capability.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The board has no occupancy record for a coordinate it reports in
    /// bounds. Move generation treats this as a collaborator contract
    /// violation, never as an empty square.
    #[error("no occupancy record for in-bounds square {coord}")]
    MissingSquare {
        /// The coordinate the board could not answer for.
        coord: Coord,
    },
}

/// Errors from computing a piece's destinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The origin square holds no piece at query time. This is a caller bug:
    /// the piece is not where the caller thinks it is.
    VacantOrigin {
        /// The queried origin.
        origin: Coord,
    },
    /// The board failed to answer an occupancy query it is obligated to
    /// answer.
    InconsistentBoard {
        /// The underlying board error.
        source: BoardError,
    },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::VacantOrigin { origin } => {
                write!(f, "no piece at origin {origin}")
            }
            MoveError::InconsistentBoard { source } => {
                write!(f, "inconsistent board: {source}")
            }
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InconsistentBoard { source } => Some(source),
            MoveError::VacantOrigin { .. } => None,
        }
    }
}

impl From<BoardError> for MoveError {
    fn from(source: BoardError) -> Self {
        MoveError::InconsistentBoard { source }
    }
}
