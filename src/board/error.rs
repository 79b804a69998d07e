//! Error types for position operations.

use std::fmt;

use super::{Color, Square};

/// Error type for position text parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Text has too few whitespace-separated fields (needs at least 4)
    TooFewParts { found: usize },
    /// Board field does not split into exactly 8 ranks
    WrongRankCount { found: usize },
    /// Unrecognized piece character in the board field
    InvalidPiece { char: char },
    /// A rank describes more than 8 files
    TooManyFiles { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "Board must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for operations on a `Position`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Position text rejected in strict mode
    MalformedPositionText(FenError),
    /// Piece token does not name a known piece
    InvalidPieceKind { token: String },
    /// No king of this color is on the board
    MissingKing { color: Color },
    /// Side to move is unset
    InvalidSideToMove,
    /// Undo requested with no applied move to reverse
    EmptyUndoStack,
    /// Move starts on an empty square
    EmptySquare { square: Square },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MalformedPositionText(err) => {
                write!(f, "Malformed position text: {err}")
            }
            PositionError::InvalidPieceKind { token } => {
                write!(f, "Invalid piece kind '{token}'")
            }
            PositionError::MissingKing { color } => {
                write!(f, "No {color} king on the board")
            }
            PositionError::InvalidSideToMove => write!(f, "Side to move is not set"),
            PositionError::EmptyUndoStack => {
                write!(f, "Attempting to undo with no move applied")
            }
            PositionError::EmptySquare { square } => {
                write!(f, "No piece on {square} to move")
            }
        }
    }
}

impl std::error::Error for PositionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PositionError::MalformedPositionText(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FenError> for PositionError {
    fn from(err: FenError) -> Self {
        PositionError::MalformedPositionText(err)
    }
}
