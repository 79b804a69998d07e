//! Move and move-result types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceKind;
use super::square::Square;

/// How a move changes the board beyond relocating the moving piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveResult {
    /// Relocation, capturing whatever enemy stands on `to`.
    Simple,
    /// Relocation plus replacement of the pawn by the promotion kind.
    Queening,
    /// Relocation plus removal of the pawn that passed `to` on its double step.
    EnPassantCapture,
}

/// A move from one square to another.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
    pub result: MoveResult,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
        result: MoveResult,
    ) -> Self {
        Move {
            from,
            to,
            promotion,
            result,
        }
    }

    /// Create an ordinary relocation (possibly a capture)
    #[inline]
    #[must_use]
    pub const fn simple(from: Square, to: Square) -> Self {
        Move::new(from, to, None, MoveResult::Simple)
    }

    /// Create a pawn promotion to `kind`
    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Move::new(from, to, Some(kind), MoveResult::Queening)
    }

    /// Create an en passant capture
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move::new(from, to, None, MoveResult::EnPassantCapture)
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        matches!(self.result, MoveResult::Queening)
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self.result, MoveResult::EnPassantCapture)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

/// Moves produced by generation.
pub type MoveList = Vec<Move>;
