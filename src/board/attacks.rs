//! Attack and check detection.
//!
//! Reuses the rule table in attack mode: a piece attacks a square when one
//! of its applicable rules could capture there, whatever currently stands
//! on it (pawns attack diagonally even though they advance straight).

use super::error::PositionError;
use super::{Color, PieceId, PieceKind, Position, Square};

impl Position {
    /// True if `piece` attacks `target`.
    ///
    /// An absent, unknown or off-board piece attacks nothing, and no piece
    /// attacks a square held by its own side.
    #[must_use]
    pub fn attacks(&self, piece: Option<PieceId>, target: Square) -> bool {
        let Some(piece) = piece.and_then(|id| self.get_piece(id)) else {
            return false;
        };
        let Some(from) = piece.location() else {
            return false;
        };
        if self
            .occupant(target)
            .is_some_and(|occupant| occupant.color() == piece.color())
        {
            return false;
        }
        piece.rules().iter().any(|rule| {
            rule.prerequisite.satisfied(self, piece)
                && rule.move_type.reaches(self, from, piece.color(), target)
        })
    }

    /// True if any piece of `by` attacks `target`.
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        self.placed_pieces()
            .any(|(id, piece)| piece.color() == by && self.attacks(Some(id), target))
    }

    /// The `color` king on the board.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<PieceId> {
        self.placed_pieces()
            .find(|(_, piece)| piece.color() == color && piece.kind() == PieceKind::King)
            .map(|(id, _)| id)
    }

    /// True if the `color` king is attacked.
    ///
    /// `king` skips the search when the caller already holds the king.
    pub fn is_check(&self, color: Color, king: Option<PieceId>) -> Result<bool, PositionError> {
        let king = match king {
            Some(id) => id,
            None => self
                .find_king(color)
                .ok_or(PositionError::MissingKing { color })?,
        };
        let square = self
            .get_piece(king)
            .and_then(|piece| piece.location())
            .ok_or(PositionError::MissingKing { color })?;
        Ok(self.is_square_attacked(square, color.opponent()))
    }

    pub fn is_in_check(&self, color: Color) -> Result<bool, PositionError> {
        self.is_check(color, None)
    }
}
