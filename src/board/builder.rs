//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, PieceKind, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square::new(4, 0).unwrap(), Color::White, PieceKind::King)
//!     .piece(Square::new(4, 7).unwrap(), Color::Black, PieceKind::King)
//!     .piece(Square::new(0, 1).unwrap(), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(position.pool_len(), 3);
//! ```

use super::{Color, PieceKind, Position, Square};

/// A fluent builder for constructing `Position`s.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, PieceKind)>,
    side_to_move: Color,
    en_passant_target: Option<Square>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty builder with White to move.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            en_passant_target: None,
        }
    }

    /// Add a piece. A later piece on the same square replaces an earlier one.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.push((square, color, kind));
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub fn en_passant(mut self, square: Option<Square>) -> Self {
        self.en_passant_target = square;
        self
    }

    #[must_use]
    pub fn build(self) -> Position {
        let mut position = Position::new();
        for (square, color, kind) in self.pieces {
            position.put_piece(square, color, kind);
        }
        position.set_side_to_move(Some(self.side_to_move));
        position.set_en_passant_target(self.en_passant_target);
        position
    }
}
