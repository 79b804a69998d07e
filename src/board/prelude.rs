//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let position = Position::start();
//! assert_eq!(position.side_to_move(), Some(Color::White));
//! ```

pub use super::{
    Color, FenError, Move, MoveList, MoveResult, PieceId, PieceKind, Position, PositionBuilder,
    PositionError, Square,
};
