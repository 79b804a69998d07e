//! Chess position representation and the rule-driven move engine.
//!
//! Squares use 0x88 indexing. Pieces live in a pool owned by the
//! [`Position`]; the board maps squares to pool indices. Moves are generated
//! by interpreting a per-kind table of [`Rule`]s, and legality is decided by
//! applying a move, testing for check, and rolling back when it fails.
//!
//! # Example
//! ```
//! use chess_rules::board::Position;
//!
//! let mut position = Position::start();
//! let moves = position.generate_all_moves().unwrap();
//! assert_eq!(moves.len(), 20);
//! assert!(position.attempt_move(&moves[0]).unwrap());
//! position.undo_last_move().unwrap();
//! ```

mod attacks;
mod builder;
mod display;
mod error;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
pub mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, PositionError, SquareError};
pub use fen::START_FEN;
pub use rules::{CapturePolicy, Direction, MoveType, Prerequisite, Rule};
pub use state::{Piece, PieceId, Position, UndoFrame};
pub use types::{
    piece_from_char, resolve_piece_token, square_index, valid_square, Color, Move, MoveList,
    MoveResult, PieceKind, Square, BOARD_SLOTS, PROMOTION_KINDS,
};
