//! Core value types.
//!
//! - `PieceKind` and `Color` - piece kinds, colors and the token alias table
//! - `Square` - 0x88 board square
//! - `Move`, `MoveResult` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList, MoveResult};
pub use piece::{piece_from_char, resolve_piece_token, Color, PieceKind, PROMOTION_KINDS};
pub use square::{square_index, valid_square, Square, BOARD_SLOTS};
