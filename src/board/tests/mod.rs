//! Position engine tests.
//!
//! - `movegen.rs` - pseudo-legal and legal generation
//! - `attacks.rs` - attack and check detection
//! - `make_unmake.rs` - speculative application and undo
//! - `fen.rs` - position text loading in strict and permissive modes
//! - `perft.rs` - node counts for reference positions
//! - `properties.rs` - property-based tests

mod fen;

use crate::board::{Position, Square};

/// Position 4 of the standard perft suite; White is in check from b6.
pub(super) const CHECKED_FEN: &str =
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";

pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

pub(super) fn load(fen: &str) -> Position {
    Position::try_from_fen(fen).unwrap()
}
