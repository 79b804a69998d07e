//! Predicates gating whether a rule applies to a piece.

use crate::board::{Piece, Position};

/// Condition a piece must meet in a position for a rule to contribute moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Prerequisite {
    /// Always satisfied.
    Always,
    /// Pawn has not left its starting rank.
    PawnOnHomeRank,
    /// Pawn's next step lands on the far rank.
    PawnOnQueeningRank,
    /// Pawn stands on the third through sixth rank.
    PawnBetweenThirdAndSixth,
}

impl Prerequisite {
    /// Test the condition. A piece off the board satisfies nothing.
    #[must_use]
    pub fn satisfied(self, _position: &Position, piece: &Piece) -> bool {
        let Some(location) = piece.location() else {
            return false;
        };
        let rank = location.rank();
        match self {
            Prerequisite::Always => true,
            Prerequisite::PawnOnHomeRank => rank == piece.color().pawn_home_rank(),
            Prerequisite::PawnOnQueeningRank => rank == piece.color().pawn_queening_rank(),
            Prerequisite::PawnBetweenThirdAndSixth => (2..=5).contains(&rank),
        }
    }
}
