//! Named sets of 0x88 square offsets.

use crate::board::Color;

/// A named set of offsets a move type walks along.
///
/// Pawn directions depend on the moving piece's color; the rest are
/// symmetric.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Diagonal,
    Linear,
    Knight,
    /// One rank toward the opponent.
    PawnForward,
    /// The two forward diagonals.
    PawnCapture,
}

const DIAGONAL: [i16; 4] = [-17, -15, 15, 17];
const LINEAR: [i16; 4] = [-16, -1, 1, 16];
const KNIGHT: [i16; 8] = [-33, -31, -18, -14, 14, 18, 31, 33];
const WHITE_FORWARD: [i16; 1] = [16];
const BLACK_FORWARD: [i16; 1] = [-16];
const WHITE_CAPTURE: [i16; 2] = [15, 17];
const BLACK_CAPTURE: [i16; 2] = [-15, -17];

impl Direction {
    #[must_use]
    pub const fn offsets(self, color: Color) -> &'static [i16] {
        match (self, color) {
            (Direction::Diagonal, _) => &DIAGONAL,
            (Direction::Linear, _) => &LINEAR,
            (Direction::Knight, _) => &KNIGHT,
            (Direction::PawnForward, Color::White) => &WHITE_FORWARD,
            (Direction::PawnForward, Color::Black) => &BLACK_FORWARD,
            (Direction::PawnCapture, Color::White) => &WHITE_CAPTURE,
            (Direction::PawnCapture, Color::Black) => &BLACK_CAPTURE,
        }
    }
}

/// Single-rank step toward the opponent for `color`.
#[inline]
#[must_use]
pub(crate) const fn pawn_forward(color: Color) -> i16 {
    Direction::PawnForward.offsets(color)[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawn_directions_mirror() {
        for dir in [Direction::PawnForward, Direction::PawnCapture] {
            let white = dir.offsets(Color::White);
            let black = dir.offsets(Color::Black);
            assert_eq!(white.len(), black.len());
            assert!(white.iter().zip(black).all(|(w, b)| *w == -*b));
        }
    }

    #[test]
    fn test_pawn_forward_follows_direction() {
        for color in [Color::White, Color::Black] {
            assert_eq!(
                Direction::PawnForward.offsets(color),
                &[pawn_forward(color)]
            );
        }
    }

    #[test]
    fn test_symmetric_directions_ignore_color() {
        for dir in [Direction::Diagonal, Direction::Linear, Direction::Knight] {
            assert_eq!(dir.offsets(Color::White), dir.offsets(Color::Black));
        }
        assert_eq!(Direction::Knight.offsets(Color::White).len(), 8);
    }
}
