//! Piece kinds, colors and the piece-token alias table.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lowercase letter for this kind.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Letter with case chosen by color (uppercase for White).
    #[inline]
    #[must_use]
    pub fn symbol(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// True for the kinds a pawn may be replaced by.
    #[inline]
    #[must_use]
    pub const fn is_promotable(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        f.write_str(name)
    }
}

/// Promotion choices, in the order moves are emitted.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank a pawn of this color starts on (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_home_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank a pawn of this color promotes on (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_far_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Rank a pawn must stand on to promote with its next step.
    #[inline]
    #[must_use]
    pub const fn pawn_queening_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Short alias, long name, and the concrete piece each token denotes.
const PIECE_ALIASES: [(char, &str, Color, PieceKind); 12] = [
    ('P', "WhitePawn", Color::White, PieceKind::Pawn),
    ('N', "WhiteKnight", Color::White, PieceKind::Knight),
    ('B', "WhiteBishop", Color::White, PieceKind::Bishop),
    ('R', "WhiteRook", Color::White, PieceKind::Rook),
    ('Q', "WhiteQueen", Color::White, PieceKind::Queen),
    ('K', "WhiteKing", Color::White, PieceKind::King),
    ('p', "BlackPawn", Color::Black, PieceKind::Pawn),
    ('n', "BlackKnight", Color::Black, PieceKind::Knight),
    ('b', "BlackBishop", Color::Black, PieceKind::Bishop),
    ('r', "BlackRook", Color::Black, PieceKind::Rook),
    ('q', "BlackQueen", Color::Black, PieceKind::Queen),
    ('k', "BlackKing", Color::Black, PieceKind::King),
];

/// Resolve a single-letter alias such as `'N'` or `'q'`.
#[must_use]
pub fn piece_from_char(c: char) -> Option<(Color, PieceKind)> {
    PIECE_ALIASES
        .iter()
        .find(|(alias, ..)| *alias == c)
        .map(|&(_, _, color, kind)| (color, kind))
}

/// Resolve a piece token: a one-letter alias or a name like `"WhiteKnight"`.
#[must_use]
pub fn resolve_piece_token(token: &str) -> Option<(Color, PieceKind)> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return piece_from_char(c);
    }
    PIECE_ALIASES
        .iter()
        .find(|(_, name, ..)| *name == token)
        .map(|&(_, _, color, kind)| (color, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_alias_and_name() {
        assert_eq!(
            resolve_piece_token("N"),
            Some((Color::White, PieceKind::Knight))
        );
        assert_eq!(
            resolve_piece_token("BlackQueen"),
            Some((Color::Black, PieceKind::Queen))
        );
        assert_eq!(resolve_piece_token("x"), None);
        assert_eq!(resolve_piece_token("Knight"), None);
        assert_eq!(resolve_piece_token(""), None);
    }

    #[test]
    fn test_symbol_case_follows_color() {
        for &(alias, _, color, kind) in &PIECE_ALIASES {
            assert_eq!(kind.symbol(color), alias);
        }
    }

    #[test]
    fn test_king_and_pawn_never_promotable() {
        assert!(PROMOTION_KINDS.iter().all(|k| k.is_promotable()));
        assert!(!PieceKind::King.is_promotable());
        assert!(!PieceKind::Pawn.is_promotable());
    }
}
