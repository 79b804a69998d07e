//! 0x88 square representation.
//!
//! A square is an index into a 128-slot array where `16 * rank + file`
//! addresses the real board. Any index with a bit of `0x88` set lies off
//! the board, so a single mask test bounds-checks both axes at once while
//! walking a ray.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of slots in the 0x88 board array.
pub const BOARD_SLOTS: usize = 128;

/// Off-board mask for 0x88 indices.
const OFF_BOARD: i16 = 0x88;

/// Compute the 0x88 index of a file/rank pair without validating it.
#[inline]
#[must_use]
pub const fn square_index(file: u8, rank: u8) -> u8 {
    16 * rank + file
}

/// True if `index` addresses a square on the board.
#[inline]
#[must_use]
pub const fn valid_square(index: i16) -> bool {
    index >= 0 && index & OFF_BOARD == 0
}

/// A square known to be on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Build a square from file and rank (both 0-7).
    #[must_use]
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(square_index(file, rank)))
        } else {
            None
        }
    }

    /// Build a square from a raw 0x88 index.
    #[must_use]
    pub fn from_index(index: i16) -> Option<Self> {
        if valid_square(index) {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Rank 0-7, where 0 is the first rank.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 >> 4
    }

    /// File 0-7, where 0 is the a-file.
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 & 0x0F
    }

    /// Step by a 0x88 offset, or `None` if the result leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, delta: i16) -> Option<Self> {
        Square::from_index(self.0 as i16 + delta)
    }

    /// Iterate the 64 on-board squares, a1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square(square_index(file, rank))))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() + b'a') as char, self.rank() + 1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        Square::new(file, rank).ok_or_else(|| SquareError::InvalidNotation {
            notation: s.to_string(),
        })
    }
}
