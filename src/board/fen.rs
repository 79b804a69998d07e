use super::error::{FenError, PositionError};
use super::{piece_from_char, Color, PieceKind, Position, Square};

/// FEN of the standard initial position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Everything read from position text, gathered before the position is touched.
struct ParsedText {
    placements: Vec<(Square, Color, PieceKind)>,
    side_to_move: Option<Color>,
    en_passant_target: Option<Square>,
}

impl Position {
    /// Build a position from FEN text in strict mode.
    pub fn try_from_fen(fen: &str) -> Result<Self, PositionError> {
        let mut position = Position::new();
        position.load_from_text(fen, true)?;
        Ok(position)
    }

    /// Replace the current position with one read from FEN text.
    ///
    /// With `strict`, malformed text fails with
    /// [`PositionError::MalformedPositionText`] and the position is left
    /// unchanged. Otherwise problems are logged and skipped: unknown piece
    /// letters and squares past the h-file are ignored, an unreadable side to
    /// move leaves it unset, an unreadable en passant field clears it.
    /// Castling and clock fields are accepted and ignored.
    pub fn load_from_text(&mut self, text: &str, strict: bool) -> Result<(), PositionError> {
        let parsed = parse_text(text, strict)?;
        self.clear();
        for (square, color, kind) in parsed.placements {
            self.put_piece(square, color, kind);
        }
        self.side_to_move = parsed.side_to_move;
        self.en_passant_target = parsed.en_passant_target;
        log::debug!("loaded position '{text}'");
        Ok(())
    }

    /// Convert the position to FEN notation.
    ///
    /// Castling rights are always written as `-` and the clocks as `0 1`.
    /// An unset side to move is written as `-`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let piece = Square::new(file, rank).and_then(|sq| self.occupant(sq));
                if let Some(piece) = piece {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.symbol());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Some(Color::White) => "w",
            Some(Color::Black) => "b",
            None => "-",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{} {} - {} 0 1", rows.join("/"), active, ep)
    }
}

fn parse_text(text: &str, strict: bool) -> Result<ParsedText, FenError> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() < 4 {
        if strict {
            return Err(FenError::TooFewParts { found: parts.len() });
        }
        log::warn!("position text has {} fields, expected at least 4", parts.len());
    }

    let board = parts.first().copied().unwrap_or("");
    let ranks: Vec<&str> = board.split('/').collect();
    if ranks.len() != 8 {
        if strict {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        log::warn!("board field has {} ranks, expected 8", ranks.len());
    }

    let mut placements = Vec::new();
    for (rank_idx, rank_str) in ranks.iter().take(8).enumerate() {
        let rank = 7 - rank_idx as u8;
        let mut file: usize = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as usize;
                continue;
            }
            match piece_from_char(c) {
                Some((color, kind)) => {
                    match u8::try_from(file).ok().and_then(|f| Square::new(f, rank)) {
                        Some(square) => placements.push((square, color, kind)),
                        None if strict => {
                            return Err(FenError::TooManyFiles {
                                rank: rank_idx,
                                files: file + 1,
                            })
                        }
                        None => log::warn!("ignoring '{c}' past the h-file in rank {rank_idx}"),
                    }
                }
                None if strict => return Err(FenError::InvalidPiece { char: c }),
                None => log::warn!("ignoring unknown piece '{c}'"),
            }
            file += 1;
        }
    }

    let side_to_move = match parts.get(1).copied() {
        Some("w") => Some(Color::White),
        Some("b") => Some(Color::Black),
        other => {
            let found = other.unwrap_or("").to_string();
            if strict {
                return Err(FenError::InvalidSideToMove { found });
            }
            log::warn!("side to move '{found}' not understood, leaving it unset");
            None
        }
    };

    let en_passant_target = match parts.get(3).copied() {
        None | Some("-") => None,
        Some(field) => match field.parse::<Square>() {
            Ok(square) => Some(square),
            Err(_) if strict => {
                return Err(FenError::InvalidEnPassant {
                    found: field.to_string(),
                })
            }
            Err(_) => {
                log::warn!("en passant square '{field}' not understood, clearing it");
                None
            }
        },
    };

    Ok(ParsedText {
        placements,
        side_to_move,
        en_passant_target,
    })
}
