use std::fmt;

use super::{Position, Square};

const RANK_SEPARATOR: &str = "+-+-+-+-+-+-+-+-+\n";

impl Position {
    /// ASCII grid of the board, rank 8 at the top, one letter per piece
    /// (uppercase White) and a blank for empty squares.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::with_capacity(RANK_SEPARATOR.len() * 17);
        out.push_str(RANK_SEPARATOR);
        for rank in (0..8).rev() {
            out.push('|');
            for file in 0..8 {
                let symbol = Square::new(file, rank)
                    .and_then(|sq| self.occupant(sq))
                    .map_or(' ', |piece| piece.symbol());
                out.push(symbol);
                out.push('|');
            }
            out.push('\n');
            out.push_str(RANK_SEPARATOR);
        }
        out
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_grid() {
        let text = Position::start().render_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 17);
        assert_eq!(lines[0], "+-+-+-+-+-+-+-+-+");
        assert_eq!(lines[1], "|r|n|b|q|k|b|n|r|");
        assert_eq!(lines[5], "| | | | | | | | |");
        assert_eq!(lines[15], "|R|N|B|Q|K|B|N|R|");
        assert!(lines.iter().all(|line| line.len() == 17));
    }

    #[test]
    fn test_display_matches_render() {
        let position = Position::start();
        assert_eq!(position.to_string(), position.render_text());
    }
}
