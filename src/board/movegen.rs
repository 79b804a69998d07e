use super::error::PositionError;
use super::rules::Candidate;
use super::{Move, MoveList, PieceId, Position};

impl Position {
    /// Pseudo-legal moves for one piece, in rule order.
    ///
    /// A piece that is off the board, or not in this pool, generates nothing.
    #[must_use]
    pub fn generate_moves(&self, id: PieceId) -> MoveList {
        let mut moves = MoveList::new();
        self.push_piece_moves(id, &mut moves);
        moves
    }

    fn push_piece_moves(&self, id: PieceId, moves: &mut MoveList) {
        let Some(piece) = self.get_piece(id) else {
            return;
        };
        let Some(from) = piece.location() else {
            return;
        };

        let mut candidates: Vec<Candidate> = Vec::new();
        for rule in piece.rules() {
            if !rule.prerequisite.satisfied(self, piece) {
                continue;
            }
            candidates.clear();
            rule.move_type
                .generate(self, from, piece.color(), &mut candidates);
            moves.extend(candidates.iter().map(|c| {
                Move::new(from, c.to, c.promotion, c.result.unwrap_or(rule.result))
            }));
        }
    }

    /// Pseudo-legal moves for every piece of the side to move.
    pub fn generate_all_moves(&self) -> Result<MoveList, PositionError> {
        let color = self.side_to_move.ok_or(PositionError::InvalidSideToMove)?;
        let mut moves = MoveList::new();
        for (id, _) in self
            .placed_pieces()
            .filter(|(_, piece)| piece.color() == color)
        {
            self.push_piece_moves(id, &mut moves);
        }
        Ok(moves)
    }

    /// Moves of the side to move that do not leave its own king in check.
    pub fn legal_moves(&mut self) -> Result<MoveList, PositionError> {
        let pseudo = self.generate_all_moves()?;
        let mut legal = MoveList::with_capacity(pseudo.len());
        for mv in pseudo {
            if self.attempt_move(&mv)? {
                self.undo_last_move()?;
                legal.push(mv);
            }
        }
        Ok(legal)
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> Result<u64, PositionError> {
        if depth == 0 {
            return Ok(1);
        }
        let mut nodes = 0;
        for mv in self.generate_all_moves()? {
            if self.attempt_move(&mv)? {
                nodes += if depth == 1 { 1 } else { self.perft(depth - 1)? };
                self.undo_last_move()?;
            }
        }
        Ok(nodes)
    }

    /// Side to move is in check and has no legal move.
    pub fn is_checkmate(&mut self) -> Result<bool, PositionError> {
        let color = self.side_to_move.ok_or(PositionError::InvalidSideToMove)?;
        Ok(self.is_in_check(color)? && self.legal_moves()?.is_empty())
    }

    /// Side to move is not in check but has no legal move.
    pub fn is_stalemate(&mut self) -> Result<bool, PositionError> {
        let color = self.side_to_move.ok_or(PositionError::InvalidSideToMove)?;
        Ok(!self.is_in_check(color)? && self.legal_moves()?.is_empty())
    }
}
