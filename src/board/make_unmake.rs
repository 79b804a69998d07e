//! Speculative move application.
//!
//! Legality is decided by trial: a move is applied, the mover's king is
//! tested for check, and the move is rolled back from its undo frame if the
//! king is attacked.

use super::error::PositionError;
use super::rules::pawn_forward;
use super::{Color, Move, MoveResult, PieceKind, Position, UndoFrame};

impl Position {
    /// Apply a pseudo-legal move if it is legal.
    ///
    /// Returns `Ok(true)` when the move now stands as the current position,
    /// `Ok(false)` when it would leave the mover in check, in which case the
    /// position is exactly as before the call. The move itself is trusted to
    /// be pseudo-legal.
    pub fn attempt_move(&mut self, mv: &Move) -> Result<bool, PositionError> {
        let mover = self.apply_move(mv)?;
        match self.is_check(mover, None) {
            Ok(false) => Ok(true),
            Ok(true) => {
                log::trace!("{mv} leaves {mover} in check, rolled back");
                self.undo_last_move()?;
                Ok(false)
            }
            Err(err) => {
                self.undo_last_move()?;
                Err(err)
            }
        }
    }

    /// Perform the board effects of `mv`, flip the side to move and push an
    /// undo frame. Returns the color that moved.
    pub(crate) fn apply_move(&mut self, mv: &Move) -> Result<Color, PositionError> {
        let mover_id = self
            .piece_at(mv.from)
            .ok_or(PositionError::EmptySquare { square: mv.from })?;
        let mover = self.piece(mover_id);
        let (color, kind) = (mover.color(), mover.kind());

        let replacement = match mv.result {
            MoveResult::Queening => {
                let promoted = mv.promotion.unwrap_or(PieceKind::Queen);
                if !promoted.is_promotable() {
                    return Err(PositionError::InvalidPieceKind {
                        token: promoted.to_string(),
                    });
                }
                Some(promoted)
            }
            _ => None,
        };
        let victim = match mv.result {
            MoveResult::EnPassantCapture => mv.to.offset(-pawn_forward(color)),
            _ => None,
        };

        let mut frame = UndoFrame {
            squares: vec![(mv.from, Some(mover_id)), (mv.to, self.piece_at(mv.to))],
            moved: Vec::with_capacity(2),
            allocated: None,
            previous_en_passant_target: self.en_passant_target,
            previous_side_to_move: self.side_to_move,
        };
        if let Some(square) = victim {
            frame.squares.push((square, self.piece_at(square)));
        }

        self.lift(mv.from);
        self.lift(mv.to);
        if let Some(square) = victim {
            self.lift(square);
        }

        let pool_len = self.pieces.len();
        let placed = match replacement {
            Some(promoted) => self.unused_piece(color, promoted),
            None => mover_id,
        };
        if self.pieces.len() > pool_len {
            frame.allocated = Some(placed);
        }
        frame.moved.push((mover_id, self.pieces[mover_id.0].has_moved));
        if placed != mover_id {
            frame.moved.push((placed, self.pieces[placed.0].has_moved));
        }
        self.place(placed, mv.to);
        self.pieces[mover_id.0].has_moved = true;
        self.pieces[placed.0].has_moved = true;

        let step = mv.to.index() as i16 - mv.from.index() as i16;
        self.en_passant_target = if kind == PieceKind::Pawn && step == 2 * pawn_forward(color) {
            mv.from.offset(pawn_forward(color))
        } else {
            None
        };
        self.side_to_move = self.side_to_move.map(Color::opponent);
        self.undo_stack.push(frame);
        Ok(color)
    }

    /// Reverse the most recently applied move.
    pub fn undo_last_move(&mut self) -> Result<(), PositionError> {
        let frame = self
            .undo_stack
            .pop()
            .ok_or(PositionError::EmptyUndoStack)?;

        for &(square, _) in &frame.squares {
            self.lift(square);
        }
        for &(square, prior) in &frame.squares {
            if let Some(id) = prior {
                self.place(id, square);
            }
        }
        for &(id, has_moved) in frame.moved.iter().rev() {
            self.pieces[id.0].has_moved = has_moved;
        }
        // Pieces placed since this move keep their ids, so only a trailing
        // allocation can be dropped.
        if frame.allocated.is_some_and(|id| id.0 + 1 == self.pieces.len()) {
            self.pieces.pop();
        }
        self.en_passant_target = frame.previous_en_passant_target;
        self.side_to_move = frame.previous_side_to_move;
        Ok(())
    }
}
