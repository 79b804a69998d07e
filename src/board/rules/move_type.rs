//! Destination generators.
//!
//! A move type turns a piece's square into candidate destinations. Sliding
//! and jumping pieces share one ray walker parameterized by step limit and
//! capture policy; pawns get a dedicated generator because their advance,
//! capture and promotion squares all differ.

use crate::board::{Color, MoveResult, PieceKind, Position, Square, PROMOTION_KINDS};

use super::direction::{pawn_forward, Direction};
use super::Candidate;

/// What a ray may do when it meets a piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CapturePolicy {
    /// Only empty squares are destinations.
    NoCaptures,
    /// Only enemy-occupied squares are destinations.
    CapturesOnly,
    MoveOrCapture,
}

/// Maximum ray length for sliding pieces.
pub const SLIDE_MAX: u8 = 7;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveType {
    /// Walk every offset of every direction up to `max_steps` squares.
    Slide {
        directions: &'static [Direction],
        policy: CapturePolicy,
        max_steps: u8,
    },
    /// Pawn advance of up to `advance` squares plus diagonal captures,
    /// en passant, and promotion on the far rank.
    Pawn { advance: u8 },
}

impl MoveType {
    /// Sliding piece that moves or captures.
    #[must_use]
    pub const fn slide(directions: &'static [Direction]) -> Self {
        MoveType::Slide {
            directions,
            policy: CapturePolicy::MoveOrCapture,
            max_steps: SLIDE_MAX,
        }
    }

    /// Single-step piece that moves or captures.
    #[must_use]
    pub const fn jump(directions: &'static [Direction]) -> Self {
        MoveType::jump_with(directions, CapturePolicy::MoveOrCapture)
    }

    #[must_use]
    pub const fn jump_with(directions: &'static [Direction], policy: CapturePolicy) -> Self {
        MoveType::Slide {
            directions,
            policy,
            max_steps: 1,
        }
    }

    pub(crate) fn generate(
        &self,
        position: &Position,
        from: Square,
        color: Color,
        out: &mut Vec<Candidate>,
    ) {
        match *self {
            MoveType::Slide {
                directions,
                policy,
                max_steps,
            } => slide_moves(position, from, color, directions, policy, max_steps, out),
            MoveType::Pawn { advance } => pawn_moves(position, from, color, advance, out),
        }
    }

    /// True if a piece on `from` could capture on `target` were an enemy
    /// standing there.
    pub(crate) fn reaches(
        &self,
        position: &Position,
        from: Square,
        color: Color,
        target: Square,
    ) -> bool {
        match *self {
            MoveType::Slide {
                directions,
                policy,
                max_steps,
            } => {
                if policy == CapturePolicy::NoCaptures {
                    return false;
                }
                directions.iter().any(|dir| {
                    dir.offsets(color)
                        .iter()
                        .any(|&offset| ray_reaches(position, from, offset, max_steps, target))
                })
            }
            MoveType::Pawn { .. } => Direction::PawnCapture
                .offsets(color)
                .iter()
                .any(|&offset| from.offset(offset) == Some(target)),
        }
    }
}

fn slide_moves(
    position: &Position,
    from: Square,
    color: Color,
    directions: &[Direction],
    policy: CapturePolicy,
    max_steps: u8,
    out: &mut Vec<Candidate>,
) {
    for dir in directions {
        for &offset in dir.offsets(color) {
            let mut current = from;
            for _ in 0..max_steps {
                let Some(next) = current.offset(offset) else {
                    break;
                };
                match position.occupant(next) {
                    None => {
                        if policy != CapturePolicy::CapturesOnly {
                            out.push(Candidate::to(next));
                        }
                    }
                    Some(piece) => {
                        if piece.color() != color && policy != CapturePolicy::NoCaptures {
                            out.push(Candidate::to(next));
                        }
                        break;
                    }
                }
                current = next;
            }
        }
    }
}

fn ray_reaches(
    position: &Position,
    from: Square,
    offset: i16,
    max_steps: u8,
    target: Square,
) -> bool {
    let mut current = from;
    for _ in 0..max_steps {
        let Some(next) = current.offset(offset) else {
            return false;
        };
        if next == target {
            return true;
        }
        if position.occupant(next).is_some() {
            return false;
        }
        current = next;
    }
    false
}

fn pawn_moves(
    position: &Position,
    from: Square,
    color: Color,
    advance: u8,
    out: &mut Vec<Candidate>,
) {
    let far_rank = color.pawn_far_rank();

    for &forward in Direction::PawnForward.offsets(color) {
        let mut current = from;
        for _ in 0..advance {
            match current.offset(forward) {
                Some(next) if position.occupant(next).is_none() => {
                    push_pawn_move(next, far_rank, out);
                    current = next;
                }
                _ => break,
            }
        }
    }

    for &offset in Direction::PawnCapture.offsets(color) {
        let Some(target) = from.offset(offset) else {
            continue;
        };
        match position.occupant(target) {
            Some(piece) if piece.color() != color => push_pawn_move(target, far_rank, out),
            Some(_) => {}
            None if is_en_passant_target(position, target, color) => out.push(Candidate {
                to: target,
                promotion: None,
                result: Some(MoveResult::EnPassantCapture),
            }),
            None => {}
        }
    }
}

fn push_pawn_move(to: Square, far_rank: u8, out: &mut Vec<Candidate>) {
    if to.rank() == far_rank {
        for kind in PROMOTION_KINDS {
            out.push(Candidate {
                to,
                promotion: Some(kind),
                result: Some(MoveResult::Queening),
            });
        }
    } else {
        out.push(Candidate::to(to));
    }
}

/// `target` is the en passant square and an enemy pawn stands just past it.
fn is_en_passant_target(position: &Position, target: Square, color: Color) -> bool {
    if position.en_passant_target() != Some(target) {
        return false;
    }
    target
        .offset(-pawn_forward(color))
        .and_then(|victim| position.occupant(victim))
        .is_some_and(|piece| piece.color() != color && piece.kind() == PieceKind::Pawn)
}
