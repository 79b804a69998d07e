//! Data-driven movement rules.
//!
//! Each piece kind owns an ordered list of [`Rule`]s, each binding a
//! [`Prerequisite`], a [`MoveType`] and the [`MoveResult`] its moves carry.
//! Generation and attack detection both interpret the same table.

mod direction;
mod move_type;
mod prerequisite;

use once_cell::sync::Lazy;

use super::{MoveResult, PieceKind, Square};

pub use direction::Direction;
pub(crate) use direction::pawn_forward;
pub use move_type::{CapturePolicy, MoveType, SLIDE_MAX};
pub use prerequisite::Prerequisite;

/// Prerequisite, move type and result tag for one way a piece can move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rule {
    pub prerequisite: Prerequisite,
    pub move_type: MoveType,
    pub result: MoveResult,
}

impl Rule {
    #[must_use]
    pub const fn new(prerequisite: Prerequisite, move_type: MoveType, result: MoveResult) -> Self {
        Rule {
            prerequisite,
            move_type,
            result,
        }
    }

    const fn always(move_type: MoveType) -> Self {
        Rule::new(Prerequisite::Always, move_type, MoveResult::Simple)
    }
}

/// A destination produced by a move type, before the rule's result is applied.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Candidate {
    pub(crate) to: Square,
    pub(crate) promotion: Option<PieceKind>,
    pub(crate) result: Option<MoveResult>,
}

impl Candidate {
    #[inline]
    pub(crate) const fn to(to: Square) -> Self {
        Candidate {
            to,
            promotion: None,
            result: None,
        }
    }
}

static DIAGONAL: [Direction; 1] = [Direction::Diagonal];
static LINEAR: [Direction; 1] = [Direction::Linear];
static ROYAL: [Direction; 2] = [Direction::Diagonal, Direction::Linear];
static KNIGHT: [Direction; 1] = [Direction::Knight];

/// Rule lists indexed by `PieceKind::index`.
static RULE_TABLE: Lazy<[Vec<Rule>; 6]> = Lazy::new(|| {
    [
        vec![
            Rule::new(
                Prerequisite::PawnOnHomeRank,
                MoveType::Pawn { advance: 2 },
                MoveResult::Simple,
            ),
            Rule::new(
                Prerequisite::PawnBetweenThirdAndSixth,
                MoveType::Pawn { advance: 1 },
                MoveResult::Simple,
            ),
            Rule::new(
                Prerequisite::PawnOnQueeningRank,
                MoveType::Pawn { advance: 1 },
                MoveResult::Queening,
            ),
        ],
        vec![Rule::always(MoveType::jump(&KNIGHT))],
        vec![Rule::always(MoveType::slide(&DIAGONAL))],
        vec![Rule::always(MoveType::slide(&LINEAR))],
        vec![Rule::always(MoveType::slide(&ROYAL))],
        // TODO: castling rules once castling rights are tracked
        vec![Rule::always(MoveType::jump(&ROYAL))],
    ]
});

/// Ordered rules for a piece kind.
#[must_use]
pub fn rules_for(kind: PieceKind) -> &'static [Rule] {
    &RULE_TABLE[kind.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_rules() {
        for kind in PieceKind::ALL {
            assert!(!rules_for(kind).is_empty(), "{kind} has no rules");
        }
    }

    #[test]
    fn test_only_pawns_use_gated_rules() {
        for kind in PieceKind::ALL {
            let gated = rules_for(kind)
                .iter()
                .any(|rule| rule.prerequisite != Prerequisite::Always);
            assert_eq!(gated, kind == PieceKind::Pawn);
        }
    }

    #[test]
    fn test_sliders_and_steppers() {
        let queen = rules_for(PieceKind::Queen)[0].move_type;
        let king = rules_for(PieceKind::King)[0].move_type;
        assert!(matches!(queen, MoveType::Slide { max_steps: SLIDE_MAX, .. }));
        assert!(matches!(king, MoveType::Slide { max_steps: 1, .. }));
    }
}
