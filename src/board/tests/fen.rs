//! Position text loading and writing tests.

use super::{load, sq, CHECKED_FEN};
use crate::board::{Color, FenError, PieceKind, Position, PositionError, START_FEN};

fn strict_error(fen: &str) -> FenError {
    match Position::try_from_fen(fen) {
        Err(PositionError::MalformedPositionText(err)) => err,
        other => panic!("expected malformed text for '{fen}', got {other:?}"),
    }
}

#[test]
fn test_start_fen_matches_start_position() {
    let loaded = load(START_FEN);
    let start = Position::start();
    assert_eq!(loaded.to_fen(), start.to_fen());
    assert_eq!(
        start.to_fen(),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"
    );
}

#[test]
fn test_checked_position_layout() {
    let position = load(CHECKED_FEN);
    let king = position.occupant(sq("g1")).unwrap();
    assert_eq!((king.color(), king.kind()), (Color::White, PieceKind::King));
    let pawn = position.occupant(sq("b2")).unwrap();
    assert_eq!((pawn.color(), pawn.kind()), (Color::Black, PieceKind::Pawn));
    assert_eq!(position.placed_pieces().count(), 31);
    assert_eq!(position.side_to_move(), Some(Color::White));
}

#[test]
fn test_black_to_move() {
    let position = load("4k3/8/8/8/8/8/8/4K3 b - - 0 1");
    assert_eq!(position.side_to_move(), Some(Color::Black));
}

#[test]
fn test_strict_errors() {
    assert_eq!(
        strict_error("8/8/8/8/8/8/8/8 w"),
        FenError::TooFewParts { found: 2 }
    );
    assert_eq!(
        strict_error("8/8/8/8/8/8/8 w - -"),
        FenError::WrongRankCount { found: 7 }
    );
    assert_eq!(
        strict_error("8/8/8/8/8/8/8/4X3 w - -"),
        FenError::InvalidPiece { char: 'X' }
    );
    assert_eq!(
        strict_error("8/8/8/8/8/8/8/8K w - -"),
        FenError::TooManyFiles { rank: 7, files: 9 }
    );
    assert_eq!(
        strict_error("8/8/8/8/8/8/8/8 x - -"),
        FenError::InvalidSideToMove {
            found: "x".to_string()
        }
    );
    assert_eq!(
        strict_error("8/8/8/8/8/8/8/8 w - z9"),
        FenError::InvalidEnPassant {
            found: "z9".to_string()
        }
    );
}

#[test]
fn test_strict_failure_leaves_position_unchanged() {
    let mut position = Position::start();
    let before = position.clone();
    let result = position.load_from_text("rnbqkbnr/pppppppp/8/8 w - -", true);
    assert!(matches!(
        result,
        Err(PositionError::MalformedPositionText(
            FenError::WrongRankCount { found: 4 }
        ))
    ));
    assert_eq!(position, before);
}

#[test]
fn test_permissive_board_only() {
    let mut position = Position::new();
    position
        .load_from_text("4k3/8/8/8/8/8/8/4K3", false)
        .unwrap();
    assert_eq!(position.placed_pieces().count(), 2);
    assert_eq!(position.side_to_move(), None);
    assert_eq!(
        position.generate_all_moves(),
        Err(PositionError::InvalidSideToMove)
    );
    assert!(position.to_fen().starts_with("4k3/8/8/8/8/8/8/4K3 - "));
}

#[test]
fn test_permissive_skips_unknown_pieces() {
    let mut position = Position::new();
    position
        .load_from_text("4k3/8/8/8/8/8/8/X3K3 w - -", false)
        .unwrap();
    assert_eq!(position.piece_at(sq("a1")), None);
    assert_eq!(position.occupant(sq("e1")).unwrap().kind(), PieceKind::King);
    assert_eq!(position.side_to_move(), Some(Color::White));
}

#[test]
fn test_permissive_bad_side_and_en_passant() {
    let mut position = Position::new();
    position
        .load_from_text("4k3/8/8/8/8/8/8/4K3 white - nowhere", false)
        .unwrap();
    assert_eq!(position.side_to_move(), None);
    assert_eq!(position.en_passant_target(), None);
}

#[test]
fn test_en_passant_field() {
    let position = load("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1");
    assert_eq!(position.en_passant_target(), Some(sq("d6")));
    assert!(position.to_fen().contains(" w - d6 "));
}

#[test]
fn test_reload_resets_history_and_keeps_pool() {
    let mut position = Position::start();
    let first = position.generate_all_moves().unwrap()[0];
    position.attempt_move(&first).unwrap();
    assert_eq!(position.undo_depth(), 1);

    position.load_from_text(CHECKED_FEN, true).unwrap();
    assert_eq!(position.undo_depth(), 0);
    assert_eq!(position.pool_len(), 32);
    assert_eq!(
        position.undo_last_move(),
        Err(PositionError::EmptyUndoStack)
    );
}

#[test]
fn test_loaded_pieces_have_not_moved() {
    let position = load(CHECKED_FEN);
    assert!(position.placed_pieces().all(|(_, p)| !p.has_moved()));
}

#[test]
fn test_to_fen_round_trip() {
    for fen in [
        "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 b - - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    ] {
        assert_eq!(load(fen).to_fen(), fen);
    }
}
