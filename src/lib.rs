pub mod board;
pub mod sync;

pub use board::{Color, Move, MoveResult, PieceId, PieceKind, Position, PositionError, Square};
pub use sync::SharedPosition;
