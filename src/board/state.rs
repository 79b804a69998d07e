use super::error::PositionError;
use super::rules::{rules_for, Rule};
use super::{resolve_piece_token, Color, PieceKind, Square, BOARD_SLOTS};

/// Index of a piece in a position's pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A pooled piece. `location` is `None` while the piece is off the board
/// (captured, or not used by the current position).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub(crate) color: Color,
    pub(crate) kind: PieceKind,
    pub(crate) location: Option<Square>,
    pub(crate) has_moved: bool,
}

impl Piece {
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub const fn location(&self) -> Option<Square> {
        self.location
    }

    /// Set once the piece has been moved; reserved for castling.
    #[must_use]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Letter for this piece, uppercase for White.
    #[must_use]
    pub fn symbol(&self) -> char {
        self.kind.symbol(self.color)
    }

    /// Movement rules for this piece's kind, in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &'static [Rule] {
        rules_for(self.kind)
    }
}

/// Board deltas needed to reverse one applied move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndoFrame {
    /// Prior occupant of every square the move touched.
    pub(crate) squares: Vec<(Square, Option<PieceId>)>,
    /// Prior `has_moved` flag of every piece the move placed.
    pub(crate) moved: Vec<(PieceId, bool)>,
    /// Pool entry created by this move's promotion, dropped again on undo.
    pub(crate) allocated: Option<PieceId>,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_side_to_move: Option<Color>,
}

/// Board, piece pool, side to move, en passant target and undo stack.
///
/// The board maps squares to pool indices and each pooled piece records its
/// own square. Both sides of that link are only written by [`Position::place`]
/// and [`Position::lift`], which keep them in step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: [Option<PieceId>; BOARD_SLOTS],
    pub(crate) pieces: Vec<Piece>,
    pub(crate) side_to_move: Option<Color>,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) undo_stack: Vec<UndoFrame>,
}

impl Position {
    /// An empty board with no pieces, no side to move and no history.
    #[must_use]
    pub fn new() -> Self {
        Position {
            board: [None; BOARD_SLOTS],
            pieces: Vec::new(),
            side_to_move: None,
            en_passant_target: None,
            undo_stack: Vec::new(),
        }
    }

    /// The standard initial position.
    #[must_use]
    pub fn start() -> Self {
        let mut position = Position::new();
        position.load_start_position();
        position
    }

    #[must_use]
    pub fn side_to_move(&self) -> Option<Color> {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, color: Option<Color>) {
        self.side_to_move = color;
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn set_en_passant_target(&mut self, square: Option<Square>) {
        self.en_passant_target = square;
    }

    /// Number of applied moves that can be undone.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Pool index of the piece on `square`.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<PieceId> {
        self.board[square.index()]
    }

    /// The piece standing on `square`.
    #[inline]
    #[must_use]
    pub fn occupant(&self, square: Square) -> Option<&Piece> {
        self.piece_at(square).map(|id| &self.pieces[id.0])
    }

    /// The pooled piece `id`.
    ///
    /// # Panics
    /// If `id` does not belong to this position's pool; see
    /// [`Position::get_piece`].
    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    /// The pooled piece `id`, or `None` for an id this pool never issued.
    #[must_use]
    pub fn get_piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)
    }

    /// Every pooled piece, on the board or not.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(idx, piece)| (PieceId(idx), piece))
    }

    /// Pieces currently on the board.
    pub fn placed_pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces().filter(|(_, piece)| piece.location.is_some())
    }

    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pieces.len()
    }

    /// Place a piece named by `token` (`"N"`, `"q"`, `"WhiteKnight"`, ...).
    ///
    /// Reuses an off-board pooled piece of that kind when one exists.
    /// Whatever stood on `square` is returned to the pool. No chess
    /// legality is checked.
    pub fn set_piece(&mut self, square: Square, token: &str) -> Result<PieceId, PositionError> {
        let (color, kind) =
            resolve_piece_token(token).ok_or_else(|| PositionError::InvalidPieceKind {
                token: token.to_string(),
            })?;
        Ok(self.put_piece(square, color, kind))
    }

    /// Typed form of [`Position::set_piece`].
    pub fn put_piece(&mut self, square: Square, color: Color, kind: PieceKind) -> PieceId {
        self.lift(square);
        let id = self.unused_piece(color, kind);
        self.place(id, square);
        id
    }

    /// Empty `square`, returning its piece to the pool.
    pub fn remove_piece(&mut self, square: Square) -> Option<PieceId> {
        self.lift(square)
    }

    /// An off-board pooled piece of the given color and kind, allocating
    /// one if the pool has none spare.
    pub(crate) fn unused_piece(&mut self, color: Color, kind: PieceKind) -> PieceId {
        if let Some(idx) = self
            .pieces
            .iter()
            .position(|p| p.color == color && p.kind == kind && p.location.is_none())
        {
            return PieceId(idx);
        }
        self.pieces.push(Piece {
            color,
            kind,
            location: None,
            has_moved: false,
        });
        PieceId(self.pieces.len() - 1)
    }

    /// Put an off-board piece on an empty square.
    pub(crate) fn place(&mut self, id: PieceId, square: Square) {
        debug_assert!(self.board[square.index()].is_none());
        debug_assert!(self.pieces[id.0].location.is_none());
        self.board[square.index()] = Some(id);
        self.pieces[id.0].location = Some(square);
    }

    /// Take whatever stands on `square` off the board.
    pub(crate) fn lift(&mut self, square: Square) -> Option<PieceId> {
        let id = self.board[square.index()].take()?;
        self.pieces[id.0].location = None;
        Some(id)
    }

    /// Detach every piece and forget side to move, en passant and history.
    /// The pool itself is kept for reuse.
    pub(crate) fn clear(&mut self) {
        self.board = [None; BOARD_SLOTS];
        for piece in &mut self.pieces {
            piece.location = None;
            piece.has_moved = false;
        }
        self.side_to_move = None;
        self.en_passant_target = None;
        self.undo_stack.clear();
    }

    /// Reset to the standard initial position.
    pub fn load_start_position(&mut self) {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        self.clear();
        for (file, kind) in (0u8..).zip(BACK_RANK) {
            for (rank, color, kind) in [
                (0, Color::White, kind),
                (1, Color::White, PieceKind::Pawn),
                (6, Color::Black, PieceKind::Pawn),
                (7, Color::Black, kind),
            ] {
                if let Some(square) = Square::new(file, rank) {
                    self.put_piece(square, color, kind);
                }
            }
        }
        self.side_to_move = Some(Color::White);
        log::debug!("loaded start position");
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_new_position_is_empty() {
        let position = Position::new();
        assert_eq!(position.board.len(), 128);
        assert!(position.board.iter().all(Option::is_none));
        assert_eq!(position.pool_len(), 0);
        assert_eq!(position.undo_depth(), 0);
        assert_eq!(position.side_to_move(), None);
    }

    #[test]
    fn test_set_piece_resolves_alias() {
        let mut position = Position::new();
        let id = position.set_piece(sq("b1"), "N").unwrap();
        let knight = position.piece(id);
        assert_eq!(knight.color(), Color::White);
        assert_eq!(knight.kind(), PieceKind::Knight);
        assert_eq!(knight.location(), Some(sq("b1")));
        assert!(!knight.has_moved());
        assert_eq!(knight.symbol(), 'N');
    }

    #[test]
    fn test_set_piece_rejects_unknown_token() {
        let mut position = Position::new();
        let err = position.set_piece(sq("a1"), "Dragon").unwrap_err();
        assert_eq!(
            err,
            PositionError::InvalidPieceKind {
                token: "Dragon".to_string()
            }
        );
        assert_eq!(position.pool_len(), 0);
    }

    #[test]
    fn test_pool_reuses_detached_pieces() {
        let mut position = Position::new();
        let first = position.set_piece(sq("d1"), "WhiteQueen").unwrap();
        assert_eq!(position.remove_piece(sq("d1")), Some(first));
        assert_eq!(position.piece(first).location(), None);

        let second = position.set_piece(sq("d8"), "Q").unwrap();
        assert_eq!(first, second);
        assert_eq!(position.pool_len(), 1);
    }

    #[test]
    fn test_overwriting_square_detaches_previous_occupant() {
        let mut position = Position::new();
        let rook = position.set_piece(sq("a1"), "R").unwrap();
        let bishop = position.set_piece(sq("a1"), "b").unwrap();
        assert_eq!(position.piece_at(sq("a1")), Some(bishop));
        assert_eq!(position.piece(rook).location(), None);
    }

    #[test]
    fn test_start_position_layout() {
        let position = Position::start();
        assert_eq!(position.pool_len(), 32);
        let expected = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
        ];
        for (idx, kind) in expected.into_iter().enumerate() {
            let piece = position.occupant(Square::new(idx as u8, 0).unwrap()).unwrap();
            assert_eq!(piece.kind(), kind);
            assert_eq!(piece.color(), Color::White);
        }
        assert_eq!(position.side_to_move(), Some(Color::White));
    }

    #[test]
    fn test_board_and_locations_agree() {
        let position = Position::start();
        for (id, piece) in position.placed_pieces() {
            let location = piece.location().unwrap();
            assert_eq!(position.piece_at(location), Some(id));
        }
        for square in Square::all() {
            if let Some(id) = position.piece_at(square) {
                assert_eq!(position.piece(id).location(), Some(square));
            }
        }
    }

    #[test]
    fn test_get_piece_checks_pool_bounds() {
        let position = Position::start();
        let id = position.piece_at(sq("e1")).unwrap();
        assert_eq!(position.get_piece(id), Some(position.piece(id)));
        assert_eq!(position.get_piece(PieceId(position.pool_len())), None);
    }

    #[test]
    fn test_reloading_reuses_pool() {
        let mut position = Position::start();
        position.load_start_position();
        assert_eq!(position.pool_len(), 32);
    }
}
