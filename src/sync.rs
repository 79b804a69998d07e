//! Shared ownership of a position across threads.
//!
//! A `Position` has a single undo stack, so interleaved make/undo calls from
//! different threads would corrupt it. `SharedPosition` serializes access
//! behind one lock per position; parallel exploration should work on
//! [`SharedPosition::snapshot`] copies instead.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::board::{Move, Position, PositionError};

/// A position behind a mutex, cheap to clone and share between threads.
#[derive(Clone, Debug, Default)]
pub struct SharedPosition(Arc<Mutex<Position>>);

impl SharedPosition {
    #[must_use]
    pub fn new(position: Position) -> Self {
        SharedPosition(Arc::new(Mutex::new(position)))
    }

    /// Lock the position for exclusive use.
    pub fn lock(&self) -> MutexGuard<'_, Position> {
        self.0.lock()
    }

    /// Clone the current position for independent exploration.
    #[must_use]
    pub fn snapshot(&self) -> Position {
        self.0.lock().clone()
    }

    /// Attempt a move under the lock. See [`Position::attempt_move`].
    pub fn attempt_move(&self, mv: &Move) -> Result<bool, PositionError> {
        self.0.lock().attempt_move(mv)
    }

    /// Undo under the lock. See [`Position::undo_last_move`].
    pub fn undo_last_move(&self) -> Result<(), PositionError> {
        self.0.lock().undo_last_move()
    }
}

impl From<Position> for SharedPosition {
    fn from(position: Position) -> Self {
        SharedPosition::new(position)
    }
}
