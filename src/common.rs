//! Common types for the sea battle core: coordinates, shot outcomes and errors.

use core::fmt;

use serde::Serialize;
use thiserror::Error;

/// 1-based board coordinate. Ships hold these as handles into their board's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of a shot that was accepted by the defending board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShotOutcome {
    /// Shot struck a deck of a ship that still floats.
    Hit,
    /// Shot struck the last unhit deck of a ship.
    Sunk,
    /// Shot landed in open water.
    Miss,
}

impl ShotOutcome {
    /// `true` for both [`ShotOutcome::Hit`] and [`ShotOutcome::Sunk`].
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// One resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shot {
    pub target: Coord,
    pub outcome: ShotOutcome,
}

/// Errors returned by [`crate::Board`] operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinates fall outside the grid.
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },
    /// The cell's public status is no longer unknown.
    #[error("cell ({row}, {col}) was already targeted")]
    AlreadyTargeted { row: usize, col: usize },
}

/// Errors that end a placement or targeting step.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Every candidate region for a ship of this size is blocked.
    #[error("no valid placement left for a {decks}-deck ship")]
    NoValidPlacement { decks: usize },
    /// The input collaborator has no more answers to give.
    #[error("input closed")]
    InputClosed,
    /// Internal state contradicts an invariant of the board or the match.
    #[error("internal invariant violated: {0}")]
    Invariant(&'static str),
    #[error(transparent)]
    Board(#[from] BoardError),
}
