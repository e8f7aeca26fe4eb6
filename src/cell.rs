//! A single board cell with its owner-only and opponent-visible state.

use crate::common::Coord;

/// What the owning side knows about a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStatus {
    #[default]
    Empty,
    Occupied,
    Hit,
    Miss,
    /// Neighbour of a placed ship; blocks further placement.
    Border,
}

/// What the opponent is allowed to see about a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublicStatus {
    #[default]
    Unknown,
    Hit,
    Miss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    status: CellStatus,
    public: PublicStatus,
}

impl Cell {
    /// Create an empty, untargeted cell at (`row`, `col`).
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            status: CellStatus::Empty,
            public: PublicStatus::Unknown,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    /// Owner-side status.
    pub fn status(&self) -> CellStatus {
        self.status
    }

    pub fn set_status(&mut self, status: CellStatus) {
        self.status = status;
    }

    /// Opponent-visible status.
    pub fn public_status(&self) -> PublicStatus {
        self.public
    }

    pub fn set_public_status(&mut self, public: PublicStatus) {
        self.public = public;
    }

    /// Returns `true` if this cell sits at (`row`, `col`).
    pub fn matches(&self, row: usize, col: usize) -> bool {
        self.row == row && self.col == col
    }
}
