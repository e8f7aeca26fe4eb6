//! Ships as ordered lists of deck handles into a board's grid.

use core::fmt;

use crate::board::Board;
use crate::cell::PublicStatus;
use crate::common::Coord;
use crate::config::ship_class_name;

/// A vessel made of one or more decks.
///
/// Decks are coordinates into the owning [`Board`]; the board owns the cells.
/// Contiguity is guaranteed by the placement agents, not checked here.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Ship {
    decks: Vec<Coord>,
}

impl Ship {
    /// Create a ship with no decks yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ship from an already chosen region.
    pub fn from_region(region: &[Coord]) -> Self {
        Self {
            decks: region.to_vec(),
        }
    }

    pub fn add_deck(&mut self, deck: Coord) {
        self.decks.push(deck);
    }

    /// Decks in the order they were added.
    pub fn decks(&self) -> &[Coord] {
        &self.decks
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Returns `true` if any deck sits at (`row`, `col`).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.decks.iter().any(|d| d.row == row && d.col == col)
    }

    /// A ship is sunk once every deck has been shot at on `board`.
    pub fn is_sunk(&self, board: &Board) -> bool {
        self.decks.iter().all(|d| {
            board
                .cell(d.row, d.col)
                .is_ok_and(|cell| cell.public_status() != PublicStatus::Unknown)
        })
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ship {{ class: \"{}\", decks: [", ship_class_name(self.len()))?;
        for (i, d) in self.decks.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, "] }}")
    }
}
