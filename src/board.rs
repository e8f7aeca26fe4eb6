//! Game board: the grid of cells, the fleet, placement regions and shot resolution.

use log::{debug, trace};

use crate::cell::{Cell, CellStatus, PublicStatus};
use crate::common::{BoardError, Coord, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::ship::Ship;

/// A straight, contiguous run of cells, in row-then-column order.
pub type Region = Vec<Coord>;

/// Which status a region search tests cells against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Owner view: a cell qualifies while it is [`CellStatus::Empty`]. Used for placement.
    Private,
    /// Opponent view: a cell qualifies while it is [`PublicStatus::Unknown`]. Used for targeting.
    Public,
}

/// One side's board. Owns every cell; ships refer to cells by coordinate.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty `BOARD_SIZE`×`BOARD_SIZE` board with every cell preallocated.
    pub fn new() -> Self {
        let size = BOARD_SIZE;
        let mut cells = Vec::with_capacity(size * size);
        for row in 1..=size {
            for col in 1..=size {
                cells.push(Cell::new(row, col));
            }
        }
        Self {
            size,
            cells,
            ships: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row == 0 || col == 0 || row > self.size || col > self.size {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok((row - 1) * self.size + (col - 1))
    }

    /// Cell at 1-based (`row`, `col`).
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, BoardError> {
        let idx = self.index(row, col)?;
        Ok(&self.cells[idx])
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, BoardError> {
        let idx = self.index(row, col)?;
        Ok(&mut self.cells[idx])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Placed ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    fn eligible(&self, coord: Coord, view: View) -> bool {
        self.cell(coord.row, coord.col).is_ok_and(|cell| match view {
            View::Private => cell.status() == CellStatus::Empty,
            View::Public => cell.public_status() == PublicStatus::Unknown,
        })
    }

    /// Every straight run of `decks` cells whose cells all pass the `view` test.
    ///
    /// Horizontal runs come first in row-major order, then vertical runs in
    /// column-major order (single-deck searches skip the vertical pass, which
    /// would only repeat the same cells). A cell may appear in many regions.
    /// An empty result means nothing fits; callers decide how to recover.
    pub fn available_regions(&self, decks: usize, view: View) -> Vec<Region> {
        let mut regions = Vec::new();
        if decks == 0 || decks > self.size {
            return regions;
        }
        let starts = self.size - decks + 1;
        for row in 1..=self.size {
            for start in 1..=starts {
                let region: Region = (start..start + decks)
                    .map(|col| Coord::new(row, col))
                    .collect();
                if region.iter().all(|&c| self.eligible(c, view)) {
                    regions.push(region);
                }
            }
        }
        if decks > 1 {
            for col in 1..=self.size {
                for start in 1..=starts {
                    let region: Region = (start..start + decks)
                        .map(|row| Coord::new(row, col))
                        .collect();
                    if region.iter().all(|&c| self.eligible(c, view)) {
                        regions.push(region);
                    }
                }
            }
        }
        trace!("{} {:?} regions of length {}", regions.len(), view, decks);
        regions
    }

    /// Returns `true` if a deck of a placed ship sits at (`row`, `col`).
    pub fn occupies_cell(&self, row: usize, col: usize) -> bool {
        self.ships.iter().any(|s| s.contains(row, col))
    }

    /// Mark every cell of `region` occupied and return the ship built from it.
    ///
    /// The ship is not yet part of the fleet; follow up with [`Board::mark_border`]
    /// and [`Board::place_ship`].
    pub fn occupy(&mut self, region: &[Coord]) -> Result<Ship, BoardError> {
        for &deck in region {
            self.cell_mut(deck.row, deck.col)?
                .set_status(CellStatus::Occupied);
        }
        Ok(Ship::from_region(region))
    }

    /// Add a fully decked ship to the fleet. Deck cells must already be occupied.
    pub fn place_ship(&mut self, ship: Ship) {
        debug!("placed {:?}", ship);
        self.ships.push(ship);
    }

    /// Turn every empty cell around `ship` into a border cell.
    ///
    /// Neighbour coordinates are clamped to the grid rather than skipped, so an
    /// edge deck revisits its own row or column. Revisits are no-ops.
    pub fn mark_border(&mut self, ship: &Ship) {
        let clamp = |v: usize, delta: isize| -> usize {
            let shifted = v as isize + delta;
            shifted.clamp(1, self.size as isize) as usize
        };
        let mut neighbours = Vec::with_capacity(ship.len() * 9);
        for deck in ship.decks() {
            for dr in -1..=1 {
                for dc in -1..=1 {
                    neighbours.push((clamp(deck.row, dr), clamp(deck.col, dc)));
                }
            }
        }
        for (row, col) in neighbours {
            if let Ok(cell) = self.cell_mut(row, col) {
                if cell.status() == CellStatus::Empty {
                    cell.set_status(CellStatus::Border);
                }
            }
        }
    }

    /// Reset every border cell back to empty.
    pub fn clear_borders(&mut self) {
        for cell in &mut self.cells {
            if cell.status() == CellStatus::Border {
                cell.set_status(CellStatus::Empty);
            }
        }
    }

    /// Fire at (`row`, `col`).
    ///
    /// A cell can only be targeted once; a repeat returns
    /// [`BoardError::AlreadyTargeted`] without touching any state. Both the
    /// public status and the owner's status record the outcome.
    pub fn resolve_shot(&mut self, row: usize, col: usize) -> Result<ShotOutcome, BoardError> {
        let idx = self.index(row, col)?;
        if self.cells[idx].public_status() != PublicStatus::Unknown {
            return Err(BoardError::AlreadyTargeted { row, col });
        }
        let struck = self.ships.iter().position(|s| s.contains(row, col));
        let cell = &mut self.cells[idx];
        let outcome = match struck {
            Some(i) => {
                cell.set_public_status(PublicStatus::Hit);
                cell.set_status(CellStatus::Hit);
                if self.ships[i].is_sunk(self) {
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                }
            }
            None => {
                cell.set_public_status(PublicStatus::Miss);
                cell.set_status(CellStatus::Miss);
                ShotOutcome::Miss
            }
        };
        debug!("shot at ({}, {}): {:?}", row, col, outcome);
        Ok(outcome)
    }

    /// Decks not yet hit, across the whole fleet.
    pub fn alive_deck_count(&self) -> usize {
        self.ships
            .iter()
            .flat_map(|s| s.decks())
            .filter(|d| self.eligible(**d, View::Public))
            .count()
    }

    /// Ships with at least one deck not yet hit.
    pub fn alive_ship_count(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk(self)).count()
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk(self))
    }
}
