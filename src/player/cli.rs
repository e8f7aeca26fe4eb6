use log::debug;
use rand::rngs::SmallRng;

use crate::board::{Board, Region, View};
use crate::cell::CellStatus;
use crate::common::{BoardError, Coord, GameError, Shot};
use crate::input::{InputError, InputSource, Request};
use crate::ship::Ship;

use super::{PlacementAgent, TargetingAgent};

/// Interactive player. Every answer comes from an [`InputSource`] and every
/// refusal is reported back to it before asking again.
#[derive(Debug)]
pub struct CliPlayer<I> {
    input: I,
}

impl<I: InputSource> CliPlayer<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn into_input(self) -> I {
        self.input
    }

    /// Ask until an acceptable answer arrives. Only a closed input ends the loop early.
    fn ask<T>(
        &mut self,
        request: Request,
        mut accept: impl FnMut((i64, i64)) -> Result<T, InputError>,
    ) -> Result<T, GameError> {
        loop {
            match self.input.next_coord(request).and_then(&mut accept) {
                Ok(v) => return Ok(v),
                Err(InputError::Closed) => return Err(GameError::InputClosed),
                Err(e) => {
                    debug!("rejected answer to {:?}: {}", request, e);
                    self.input.rejected(&e);
                }
            }
        }
    }
}

fn in_bounds(board: &Board, (row, col): (i64, i64)) -> Result<Coord, InputError> {
    let n = board.size() as i64;
    if row < 1 || col < 1 || row > n || col > n {
        return Err(InputError::OutOfBounds { row, col });
    }
    Ok(Coord::new(row as usize, col as usize))
}

fn check_deck(
    board: &Board,
    ship: &Ship,
    regions: &[Region],
    raw: (i64, i64),
) -> Result<Coord, InputError> {
    let coord = in_bounds(board, raw)?;
    let (row, col) = (coord.row, coord.col);
    if board.occupies_cell(row, col) || ship.contains(row, col) {
        return Err(InputError::CellOccupiedOrBordered { row, col });
    }
    if !regions.iter().any(|r| r.contains(&coord)) {
        let bordered = board
            .cell(row, col)
            .is_ok_and(|cell| cell.status() == CellStatus::Border);
        return Err(if bordered {
            InputError::CellOccupiedOrBordered { row, col }
        } else {
            InputError::NotInRegion { row, col }
        });
    }
    Ok(coord)
}

impl<I: InputSource> PlacementAgent for CliPlayer<I> {
    fn place_ship(
        &mut self,
        _rng: &mut SmallRng,
        board: &mut Board,
        decks: usize,
        on_update: &mut dyn FnMut(&Board),
    ) -> Result<(), GameError> {
        // Narrowed after every accepted deck to the regions still containing it.
        let mut regions = board.available_regions(decks, View::Private);
        if regions.is_empty() {
            return Err(GameError::NoValidPlacement { decks });
        }
        let mut ship = Ship::new();
        while ship.len() < decks {
            let request = Request::Deck {
                decks,
                index: ship.len(),
            };
            let answer = {
                let board: &Board = board;
                let (ship, regions) = (&ship, &regions);
                self.ask(request, |raw| check_deck(board, ship, regions, raw))
            };
            let deck = match answer {
                Ok(deck) => deck,
                Err(e) => {
                    // Abandoned ship: hand its decks back to open water.
                    for d in ship.decks() {
                        board.cell_mut(d.row, d.col)?.set_status(CellStatus::Empty);
                    }
                    return Err(e);
                }
            };
            regions.retain(|r| r.contains(&deck));
            board
                .cell_mut(deck.row, deck.col)?
                .set_status(CellStatus::Occupied);
            ship.add_deck(deck);
            on_update(board);
        }
        board.mark_border(&ship);
        board.place_ship(ship);
        on_update(board);
        Ok(())
    }
}

impl<I: InputSource> TargetingAgent for CliPlayer<I> {
    fn take_shot(&mut self, _rng: &mut SmallRng, board: &mut Board) -> Result<Shot, GameError> {
        loop {
            let target = {
                let board: &Board = board;
                self.ask(Request::Target, |raw| in_bounds(board, raw))?
            };
            match board.resolve_shot(target.row, target.col) {
                Ok(outcome) => return Ok(Shot { target, outcome }),
                Err(BoardError::AlreadyTargeted { row, col }) => {
                    self.input
                        .rejected(&InputError::AlreadyTargeted { row, col });
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
