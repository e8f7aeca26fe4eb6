//! Placement and targeting agents
//!
//! Both sides of a match are driven by agents that only touch the board
//! through its public query surface:
//! - AiPlayer: uniform random placement and uniform random targeting
//! - CliPlayer: interactive player backed by an [`InputSource`](crate::InputSource)

use log::{info, warn};
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{GameError, Shot};
use crate::config::FLEET;

/// Places one ship at a time onto a board.
pub trait PlacementAgent {
    /// Place a ship with `decks` decks on `board`, occupied and bordered.
    ///
    /// `on_update` is called whenever the board changes so a display can follow
    /// along. Fails with [`GameError::NoValidPlacement`] when nothing fits.
    fn place_ship(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        decks: usize,
        on_update: &mut dyn FnMut(&Board),
    ) -> Result<(), GameError>;
}

/// Picks and fires one shot per turn at the opponent's board.
pub trait TargetingAgent {
    /// Fire exactly one accepted shot at `board`.
    fn take_shot(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<Shot, GameError>;
}

/// A full participant: places a fleet and fires shots.
pub trait Player: PlacementAgent + TargetingAgent {}

impl<T: PlacementAgent + TargetingAgent> Player for T {}

/// Place the whole [`FLEET`] in order and clear placement borders afterwards.
///
/// A ship that cannot be placed is skipped and its deck count is returned in
/// the list; the fleet simply ends up smaller. Any other error aborts.
pub fn place_fleet<P: PlacementAgent + ?Sized>(
    agent: &mut P,
    rng: &mut SmallRng,
    board: &mut Board,
    on_update: &mut dyn FnMut(&Board),
) -> Result<Vec<usize>, GameError> {
    let mut skipped = Vec::new();
    for &decks in FLEET.iter() {
        match agent.place_ship(rng, board, decks, on_update) {
            Ok(()) => {}
            Err(GameError::NoValidPlacement { decks }) => {
                warn!("no room left for a {}-deck ship, continuing without it", decks);
                skipped.push(decks);
            }
            Err(e) => return Err(e),
        }
    }
    board.clear_borders();
    info!(
        "fleet placed: {} ships, {} decks",
        board.ships().len(),
        board.alive_deck_count()
    );
    on_update(board);
    Ok(skipped)
}

pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::CliPlayer;
