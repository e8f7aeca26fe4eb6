use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::{Board, Region, View};
use crate::common::{BoardError, GameError, Shot};

use super::{PlacementAgent, TargetingAgent};

/// Automated opponent: samples uniformly from valid regions and untargeted cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

fn pick<'a>(rng: &mut SmallRng, regions: &'a [Region]) -> Option<&'a Region> {
    if regions.is_empty() {
        return None;
    }
    Some(&regions[rng.random_range(0..regions.len())])
}

impl PlacementAgent for AiPlayer {
    fn place_ship(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        decks: usize,
        on_update: &mut dyn FnMut(&Board),
    ) -> Result<(), GameError> {
        let regions = board.available_regions(decks, View::Private);
        let region = pick(rng, &regions).ok_or(GameError::NoValidPlacement { decks })?;
        debug!("ai picked {:?} from {} regions", region, regions.len());
        let ship = board.occupy(region)?;
        board.mark_border(&ship);
        board.place_ship(ship);
        on_update(board);
        Ok(())
    }
}

impl TargetingAgent for AiPlayer {
    fn take_shot(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<Shot, GameError> {
        let candidates = board.available_regions(1, View::Public);
        let target = pick(rng, &candidates)
            .and_then(|region| region.first().copied())
            .ok_or(GameError::Invariant("no untargeted cell left to shoot at"))?;
        match board.resolve_shot(target.row, target.col) {
            Ok(outcome) => Ok(Shot { target, outcome }),
            Err(BoardError::AlreadyTargeted { .. }) => Err(GameError::Invariant(
                "sampled an already targeted cell",
            )),
            Err(e) => Err(e.into()),
        }
    }
}
