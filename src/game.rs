//! Turn-driving state machine for one match.

use core::fmt;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::board::Board;
use crate::common::{GameError, Shot};
use crate::player::{place_fleet, Player};

/// One of the two sides. The human side always places first and shoots first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Human,
    Skynet,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Skynet,
            Side::Skynet => Side::Human,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Skynet => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "Human"),
            Side::Skynet => write!(f, "Skynet"),
        }
    }
}

/// Where the match currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The given side still has to place its fleet.
    Placing(Side),
    /// `attacker` fires next at the other side's board.
    Turn { attacker: Side },
    /// Terminal; boards are no longer mutated.
    GameOver { winner: Side },
}

/// Display collaborator. The match calls it after every placement step and every shot.
pub trait MatchView {
    fn board_updated(&mut self, _side: Side, _board: &Board) {}

    /// A ship of `decks` decks found no room and was left out of `side`'s fleet.
    fn placement_skipped(&mut self, _side: Side, _decks: usize) {}

    fn shot_fired(&mut self, _attacker: Side, _shot: Shot) {}

    fn game_over(&mut self, _winner: Side, _game: &Match) {}
}

/// RNG for one side: `seed` offset by `stream`, or fresh entropy when unseeded.
pub fn side_rng(seed: Option<u64>, stream: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(stream)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

/// Summary of a finished (or abandoned) match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub winner: Option<Side>,
    pub shots: usize,
    pub human_alive_decks: usize,
    pub skynet_alive_decks: usize,
    pub human_skipped: Vec<usize>,
    pub skynet_skipped: Vec<usize>,
}

/// A single match between two players, each with its own board and RNG.
pub struct Match {
    boards: [Board; 2],
    players: [Box<dyn Player>; 2],
    rngs: [SmallRng; 2],
    skipped: [Vec<usize>; 2],
    history: Vec<(Side, Shot)>,
    phase: Phase,
}

impl Match {
    /// Start a match. With `seed` set every random choice is reproducible;
    /// the human side draws from `seed` and Skynet from `seed + 1`.
    pub fn new(human: Box<dyn Player>, skynet: Box<dyn Player>, seed: Option<u64>) -> Self {
        Self::with_rngs(human, skynet, side_rng(seed, 0), side_rng(seed, 1))
    }

    /// Start a match with explicit per-side RNGs.
    pub fn with_rngs(
        human: Box<dyn Player>,
        skynet: Box<dyn Player>,
        human_rng: SmallRng,
        skynet_rng: SmallRng,
    ) -> Self {
        Self {
            boards: [Board::new(), Board::new()],
            players: [human, skynet],
            rngs: [human_rng, skynet_rng],
            skipped: [Vec::new(), Vec::new()],
            history: Vec::new(),
            phase: Phase::Placing(Side::Human),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Deck counts of ships `side` could not place.
    pub fn skipped(&self, side: Side) -> &[usize] {
        &self.skipped[side.index()]
    }

    /// Every accepted shot so far, with the side that fired it.
    pub fn history(&self) -> &[(Side, Shot)] {
        &self.history
    }

    pub fn shots(&self) -> usize {
        self.history.len()
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Perform one transition and return the phase entered.
    ///
    /// Placing phases run a side's whole fleet placement; a turn fires exactly
    /// one shot and always hands over to the other side unless it ended the
    /// game. Stepping a finished match changes nothing. A failed placement
    /// leaves the side's board empty and the phase unchanged, so stepping again
    /// retries it from scratch.
    pub fn step(&mut self, view: &mut dyn MatchView) -> Result<Phase, GameError> {
        match self.phase {
            Phase::Placing(side) => {
                let i = side.index();
                let placed = place_fleet(
                    &mut *self.players[i],
                    &mut self.rngs[i],
                    &mut self.boards[i],
                    &mut |board: &Board| view.board_updated(side, board),
                );
                let skipped = match placed {
                    Ok(skipped) => skipped,
                    Err(e) => {
                        // A half-placed fleet is discarded so the side can start over.
                        self.boards[i] = Board::new();
                        return Err(e);
                    }
                };
                for &decks in &skipped {
                    view.placement_skipped(side, decks);
                }
                self.skipped[i] = skipped;
                self.phase = match side {
                    Side::Human => Phase::Placing(Side::Skynet),
                    Side::Skynet => Phase::Turn {
                        attacker: Side::Human,
                    },
                };
            }
            Phase::Turn { attacker } => {
                let defender = attacker.opponent();
                let board = &mut self.boards[defender.index()];
                let shot = self.players[attacker.index()]
                    .take_shot(&mut self.rngs[attacker.index()], board)?;
                debug!("{} fired at {}: {:?}", attacker, shot.target, shot.outcome);
                self.history.push((attacker, shot));
                view.shot_fired(attacker, shot);
                view.board_updated(defender, board);
                if board.all_ships_sunk() {
                    info!("{} wins after {} shots", attacker, self.history.len());
                    self.phase = Phase::GameOver { winner: attacker };
                    view.game_over(attacker, self);
                } else {
                    self.phase = Phase::Turn { attacker: defender };
                }
            }
            Phase::GameOver { .. } => {}
        }
        Ok(self.phase)
    }

    /// Step until the match is over and return the winner.
    pub fn run(&mut self, view: &mut dyn MatchView) -> Result<Side, GameError> {
        loop {
            if let Phase::GameOver { winner } = self.step(view)? {
                return Ok(winner);
            }
        }
    }

    pub fn report(&self) -> MatchReport {
        MatchReport {
            winner: self.winner(),
            shots: self.shots(),
            human_alive_decks: self.board(Side::Human).alive_deck_count(),
            skynet_alive_decks: self.board(Side::Skynet).alive_deck_count(),
            human_skipped: self.skipped(Side::Human).to_vec(),
            skynet_skipped: self.skipped(Side::Skynet).to_vec(),
        }
    }
}

impl fmt::Debug for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("phase", &self.phase)
            .field("shots", &self.history.len())
            .field("boards", &self.boards)
            .finish()
    }
}
