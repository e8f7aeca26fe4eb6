//! Console display collaborator: board rendering and match narration.

use std::fmt::Write as _;

use crate::board::Board;
use crate::cell::{Cell, CellStatus, PublicStatus};
use crate::common::{Shot, ShotOutcome};
use crate::config::ship_class_name;
use crate::game::{Match, MatchView, Side};

pub const GREETING: &str = "
    Welcome to Sea Battle!
    -----------
    You play against the computer.

    Rules:
    -----------
    First place your ships on the board: one three-decker,
    two two-deckers and three one-deckers.
    Ships must be at least one cell apart, diagonals included.

    You and the computer take turns firing one shot each.
    To fire, enter the cell as: row number - space - column number.

    The first to sink the whole enemy fleet wins.

    Good luck!
";

fn private_symbol(cell: &Cell) -> char {
    match cell.status() {
        CellStatus::Empty => ' ',
        CellStatus::Occupied => '*',
        CellStatus::Hit => 'X',
        CellStatus::Miss => 'T',
        CellStatus::Border => '.',
    }
}

fn public_symbol(cell: &Cell) -> char {
    match cell.public_status() {
        PublicStatus::Unknown => ' ',
        PublicStatus::Hit => 'X',
        PublicStatus::Miss => 'T',
    }
}

fn render(board: &Board, symbol: fn(&Cell) -> char) -> String {
    let size = board.size();
    let rule = format!("  {}", "-".repeat(4 * size + 3));
    let mut out = String::from("\n    |");
    for col in 1..=size {
        let _ = write!(out, " {} |", col);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule);
    let cells: Vec<&Cell> = board.cells().collect();
    for (i, row) in cells.chunks(size).enumerate() {
        let _ = write!(out, "  {} |", i + 1);
        for cell in row {
            let _ = write!(out, " {} |", symbol(cell));
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", rule);
    }
    let _ = writeln!(
        out,
        "  Afloat: {} ships, {} decks",
        board.alive_ship_count(),
        board.alive_deck_count()
    );
    out
}

/// Owner's view: ships, hits, misses and placement borders.
pub fn render_private(board: &Board) -> String {
    render(board, private_symbol)
}

/// Opponent's view: only hits and misses.
pub fn render_public(board: &Board) -> String {
    render(board, public_symbol)
}

/// Prints every update to stdout. Skynet's board is shown through the public
/// view unless `reveal_skynet` is set.
#[derive(Debug, Default)]
pub struct ConsoleView {
    reveal_skynet: bool,
    firing: bool,
}

impl ConsoleView {
    pub fn new(reveal_skynet: bool) -> Self {
        Self {
            reveal_skynet,
            firing: false,
        }
    }

    fn revealed(&self, side: Side) -> bool {
        side == Side::Human || self.reveal_skynet
    }
}

impl MatchView for ConsoleView {
    fn board_updated(&mut self, side: Side, board: &Board) {
        let revealed = self.revealed(side);
        // A hidden fleet has nothing to show until shots start landing.
        if !revealed && !self.firing {
            return;
        }
        println!("{}'s board:", side);
        if revealed {
            print!("{}", render_private(board));
        } else {
            print!("{}", render_public(board));
        }
    }

    fn placement_skipped(&mut self, side: Side, decks: usize) {
        println!(
            "Warning: no room left for {}'s {}, the fleet sails without it.",
            side,
            ship_class_name(decks)
        );
    }

    fn shot_fired(&mut self, attacker: Side, shot: Shot) {
        self.firing = true;
        let verdict = match shot.outcome {
            ShotOutcome::Hit => "hit!",
            ShotOutcome::Sunk => "hit and sunk!",
            ShotOutcome::Miss => "miss.",
        };
        println!("\n{} fires at {}: {}", attacker, shot.target, verdict);
    }

    fn game_over(&mut self, winner: Side, game: &Match) {
        println!("\n==================== GAME OVER ====================");
        for side in [Side::Human, Side::Skynet] {
            println!("{}'s board:", side);
            print!("{}", render_private(game.board(side)));
        }
        println!("\n{} wins after {} shots.", winner, game.shots());
    }
}

/// Ignores every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl MatchView for NullView {}
