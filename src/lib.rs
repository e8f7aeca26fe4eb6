//! Sea battle on a 6×6 board: fleet placement, shot resolution and the
//! turn-driving match between a human and an automated opponent.

mod board;
mod cell;
mod common;
mod config;
mod game;
pub mod input;
mod logging;
pub mod player;
mod ship;
pub mod ui;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use input::{InputError, InputSource, LineInput, Request, ScriptedInput, StdinInput};
pub use logging::init_logging;
pub use player::{place_fleet, AiPlayer, CliPlayer, PlacementAgent, Player, TargetingAgent};
pub use ship::*;
pub use ui::{ConsoleView, NullView};
