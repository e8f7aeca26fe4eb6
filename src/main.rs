use clap::{Parser, Subcommand};
use seabattle::{
    init_logging, ui::GREETING, AiPlayer, CliPlayer, ConsoleView, GameError, Match, StdinInput,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer from this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two computer players fight it out.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (mut game, mut view) = match cli.command {
        Commands::Play { seed } => {
            println!("{}", GREETING);
            let human = CliPlayer::new(StdinInput::new());
            (
                Match::new(Box::new(human), Box::new(AiPlayer::new()), seed),
                ConsoleView::new(false),
            )
        }
        Commands::Watch { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            (
                Match::new(Box::new(AiPlayer::new()), Box::new(AiPlayer::new()), seed),
                ConsoleView::new(true),
            )
        }
    };

    match game.run(&mut view) {
        Ok(_) => Ok(()),
        Err(GameError::InputClosed) => {
            println!("\nInput closed, leaving the game.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
