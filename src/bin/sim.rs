use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, AiPlayer, Match, NullView};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut game = Match::with_rngs(
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
        SmallRng::seed_from_u64(seed1),
        SmallRng::seed_from_u64(seed2),
    );
    let winner = game.run(&mut NullView)?;
    log::info!("simulation finished, {} won", winner);

    println!("{}", serde_json::to_string(&game.report())?);
    Ok(())
}
