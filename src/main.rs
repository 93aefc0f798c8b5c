#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging, AiPlayer, ConsoleReporter, Game, GameConfig, HumanPlayer, StdinSource,
    DEFAULT_BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer (default).
    Play {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, help = "Board side length")]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the computer play against itself.
    Watch {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, help = "Board side length")]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn greet() {
    println!("-------------------------");
    println!("      Sea battle         ");
    println!("-------------------------");
    println!(" input format: row col   ");
    println!(" both numbers start at 1 ");
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play {
        size: DEFAULT_BOARD_SIZE,
        seed: None,
    });

    match command {
        Commands::Play { size, seed } => {
            greet();
            let mut rng = make_rng(seed);
            let mut game = Game::new(
                GameConfig::with_size(size),
                Box::new(HumanPlayer::new(StdinSource::new())),
                Box::new(AiPlayer::new()),
            );
            game.setup(&mut rng)?;
            let mut reporter = ConsoleReporter::new("You", "Computer");
            match game.run(&mut rng, &mut reporter) {
                Ok(_) => {}
                Err(seabattle::GameError::Player(seabattle::PlayerError::InputClosed)) => {
                    println!("\nInput closed, leaving the game.");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Watch { size, seed } => {
            let mut rng = make_rng(seed);
            let mut game = Game::new(
                GameConfig::with_size(size),
                Box::new(AiPlayer::with_label("Computer 1")),
                Box::new(AiPlayer::with_label("Computer 2")),
            );
            game.setup(&mut rng)?;
            let mut reporter = ConsoleReporter::new("Computer 1", "Computer 2");
            game.run(&mut rng, &mut reporter)?;
        }
    }
    Ok(())
}
