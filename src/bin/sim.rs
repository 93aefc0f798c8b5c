use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{AiPlayer, Game, GameConfig, GameStatus, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <board-size>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let size: usize = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new(
        GameConfig::with_size(size),
        Box::new(AiPlayer::with_label("player1")),
        Box::new(AiPlayer::with_label("player2")),
    );
    game.setup(&mut rng)?;
    let winner = game.run(&mut rng, &mut ())?;
    debug_assert_eq!(game.status(), GameStatus::Finished { winner });

    let side_json = |side: Side| {
        let board = game.board(side);
        json!({
            "shots": game.shots_fired(side),
            "ships_lost": board.sunk_count(),
            "ships": board.ship_count(),
        })
    };

    let result = json!({
        "seed": seed,
        "size": size,
        "turns": game.turn(),
        "player1": side_json(Side::First),
        "player2": side_json(Side::Second),
        "winner": game.player(winner).label(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
