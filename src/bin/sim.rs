use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{GameEngine, Marker, NoRender, Outcome, Player};

fn main() -> anyhow::Result<()> {
    tictactoe::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut p1 = Player::ai(Marker::X, SmallRng::seed_from_u64(seed1));
    let mut p2 = Player::ai(Marker::O, SmallRng::seed_from_u64(seed2));
    p1.set_name("player1");
    p2.set_name("player2");

    let mut engine = GameEngine::new(p1, p2)?;
    let outcome = engine.play(&mut NoRender)?;

    let winner = outcome.winner().map(|i| engine.players()[i].name().to_string());
    let outcome_str = match outcome {
        Outcome::Won(_) => "won",
        Outcome::Draw => "draw",
        Outcome::InProgress => "in_progress",
    };

    let result = json!({
        "outcome": outcome_str,
        "winner": winner,
        "moves": engine.move_count(),
        "state": engine.state(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
