#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    cli::{prompt_opponent, resolve_identities},
    init_logging, ConsoleRenderer, GameEngine, IdentityStore, Marker, Opponent, Outcome, Player,
    StdinSource,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io;

/// Two-player tic-tac-toe on the console.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Second player's type; asked interactively when omitted.
    #[arg(long, value_enum)]
    opponent: Option<Opponent>,
    #[arg(long, help = "Fix RNG seed for reproducible AI moves (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Skip register/login and play as "Player 1" / "Player 2".
    #[arg(long)]
    guest: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let opponent = match cli.opponent {
        Some(o) => o,
        None => prompt_opponent(&mut stdin.lock(), &mut stdout)?,
    };
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (AI moves will be reproducible)", s);
    }
    let rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let first = Player::human(Marker::X, StdinSource::new());
    let second = match opponent {
        Opponent::Human => Player::human(Marker::O, StdinSource::new()),
        Opponent::Ai => Player::ai(Marker::O, rng),
    };
    let mut players = [first, second];

    if cli.guest {
        for (i, p) in players.iter_mut().enumerate() {
            if !p.is_automated() {
                p.set_name(format!("Player {}", i + 1));
            }
        }
    } else {
        let mut store = IdentityStore::new();
        resolve_identities(&mut players, &mut store, &mut stdin.lock(), &mut stdout)?;
    }

    let [first, second] = players;
    let mut engine = GameEngine::new(first, second)?;
    let outcome = engine.play(&mut ConsoleRenderer::new())?;
    match outcome {
        Outcome::Won(i) => log::info!("{} won in {} moves", engine.players()[i].name(), engine.move_count()),
        _ => log::info!("draw after {} moves", engine.move_count()),
    }
    Ok(())
}
