use broadside::prelude::*;
use broadside::{column_letter, init_logging};
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde_json::json;

/// Fire at every cell in a shuffled order until the fleet is sunk and print
/// a JSON summary of the game.
fn main() -> anyhow::Result<()> {
    init_logging(log::LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let config = GameConfig::from_env();
    let mut session = GameSession::with_seed(config, seed)?;
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));

    let bounds = session.board().bounds();
    let mut targets: Vec<String> = (0..bounds.rows())
        .flat_map(|r| (0..bounds.cols()).map(move |c| format!("{}{}", column_letter(c), r + 1)))
        .collect();
    targets.shuffle(&mut rng);

    let (mut shots, mut hits, mut sunk) = (0usize, 0usize, Vec::new());
    for target in &targets {
        let shot = session.fire(target)?;
        shots += 1;
        match shot.result {
            ShotResult::Miss => {}
            ShotResult::Hit => hits += 1,
            ShotResult::Sink(name) => {
                hits += 1;
                sunk.push(name);
            }
            ShotResult::Win(name) => {
                hits += 1;
                sunk.push(name);
                break;
            }
        }
    }

    let result = json!({
        "rows": bounds.rows(),
        "cols": bounds.cols(),
        "shots": shots,
        "hits": hits,
        "misses": shots - hits,
        "sunk_order": sunk,
        "won": session.is_game_over(),
        "messages": session.feedback().len(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
