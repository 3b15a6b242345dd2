#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{init_logging, CellMark, GameConfig, GameSession, GameView};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct BoardArgs {
    #[arg(long, help = "Row count (8 to 99; defaults to BROADSIDE_ROWS)")]
    rows: Option<usize>,
    #[arg(long, help = "Column count (8 to 26; defaults to BROADSIDE_COLS)")]
    cols: Option<usize>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play interactively, reading coordinates from stdin.
    Play {
        #[command(flatten)]
        board: BoardArgs,
    },
    /// Fire a fixed list of coordinates and print the outcome.
    Fire {
        #[command(flatten)]
        board: BoardArgs,
        /// Coordinates such as A1 or h8, fired in order.
        coords: Vec<String>,
        #[arg(long, help = "Print the final game view as JSON")]
        json: bool,
    },
}

#[cfg(feature = "std")]
impl BoardArgs {
    fn config(&self) -> GameConfig {
        let env = GameConfig::from_env();
        let rows = self.rows.unwrap_or(env.bounds.rows());
        let cols = self.cols.unwrap_or(env.bounds.cols());
        GameConfig::new(rows, cols)
    }

    fn session(&self) -> anyhow::Result<GameSession> {
        let config = self.config();
        let session = match self.seed {
            Some(seed) => GameSession::with_seed(config, seed)?,
            None => GameSession::new(config)?,
        };
        Ok(session)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging(log::LevelFilter::Warn);
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { board } => {
            let mut session = board.session()?;
            if let Some(s) = board.seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            play(&mut session)?;
        }
        Commands::Fire { board, coords, json } => {
            let mut session = board.session()?;
            if json {
                for coord in &coords {
                    let _ = session.fire(coord);
                }
                println!("{}", serde_json::to_string_pretty(&session.view())?);
            } else {
                let mut seen = 0;
                print_new_feedback(&session, &mut seen);
                for coord in &coords {
                    let _ = session.fire(coord);
                    print_new_feedback(&session, &mut seen);
                }
                print_grid(&session.view());
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn play(session: &mut GameSession) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut seen = 0;
    print_new_feedback(session, &mut seen);
    loop {
        print_grid(&session.view());
        print!("Fire at (or 'new', 'quit'): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") {
            return Ok(());
        }
        if line.eq_ignore_ascii_case("new") {
            session.initialize()?;
            seen = 0;
        } else {
            session.clear_last_shot();
            let _ = session.fire(line);
        }
        print_new_feedback(session, &mut seen);
    }
}

/// Print messages added since `seen`, oldest first.
#[cfg(feature = "std")]
fn print_new_feedback(session: &GameSession, seen: &mut usize) {
    let log = session.feedback();
    let fresh: Vec<_> = log.iter().take(log.len().saturating_sub(*seen)).collect();
    for msg in fresh.iter().rev() {
        println!("  {}", msg.text);
    }
    *seen = log.len();
}

#[cfg(feature = "std")]
fn print_grid(view: &GameView) {
    print!("\n    ");
    for c in 0..view.bounds.cols() {
        print!(" {}", broadside::column_letter(c));
    }
    println!();
    for (r, row) in view.cells.iter().enumerate() {
        print!("  {:2}", r + 1);
        for (c, mark) in row.iter().enumerate() {
            let last = view
                .last_shot
                .is_some_and(|s| s.at.row == r && s.at.col == c);
            let ch = match mark {
                CellMark::Unknown => '.',
                CellMark::Miss => 'o',
                CellMark::Hit => 'X',
                CellMark::Sunk => '#',
            };
            if last {
                print!("[{}", ch);
            } else {
                print!(" {}", ch);
            }
        }
        println!();
    }
    let afloat = view.ships.iter().filter(|s| !s.sunk).count();
    println!("    Legend: X=Hit  #=Sunk  o=Miss  .=Unknown   Ships afloat: {}", afloat);
}
