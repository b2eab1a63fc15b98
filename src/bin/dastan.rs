#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
use anyhow::{Context, bail};
#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;
#[cfg(not(target_arch = "wasm32"))]
use dastan::render::{final_result_to_string, state_to_string};
#[cfg(not(target_arch = "wasm32"))]
use dastan::{Dastan, Event, GameSettings, RandomizerKind};
#[cfg(not(target_arch = "wasm32"))]
use std::io::{BufRead, Write};
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;
#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::EnvFilter;

/// Play Dastan in the terminal, two players sharing one keyboard.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug, Clone)]
struct Opts {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Number of board rows
    #[arg(long)]
    rows: Option<i32>,
    /// Number of board columns (at most 9)
    #[arg(long)]
    columns: Option<i32>,
    /// Ordinary pieces per player
    #[arg(long)]
    pieces: Option<i32>,
    /// Seed for the move option offer, for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings(opts: &Opts) -> anyhow::Result<GameSettings> {
    let mut settings = match opts.settings.as_ref() {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => GameSettings::default(),
    };
    if let Some(rows) = opts.rows {
        settings.rows = rows;
    }
    if let Some(columns) = opts.columns {
        settings.columns = columns;
    }
    if let Some(pieces) = opts.pieces {
        settings.pieces_per_player = pieces;
    }
    if let Some(seed) = opts.seed {
        settings.randomizer = RandomizerKind::Seeded { seed };
    }
    Ok(settings)
}

/// Prompts until a line parses as an integer.
#[cfg(not(target_arch = "wasm32"))]
fn read_value(input: &mut impl BufRead, prompt: &str) -> anyhow::Result<i32> {
    let mut line = String::new();
    loop {
        print!("{prompt}");
        std::io::stdout().flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before the game finished");
        }
        if let Ok(value) = line.trim().parse() {
            return Ok(value);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let settings = load_settings(&opts)?;
    let mut game = Dastan::new(&settings).context("starting game")?;
    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    print!("{}", state_to_string(&game.snapshot()));
    let result = loop {
        let value = read_value(&mut input, game.prompt())?;
        match game.submit(value)? {
            Event::OfferTaken { .. } => print!("{}", state_to_string(&game.snapshot())),
            Event::TurnEnded { report, game_over } => {
                if report.legal {
                    println!("New score: {}\n", report.score);
                }
                print!("{}", state_to_string(&game.snapshot()));
                if let Some(result) = game_over {
                    break result;
                }
            }
            _ => {}
        }
    };
    println!("{}", final_result_to_string(&game.snapshot(), &result));
    println!("Goodbye!");
    Ok(())
}
