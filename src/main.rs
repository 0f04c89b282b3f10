//! Color Tiles: a tile-clearing puzzle.
//!
//! ## Usage
//!
//! - `color-tiles` - Play a demo game with hints
//! - `color-tiles play` - Start the text protocol on stdin/stdout
//! - `color-tiles demo` - Play a demo game with hints
//!
//! Set `RUST_LOG` (or pass `--verbose`) to see engine events on stderr.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use color_tiles::constants::{DEFAULT_HEIGHT, DEFAULT_NUM_COLORS, DEFAULT_WIDTH};
use color_tiles::game::{ClearResult, Game};
use color_tiles::protocol::{render, Session};

/// Color Tiles: clear matching tiles by clicking the gaps between them
#[derive(Parser)]
#[command(name = "color-tiles")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of rows
    #[arg(long, global = true, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Number of columns
    #[arg(long, global = true, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Number of tile colors
    #[arg(long, global = true, default_value_t = DEFAULT_NUM_COLORS)]
    colors: usize,

    /// Seed for grid generation
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log engine events at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the text protocol for use with a front end
    Play,
    /// Play a game by always taking the first hint
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let game = Game::with_rng(cli.height, cli.width, cli.colors, rng)
        .context("failed to start a new game")?;

    match cli.command {
        Some(Commands::Play) => {
            let mut session = Session::new(game);
            session
                .run(io::stdin().lock(), io::stdout().lock())
                .context("protocol I/O failed")?;
        }
        Some(Commands::Demo) | None => run_demo(game)?,
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_demo(mut game: Game) -> Result<()> {
    println!("Color Tiles\n");
    println!("{}\n", render(&game));

    let mut moves = 0;
    while let Some(&pt) = game.hints().first() {
        match game.select(pt)? {
            ClearResult::Cleared(points) => {
                moves += 1;
                println!("move {moves}: select {pt} clears {points:?}");
            }
            ClearResult::NoMove => break,
        }
    }

    println!("\n{}\n", render(&game));
    if game.is_cleared() {
        println!("Board cleared in {moves} moves.");
        return Ok(());
    }

    println!("No moves left. Tiles per color: {:?}", game.color_counts());
    let undone = game.undo_until_all_even();
    println!(
        "Rewound {undone} moves to an all-even position: {:?}",
        game.color_counts()
    );
    Ok(())
}
