//! Flick CLI
//!
//! Drive a headless card deck from a script and inspect its curves.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flick_core::{companion_scale, rotation, CardDeck, DeckFrame, Feed, JsonFileProvider};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod script;

use script::Step;

/// Fixed frame rate for replays
const FRAME_RATE: f32 = 60.0;

/// Upper bound on frames for a single `settle` step
const MAX_SETTLE_FRAMES: u32 = 600;

#[derive(Parser)]
#[command(name = "flick")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Swipe deck simulator", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to ./flick.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an input script against a deck loaded from a JSON item list
    Replay {
        /// JSON array of items (`id`, `name`, `rank`, `is_active`)
        items: PathBuf,

        /// Script file; a built-in demo is played when omitted
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Print every frame instead of only the state after each step
        #[arg(long)]
        every_frame: bool,
    },

    /// Print rotation and companion scale over a range of drag offsets
    Curve {
        #[arg(long, default_value = "-400", allow_hyphen_values = true)]
        from: f32,

        #[arg(long, default_value = "400", allow_hyphen_values = true)]
        to: f32,

        #[arg(long, default_value = "50")]
        step: f32,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Replay {
            items,
            script,
            every_frame,
        } => cmd_replay(
            cli.config.as_deref(),
            &items,
            script.as_deref(),
            every_frame,
        ),
        Commands::Curve { from, to, step } => cmd_curve(from, to, step),
        Commands::Config => cmd_config(cli.config.as_deref()),
    }
}

fn cmd_replay(
    config_path: Option<&Path>,
    items: &Path,
    script_path: Option<&Path>,
    every_frame: bool,
) -> Result<()> {
    let config = config::load(config_path)?;

    let source = match script_path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            info!("No script given, playing the built-in demo");
            script::DEMO.to_string()
        }
    };
    let steps = script::parse(&source)?;

    let mut feed = Feed::new(JsonFileProvider::new(items), config.feed.clone());
    let mut deck = CardDeck::new(config);

    let list = feed
        .refresh()
        .with_context(|| format!("Failed to load items from {}", items.display()))?;
    info!("Loaded {} items", list.len());
    deck.replace_items(list);

    let dt = 1.0 / FRAME_RATE;
    let mut frame_no: u64 = 0;
    println!("{}\n", DeckFrame::project(&deck));

    for (n, step) in steps.iter().enumerate() {
        let frames = match *step {
            Step::Input(input) => {
                deck.handle_input(input);
                0
            }
            Step::Frames(count) => count,
            Step::Settle => MAX_SETTLE_FRAMES,
            Step::Refresh => {
                // A failed refresh leaves the current list in place
                match feed.refresh() {
                    Ok(list) => deck.replace_items(list),
                    Err(err) => warn!("Refresh failed: {}", err),
                }
                0
            }
        };

        let settle = matches!(step, Step::Settle);
        for _ in 0..frames {
            let report = deck.tick(dt);
            frame_no += 1;
            if let Some(commit) = report.commit {
                info!(
                    "frame {}: dismissed {} ({:?}), now at #{}",
                    frame_no, commit.direction, commit.source, commit.index
                );
            }
            if every_frame {
                println!("[frame {frame_no}]\n{}", DeckFrame::project(&deck));
            }
            if settle && !report.animating {
                break;
            }
        }

        println!(
            "step {} {:?} ({:?})\n{}\n",
            n + 1,
            step,
            deck.phase(),
            DeckFrame::project(&deck)
        );
    }

    info!(
        "Replay finished at index {} after {} frames",
        deck.current_index(),
        frame_no
    );
    Ok(())
}

fn cmd_curve(from: f32, to: f32, step: f32) -> Result<()> {
    if step <= 0.0 {
        anyhow::bail!("step must be positive, got {}", step);
    }
    if from > to {
        anyhow::bail!("--from ({}) must not exceed --to ({})", from, to);
    }

    println!("{:>9} {:>9} {:>9}", "offset", "rotation", "companion");
    for offset in curve_offsets(from, to, step)? {
        println!(
            "{:>9.1} {:>8.2}° {:>9.3}",
            offset,
            rotation(offset),
            companion_scale(offset)
        );
    }
    Ok(())
}

/// Most rows `curve` will print
const MAX_CURVE_ROWS: u64 = 100_000;

/// Sample points `from`, `from + step`, ... up to `to`
fn curve_offsets(from: f32, to: f32, step: f32) -> Result<impl Iterator<Item = f32>> {
    if !(from.is_finite() && to.is_finite() && step.is_finite()) {
        anyhow::bail!("curve bounds and step must be finite");
    }
    let rows = (f64::from(to - from) / f64::from(step)).floor() as u64 + 1;
    if rows > MAX_CURVE_ROWS {
        anyhow::bail!("{} rows requested, at most {} allowed", rows, MAX_CURVE_ROWS);
    }
    Ok((0..rows).map(move |i| from + i as f32 * step))
}


fn cmd_config(config_path: Option<&Path>) -> Result<()> {
    let config = config::load(config_path)?;
    print!("{}", config::to_toml(&config)?);
    Ok(())
}
