//! Headless Pong host.
//!
//! Plays a match without a window: a fixed frame clock, a synthetic
//! camera finger steering the left paddle and an automatic serve after each
//! goal. Set `RUST_LOG=game_core=debug` to see every hit.
//!
//! Example:
//!   cargo run --bin pong-headless -- --frames 7200 --dropout 4 --json

mod driver;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use game_core::Config;
use tracing_subscriber::EnvFilter;

use driver::{parse_config, Options, Session};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run a Pong match without a window", long_about = None)]
struct Args {
    /// Seed for serves and the synthetic finger
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// Number of frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,
    /// Frame rate of the simulated clock
    #[arg(long, default_value_t = 60.0)]
    fps: f32,
    /// TOML file overriding the default config
    #[arg(long)]
    config: Option<PathBuf>,
    /// Frames to wait after a goal before serving
    #[arg(long, default_value_t = 60)]
    serve_delay: u32,
    /// Drop every n-th finger reading
    #[arg(long)]
    dropout: Option<u32>,
    /// Let the AI play both paddles
    #[arg(long)]
    ai_vs_ai: bool,
    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path).with_context(|| format!("read config {path:?}"))?;
            parse_config(&raw).with_context(|| format!("load config {path:?}"))?
        }
        None => Config::default(),
    };

    let options = Options {
        seed: args.seed,
        fps: args.fps,
        serve_delay: args.serve_delay,
        dropout: args.dropout,
        ai_vs_ai: args.ai_vs_ai,
    };
    let mut session = Session::new(config, &options)?;

    tracing::info!(
        seed = args.seed,
        frames = args.frames,
        fps = args.fps,
        ai_vs_ai = args.ai_vs_ai,
        "starting match"
    );

    // Progress line every ~5 simulated seconds
    let report_every = ((args.fps * 5.0).round() as u64).max(1);
    for frame in 1..=args.frames {
        session.tick();
        if frame % report_every == 0 {
            let snapshot = session.snapshot();
            tracing::info!(
                frame,
                score = %snapshot.scoreline(),
                paused = snapshot.is_paused(),
                "progress"
            );
        }
    }

    let stats = session.stats();
    let snapshot = session.snapshot();
    tracing::info!(
        frames = stats.frames,
        sim_time = session.game().time().now,
        goals = stats.goals,
        paddle_hits = stats.paddle_hits,
        wall_hits = stats.wall_hits,
        dropped_readings = stats.dropped_readings,
        score = %snapshot.scoreline(),
        "match finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot).context("serialize snapshot")?);
    }

    Ok(())
}
