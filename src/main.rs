//! Command-line driver: builds a rover, runs one command batch and prints its
//! status before and after.

use anyhow::Context;
use clap::Parser;
use glam::IVec2;
use mars_rover::{BatchPolicy, Orientation, Rover, RoverConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mars-rover", about = "Drive a rover over a wraparound grid")]
struct Args {
    /// Starting column.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    x: i32,

    /// Starting row.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    y: i32,

    /// Starting orientation (N, E, S, W or the full name).
    #[arg(long, default_value = "N")]
    facing: Orientation,

    #[arg(long, default_value_t = 10)]
    width: u32,

    #[arg(long, default_value_t = 10)]
    height: u32,

    /// Obstacle cell as `X,Y`. May be repeated.
    #[arg(long = "obstacle", value_parser = parse_coord)]
    obstacles: Vec<IVec2>,

    /// Skip unrecognized commands instead of stopping at them.
    #[arg(long)]
    skip_unrecognized: bool,

    /// Commands to run, e.g. `f f r b`.
    #[arg(default_values = ["f", "f", "f", "b", "f"])]
    commands: Vec<String>,
}

fn parse_coord(s: &str) -> Result<IVec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|e| format!("bad coordinate {v:?}: {e}"))
    };
    Ok(IVec2::new(parse(x)?, parse(y)?))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = RoverConfig {
        width: args.width,
        height: args.height,
        obstacles: args.obstacles,
        policy: if args.skip_unrecognized {
            BatchPolicy::SkipUnrecognized
        } else {
            BatchPolicy::StopOnFirstFailure
        },
    };

    let mut rover = Rover::from_config(IVec2::new(args.x, args.y), args.facing, &config)
        .context("invalid grid configuration")?;

    println!("Current rover status: {rover}");
    let result = rover.process_commands_with(&args.commands, config.policy);
    println!("Rover status after commands: {rover}");

    let summary = result.context("command batch failed")?;
    info!(
        applied = summary.applied,
        skipped = summary.skipped.len(),
        "batch complete"
    );
    Ok(())
}
