//! # seating: chart driver
//!
//! Applies a JSON seating plan to a fresh board and prints the resulting
//! chart, either as ASCII or as a JSON render plan.
//!
//! ```text
//! seating --plan plan.json --show-coordinates
//! RUST_LOG=seating_engine=debug seating --plan plan.json --format json
//! ```

mod plan;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use plan::Plan;
use seating_engine::PlayerStats;
use seating_render::{RenderOptions, RenderPlan, render_ascii, to_json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Ascii,
    Json,
}

#[derive(Parser)]
#[command(name = "seating", about = "Grid seating chart for a 30x30 game map region")]
struct Args {
    /// Path to a JSON plan file. An empty board is shown if omitted.
    #[arg(short, long)]
    plan: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Ascii)]
    format: Format,

    /// Label items with their in-game coordinates.
    #[arg(long)]
    show_coordinates: bool,

    /// Game X of the grid's left column, overriding the plan.
    #[arg(long)]
    x_min: Option<i32>,

    /// Game Y of the grid's bottom row, overriding the plan.
    #[arg(long)]
    y_min: Option<i32>,
}

#[derive(Serialize)]
struct Output<'a> {
    stats: PlayerStats,
    plan: &'a RenderPlan,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut plan = match &args.plan {
        Some(path) => load_plan(path)?,
        None => Plan::default(),
    };
    plan.config = plan.config.with_game_origin(
        args.x_min.unwrap_or(plan.config.x_min),
        args.y_min.unwrap_or(plan.config.y_min),
    );
    plan.config.validate().context("invalid layout config")?;

    let (board, _) = plan.apply();
    let render = RenderPlan::build(
        board.layout(),
        RenderOptions {
            show_coordinates: args.show_coordinates,
        },
    );
    let stats = board.stats();

    match args.format {
        Format::Ascii => {
            print!("{}", render_ascii(&render));
            println!(
                "\nplayers: {} total, {} unassigned, {} placed",
                stats.total, stats.unassigned, stats.placed
            );
            let waiting: Vec<&str> = board
                .roster()
                .sorted()
                .into_iter()
                .map(|entry| entry.name.as_str())
                .collect();
            if !waiting.is_empty() {
                println!("unassigned: {}", waiting.join(", "));
            }
        }
        Format::Json => {
            let output = Output {
                stats,
                plan: &render,
            };
            println!("{}", to_json(&output)?);
        }
    }

    Ok(())
}

fn load_plan(path: &PathBuf) -> Result<Plan> {
    info!(file = %path.display(), "loading plan");
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading plan file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing plan file {}", path.display()))
}
