#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that exposes the planet grid transform.

mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use planet_grid_core::{Face, Felt, GridPosition};
use planet_grid_system_normalizer::{Config, Normalizer, MAX_CROSSINGS};
use planet_grid_topology::net::{self, NetCoord};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::report::{OutputFormat, Report};

/// Resolve cube-mapped planet coordinates onto their owning face.
#[derive(Debug, Parser)]
#[command(name = "planet-grid", version)]
struct Cli {
    /// Output encoding.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,
    /// Maximum number of face edges a single request may cross.
    #[arg(long, default_value_t = MAX_CROSSINGS, global = true)]
    max_crossings: usize,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Normalize integer coordinates expressed on a face.
    Normalize {
        /// Face name (`top`, `west`, ...) or numeric identifier.
        #[arg(long)]
        face: Face,
        /// Local column, possibly outside the face.
        #[arg(long, allow_hyphen_values = true)]
        x: i64,
        /// Local row, possibly outside the face.
        #[arg(long, allow_hyphen_values = true)]
        y: i64,
    },
    /// Normalize coordinates given as prime-field residues.
    NormalizeFelt {
        /// Face name (`top`, `west`, ...) or numeric identifier.
        #[arg(long)]
        face: Face,
        /// Column residue, decimal or `0x` hexadecimal.
        #[arg(long, allow_hyphen_values = true)]
        x: Felt,
        /// Row residue, decimal or `0x` hexadecimal.
        #[arg(long, allow_hyphen_values = true)]
        y: Felt,
    },
    /// Resolve a cell of the unfolded cross net onto its face.
    Locate {
        /// Net column in `[0, 4N)`.
        #[arg(long)]
        column: u32,
        /// Net row in `[0, 3N)`.
        #[arg(long)]
        row: u32,
    },
    /// Print the face adjacency table.
    Table,
}

/// Entry point for the planet grid command-line interface.
fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let normalizer = Normalizer::new(Config::new(cli.max_crossings));
    let report = run(&normalizer, cli.command)?;
    println!("{}", report::render(&report, cli.format)?);
    Ok(())
}

fn run(normalizer: &Normalizer, command: Command) -> Result<Report> {
    match command {
        Command::Normalize { face, x, y } => {
            let position = normalizer
                .normalize(i64::from(face.id()), x, y)
                .with_context(|| format!("could not normalize ({face}, {x}, {y})"))?;
            position_report(position)
        }
        Command::NormalizeFelt { face, x, y } => {
            let position = normalizer
                .normalize_felt(i64::from(face.id()), &x, &y)
                .with_context(|| {
                    format!("could not normalize field residues ({face}, {x}, {y})")
                })?;
            position_report(position)
        }
        Command::Locate { column, row } => {
            let position = net::locate(NetCoord::new(column, row))
                .with_context(|| format!("could not locate net cell ({column}, {row})"))?;
            position_report(position)
        }
        Command::Table => Ok(Report::table()),
    }
}

fn position_report(position: GridPosition) -> Result<Report> {
    let net = net::to_net(&position).context("normalized position left the net")?;
    info!(%position, column = net.column(), row = net.row(), "position_resolved");
    Ok(Report::position(position, net))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
