//! Rendering of transform results for the terminal.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::ValueEnum;
use planet_grid_core::{Direction, EdgeMapping, Face, GridPosition};
use planet_grid_topology::{boundary_edges, entries, net::NetCoord};
use serde::Serialize;

/// Output encoding selected on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// Result of a single command invocation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum Report {
    /// A resolved cell together with its place in the unfolded net.
    Position {
        /// Normalized position.
        position: GridPosition,
        /// Same cell in the unfolded net.
        net: NetCoord,
        /// Face edges the cell touches.
        edges: Vec<Direction>,
    },
    /// The complete adjacency table.
    Table {
        /// Entries in face-major order.
        entries: Vec<TableEntry>,
    },
}

impl Report {
    /// Builds a position report for an already normalized cell.
    pub(crate) fn position(position: GridPosition, net: NetCoord) -> Self {
        Self::Position {
            position,
            net,
            edges: boundary_edges(&position).collect(),
        }
    }

    /// Builds a report describing every adjacency table entry.
    pub(crate) fn table() -> Self {
        Self::Table {
            entries: entries()
                .map(|(face, direction, mapping)| TableEntry {
                    face,
                    direction,
                    mapping,
                })
                .collect(),
        }
    }
}

/// One row of the adjacency table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub(crate) struct TableEntry {
    /// Face being left.
    pub(crate) face: Face,
    /// Edge crossed.
    pub(crate) direction: Direction,
    /// Orientation change applied by the crossing.
    pub(crate) mapping: EdgeMapping,
}

/// Renders `report` in the requested format.
pub(crate) fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("could not serialise report as JSON")
        }
        OutputFormat::Text => Ok(render_text(report)),
    }
}

fn render_text(report: &Report) -> String {
    let mut out = String::new();
    match report {
        Report::Position {
            position,
            net,
            edges,
        } => {
            let _ = write!(out, "{position} net ({}, {})", net.column(), net.row());
            if !edges.is_empty() {
                let labels: Vec<String> = edges.iter().map(ToString::to_string).collect();
                let _ = write!(out, " edges {}", labels.join(","));
            }
        }
        Report::Table { entries } => {
            for entry in entries {
                let mapping = entry.mapping;
                let _ = writeln!(
                    out,
                    "{:<6} {} -> {:<6} swap={} flip_x={} flip_y={}",
                    entry.face,
                    entry.direction,
                    mapping.target_face(),
                    mapping.coordinate_swap(),
                    mapping.flip_x(),
                    mapping.flip_y(),
                );
            }
            let _ = out.pop();
        }
    }
    out
}
