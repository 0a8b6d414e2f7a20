use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use quickhull::prelude::*;
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Batch driver for convex hull runs")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Scatter points, compute one hull, write a JSON report
    Run {
        #[arg(long)]
        points: usize,
        /// Input distribution: "uniform" or "circle" (worst case)
        #[arg(long, default_value = "uniform")]
        scatter: String,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Report file; stdout when omitted
        #[arg(long)]
        out: Option<String>,
    },
    /// Repeat hull runs over one point set and log per-run/average times
    Time {
        #[arg(long)]
        points: usize,
        #[arg(long, default_value = "uniform")]
        scatter: String,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10)]
        runs: usize,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            points,
            scatter,
            seed,
            out,
        } => run(points, &scatter, seed, out.as_deref()),
        Action::Time {
            points,
            scatter,
            seed,
            runs,
        } => time(points, &scatter, seed, runs),
    }
}

fn parse_scatter(name: &str) -> Result<Scatter> {
    match name {
        "uniform" => Ok(Scatter::Uniform),
        "circle" => Ok(Scatter::Circle),
        other => bail!("unknown scatter {other:?} (expected \"uniform\" or \"circle\")"),
    }
}

/// JSON report of one hull run.
#[derive(Serialize)]
struct Report {
    n: usize,
    scatter: String,
    seed: u64,
    elapsed_ms: f64,
    /// Hull vertex ids in boundary-cycle order.
    hull: Vec<usize>,
    /// Positions of the hull vertices, same order as `hull`.
    vertices: Vec<[f64; 2]>,
    /// Boundary edges as id pairs, cycle order.
    edges: Vec<[usize; 2]>,
}

fn run(n: usize, scatter: &str, seed: u64, out: Option<&str>) -> Result<()> {
    let kind = parse_scatter(scatter)?;
    let mut points = kind.points(n, ReplayToken { seed, index: 0 });

    let start = Instant::now();
    let edges = compute_hull(&mut points, HullCfg::default())?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    let boundary: Vec<&HullEdge> = edges
        .iter()
        .filter(|e| e.kind == EdgeKind::Boundary)
        .collect();
    let hull: Vec<usize> = boundary.iter().map(|e| e.a.0).collect();
    let report = Report {
        n,
        scatter: scatter.to_string(),
        seed,
        elapsed_ms,
        vertices: hull
            .iter()
            .map(|&i| [points[i].pos.x, points[i].pos.y])
            .collect(),
        edges: boundary.iter().map(|e| [e.a.0, e.b.0]).collect(),
        hull,
    };
    tracing::info!(
        n,
        scatter,
        hull = report.hull.len(),
        edges = report.edges.len(),
        elapsed_ms,
        "run"
    );

    let json = serde_json::to_string_pretty(&report)?;
    match out {
        Some(path) => {
            let path = Path::new(path);
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, json)?;
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn time(n: usize, scatter: &str, seed: u64, runs: usize) -> Result<()> {
    let kind = parse_scatter(scatter)?;
    let mut points = kind.points(n, ReplayToken { seed, index: 0 });

    let mut times_ms = Vec::with_capacity(runs.max(1));
    for run in 0..runs.max(1) {
        // Per the computation's contract: flags cleared, edges discarded.
        reset_hull_flags(&mut points);
        let start = Instant::now();
        let edges = compute_hull(&mut points, HullCfg::default())?;
        let ms = start.elapsed().as_secs_f64() * 1e3;
        tracing::info!(run, n, ms, hull_edges = edges.len(), "timed run");
        times_ms.push(ms);
    }
    let avg = times_ms.iter().sum::<f64>() / times_ms.len() as f64;
    tracing::info!(n, runs = times_ms.len(), avg_ms = avg, "average");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_writes_a_parseable_report() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.json");
        run(8, "circle", 0, Some(out.to_str().unwrap())).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        // Every circle point is a hull vertex.
        assert_eq!(doc["n"], 8);
        assert_eq!(doc["hull"].as_array().unwrap().len(), 8);
        assert_eq!(doc["edges"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn unknown_scatter_is_rejected() {
        assert!(parse_scatter("spiral").is_err());
        assert!(parse_scatter("uniform").is_ok());
    }
}
