use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use duohull::prelude::*;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "duohull")]
#[command(about = "Graham scan vs. brute-force convex hulls, with operation counts")]
struct Cmd {
    /// Collinearity tolerance: largest sine of a turn still counted as straight
    #[arg(long, global = true, default_value_t = duohull::geom::ORIENT_EPS)]
    eps: f64,

    /// Count only orientation tests (no analytic sort estimate in the scan counter)
    #[arg(long, global = true)]
    pure_count: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute both hulls for points read from a CSV with `x,y` columns
    Hull {
        #[arg(long)]
        input: PathBuf,
        /// Optional JSON report path; a provenance sidecar is written next to it
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Compute both hulls for a seeded random cloud
    Random {
        #[arg(long, default_value_t = 32)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = Shape::Square)]
        shape: Shape,
        #[arg(long, default_value_t = 100.0)]
        radius: f64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run both algorithms over growing clouds and tabulate the counters
    Sweep {
        #[arg(long, value_delimiter = ',', default_values_t = [8usize, 16, 32, 64])]
        sizes: Vec<usize>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = Shape::Square)]
        shape: Shape,
        /// Optional table path (.csv or .parquet)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Square,
    Disk,
    Ring,
}

impl From<Shape> for CloudShape {
    fn from(s: Shape) -> Self {
        match s {
            Shape::Square => CloudShape::Square,
            Shape::Disk => CloudShape::Disk,
            Shape::Ring => CloudShape::Ring { jitter: 0.05 },
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let counter = if cmd.pure_count {
        CounterMode::Pure
    } else {
        CounterMode::Hybrid
    };
    let cfg = HullCfg::default().with_eps(cmd.eps).with_counter(counter);
    match cmd.action {
        Action::Hull { input, out } => hull(&input, out.as_deref(), cfg),
        Action::Random {
            count,
            seed,
            shape,
            radius,
            out,
        } => random(count, seed, shape, radius, out.as_deref(), cfg),
        Action::Sweep {
            sizes,
            seed,
            shape,
            out,
        } => sweep(&sizes, seed, shape, out.as_deref(), cfg),
        Action::Report => report(cfg),
    }
}

fn hull(input: &Path, out: Option<&Path>, cfg: HullCfg) -> Result<()> {
    tracing::info!(input = %input.display(), "hull");
    let points = input::read_points_csv(input)?;
    let report = compute_hulls(points.as_slice(), &cfg);
    println!("{report}");
    if let Some(out) = out {
        let params = serde_json::json!({ "input": input.to_string_lossy() });
        write_report(out, &report, provenance::Payload::new("hull", params, cfg))?;
    }
    Ok(())
}

fn random(
    count: usize,
    seed: u64,
    shape: Shape,
    radius: f64,
    out: Option<&Path>,
    cfg: HullCfg,
) -> Result<()> {
    tracing::info!(count, seed, ?shape, radius, "random");
    let cloud = CloudCfg {
        count: PointCount::Fixed(count),
        shape: shape.into(),
        radius,
        ..CloudCfg::default()
    };
    let points = draw_cloud(cloud, ReplayToken { seed, index: 0 });
    let report = compute_hulls(points.as_slice(), &cfg);
    println!("{report}");
    if let Some(out) = out {
        let params = serde_json::json!({
            "count": count,
            "seed": seed,
            "shape": format!("{shape:?}"),
            "radius": radius
        });
        write_report(out, &report, provenance::Payload::new("random", params, cfg))?;
    }
    Ok(())
}

/// One row of the complexity table.
#[derive(Clone, Debug, PartialEq)]
struct SweepRow {
    n: usize,
    hull_vertices: usize,
    scan_ops: u64,
    brute_ops: u64,
    polygon: bool,
    same_vertex_set: bool,
}

impl SweepRow {
    /// Only a polygon scan has a vertex set to compare.
    fn sets_differ(&self) -> bool {
        self.polygon && !self.same_vertex_set
    }
}

fn sweep_rows(sizes: &[usize], seed: u64, shape: Shape, cfg: &HullCfg) -> Vec<SweepRow> {
    sizes
        .iter()
        .map(|&n| {
            let cloud = CloudCfg {
                count: PointCount::Fixed(n),
                shape: shape.into(),
                ..CloudCfg::default()
            };
            let points = draw_cloud(cloud, ReplayToken { seed, index: n as u64 });
            let report = compute_hulls(points.as_slice(), cfg);
            SweepRow {
                n,
                hull_vertices: report.scan.vertices.len(),
                scan_ops: report.scan_ops(),
                brute_ops: report.brute_ops(),
                polygon: report.scan.is_polygon(),
                same_vertex_set: report.scan.is_polygon() && report.same_vertex_set(),
            }
        })
        .collect()
}

fn sweep(
    sizes: &[usize],
    seed: u64,
    shape: Shape,
    out: Option<&Path>,
    cfg: HullCfg,
) -> Result<()> {
    tracing::info!(?sizes, seed, ?shape, "sweep");
    let rows = sweep_rows(sizes, seed, shape, &cfg);
    println!(
        "{:>8} {:>8} {:>14} {:>14}",
        "n", "hull", "graham_ops", "brute_ops"
    );
    for r in &rows {
        println!(
            "{:>8} {:>8} {:>14} {:>14}",
            r.n, r.hull_vertices, r.scan_ops, r.brute_ops
        );
        if r.sets_differ() {
            tracing::warn!(n = r.n, "hull vertex sets differ");
        }
    }
    if let Some(out) = out {
        let mut df = polars::df!(
            "n" => rows.iter().map(|r| r.n as u64).collect::<Vec<_>>(),
            "hull_vertices" => rows.iter().map(|r| r.hull_vertices as u64).collect::<Vec<_>>(),
            "scan_ops" => rows.iter().map(|r| r.scan_ops).collect::<Vec<_>>(),
            "brute_ops" => rows.iter().map(|r| r.brute_ops).collect::<Vec<_>>(),
            "polygon" => rows.iter().map(|r| r.polygon).collect::<Vec<_>>(),
            "same_vertex_set" => rows.iter().map(|r| r.same_vertex_set).collect::<Vec<_>>()
        )?;
        input::write_table(out, &mut df)?;
        let params = serde_json::json!({
            "sizes": sizes,
            "seed": seed,
            "shape": format!("{shape:?}")
        });
        provenance::write_sidecar(out, &provenance::Payload::new("sweep", params, cfg))?;
        tracing::info!(out = %out.display(), rows = rows.len(), "sweep table written");
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct ScanDoc {
    outcome: String,
    vertices: Vec<[f64; 2]>,
    ops: u64,
    area: f64,
}

#[derive(Debug, Serialize)]
struct BruteDoc {
    points: Vec<[f64; 2]>,
    ops: u64,
}

#[derive(Debug, Serialize)]
struct HullDoc {
    total_points: usize,
    scan: ScanDoc,
    brute: BruteDoc,
    same_vertex_set: bool,
}

fn xy(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

fn hull_doc(report: &HullReport) -> HullDoc {
    HullDoc {
        total_points: report.points.len(),
        scan: ScanDoc {
            outcome: format!("{:?}", report.scan.outcome),
            vertices: xy(&report.scan.vertices),
            ops: report.scan.ops,
            area: report.scan.area(),
        },
        brute: BruteDoc {
            points: xy(&report.brute.points),
            ops: report.brute.ops,
        },
        same_vertex_set: report.scan.is_polygon() && report.same_vertex_set(),
    }
}

fn write_report(out: &Path, report: &HullReport, payload: provenance::Payload) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let doc = hull_doc(report);
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let prov = provenance::write_sidecar(out, &payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "report written");
    Ok(())
}

fn report(cfg: HullCfg) -> Result<()> {
    let payload = provenance::Payload::new("report", serde_json::json!({}), cfg);
    let doc = provenance::document(&[], &payload);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
