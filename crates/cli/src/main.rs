use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use polars::{df, prelude::*};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use kinetic_mst::api::{
    branch_and_bound, crossing_stable_mst, draw_point_set, enforce_general_position, kruskal,
    moving_kruskal, optimal_slow, solve_exact, worst_case_set, y_monotone_path, Edge, ExactCfg,
    GenBounds, ReplayToken, SearchObserver, SpanningTree,
};

mod report;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Spanning-tree experiment runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Sample random point sets and export per-algorithm statistics as CSV
    Sample {
        #[arg(long, default_value_t = 1000)]
        samples: usize,
        #[arg(long, default_value_t = 10)]
        points: usize,
        #[arg(long, default_value_t = 13052021)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Run all algorithms once on the adversarial stacked point set
    WorstCase {
        #[arg(long, default_value_t = 1)]
        iterations: usize,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Sample {
            samples,
            points,
            seed,
            out,
        } => sample(samples, points, seed, GenBounds::default(), &out),
        Action::WorstCase { iterations } => worst_case(iterations),
    }
}

/// Per-algorithm measurement columns, one row per sample.
#[derive(Default)]
struct SampleData {
    kruskal_weight: Vec<f64>,
    crossing_stable_weight: Vec<f64>,
    moving_kruskal_weight: Vec<f64>,
    brute_force_weight: Vec<f64>,
    branch_and_bound_weight: Vec<f64>,
    y_monotone_weight: Vec<f64>,
    kruskal_edges_visited: Vec<u64>,
    crossing_stable_edges_visited: Vec<u64>,
    moving_kruskal_edges_visited: Vec<u64>,
    brute_force_edges_visited: Vec<u64>,
    branch_and_bound_edges_visited: Vec<u64>,
    moving_kruskal_crossing_checks: Vec<u64>,
    brute_force_crossing_checks: Vec<u64>,
    branch_and_bound_crossing_checks: Vec<u64>,
}

fn sample(samples: usize, points: usize, seed: u64, bounds: GenBounds, out: &Path) -> Result<()> {
    tracing::info!(samples, points, seed, "sampling");
    let mut data = SampleData::default();

    for index in 0..samples {
        let token = ReplayToken {
            seed,
            index: index as u64,
        };
        let mut rng = token.to_std_rng();
        let mut set = draw_point_set(points, bounds, &mut rng);
        enforce_general_position(&mut set, bounds, &mut rng);

        let plain = kruskal(&set).with_context(|| format!("kruskal on sample {index}"))?;
        data.kruskal_weight.push(plain.total_weight());
        data.kruskal_edges_visited.push(plain.stats.edges_visited);

        let stable = crossing_stable_mst(&set)
            .with_context(|| format!("crossing-stable mst on sample {index}"))?;
        data.crossing_stable_weight.push(stable.total_weight());
        data.crossing_stable_edges_visited
            .push(stable.stats.edges_visited);

        let greedy =
            moving_kruskal(&set).with_context(|| format!("moving kruskal on sample {index}"))?;
        data.moving_kruskal_weight.push(greedy.total_weight());
        data.moving_kruskal_edges_visited
            .push(greedy.stats.edges_visited);
        data.moving_kruskal_crossing_checks
            .push(greedy.stats.crossing_checks);

        let brute = optimal_slow(&set)
            .with_context(|| format!("brute-force search on sample {index}"))?
            .ok_or_else(|| anyhow!("planar search infeasible on sample {index}"))?;
        data.brute_force_weight.push(brute.total_weight());
        data.brute_force_edges_visited
            .push(brute.stats.edges_visited);
        data.brute_force_crossing_checks
            .push(brute.stats.crossing_checks);

        let bab = branch_and_bound(&set)
            .with_context(|| format!("branch-and-bound on sample {index}"))?
            .ok_or_else(|| anyhow!("planar search infeasible on sample {index}"))?;
        data.branch_and_bound_weight.push(bab.total_weight());
        data.branch_and_bound_edges_visited
            .push(bab.stats.edges_visited);
        data.branch_and_bound_crossing_checks
            .push(bab.stats.crossing_checks);

        let (_, path) = y_monotone_path(&set);
        data.y_monotone_weight.push(path.total_weight());

        let done = index + 1;
        if samples >= 10 && done % (samples / 10) == 0 {
            tracing::info!(percent = 100 * done / samples, "sampling progress");
        }
    }

    write_csv(&data, out)?;
    report::write_run_report(
        out,
        &report::RunReport {
            crate_version: kinetic_mst::VERSION,
            samples,
            points,
            seed,
            output: out.display().to_string(),
        },
    )?;
    tracing::info!(out = %out.display(), "statistics written");
    Ok(())
}

fn write_csv(data: &SampleData, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
    }
    let mut frame = df!(
        "kruskal_weight" => &data.kruskal_weight,
        "crossing_stable_weight" => &data.crossing_stable_weight,
        "moving_kruskal_weight" => &data.moving_kruskal_weight,
        "brute_force_weight" => &data.brute_force_weight,
        "branch_and_bound_weight" => &data.branch_and_bound_weight,
        "y_monotone_weight" => &data.y_monotone_weight,
        "kruskal_edges_visited" => &data.kruskal_edges_visited,
        "crossing_stable_edges_visited" => &data.crossing_stable_edges_visited,
        "moving_kruskal_edges_visited" => &data.moving_kruskal_edges_visited,
        "brute_force_edges_visited" => &data.brute_force_edges_visited,
        "branch_and_bound_edges_visited" => &data.branch_and_bound_edges_visited,
        "moving_kruskal_crossing_checks" => &data.moving_kruskal_crossing_checks,
        "brute_force_crossing_checks" => &data.brute_force_crossing_checks,
        "branch_and_bound_crossing_checks" => &data.branch_and_bound_crossing_checks,
    )?;
    let mut file =
        std::fs::File::create(out).with_context(|| format!("create {}", out.display()))?;
    CsvWriter::new(&mut file).finish(&mut frame)?;
    Ok(())
}

/// Logs exact-search progress at trace level.
#[derive(Default)]
struct TraceObserver;

impl SearchObserver for TraceObserver {
    fn branched(&mut self, edge: &Edge) {
        tracing::trace!(src = edge.src, dest = edge.dest, "branching on crossing edge");
    }
    fn bound_tightened(&mut self, bound: f64) {
        tracing::trace!(bound, "incumbent improved");
    }
}

fn log_tree(name: &str, tree: &SpanningTree) {
    tracing::info!(
        algorithm = name,
        weight = tree.total_weight(),
        edges_visited = tree.stats.edges_visited,
        crossing_checks = tree.stats.crossing_checks,
        "result"
    );
}

fn worst_case(iterations: usize) -> Result<()> {
    let set = worst_case_set(iterations);
    tracing::info!(points = set.len(), "adversarial stacked point set");

    let greedy = moving_kruskal(&set).context("moving kruskal")?;
    log_tree("moving_kruskal", &greedy);

    let mut obs = TraceObserver;
    let exact = solve_exact(&set, ExactCfg { prune: true }, &mut obs)
        .context("branch and bound")?
        .ok_or_else(|| anyhow!("planar search infeasible"))?;
    log_tree("branch_and_bound", &exact);

    let diff = greedy.diff(&exact);
    tracing::info!(
        missing = diff.missing.len(),
        additional = diff.additional.len(),
        "greedy deviation from the planar optimum"
    );
    Ok(())
}
