//! Run-metadata sidecar for experiment outputs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Parameters of a sampling run, recorded next to its output file.
#[derive(Serialize)]
pub struct RunReport {
    pub crate_version: &'static str,
    pub samples: usize,
    pub points: usize,
    pub seed: u64,
    pub output: String,
}

/// Write `run.json` next to `out`.
pub fn write_run_report(out: &Path, report: &RunReport) -> Result<()> {
    let path = out.with_file_name("run.json");
    let body = serde_json::to_vec_pretty(report).context("serialize run report")?;
    fs::write(&path, body).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
