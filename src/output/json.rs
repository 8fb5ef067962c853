//! JSON report for benchmark results.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::harness::DataPoint;

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonReport {
    pub workers: usize,
    pub seed: u64,
    pub runs: u32,
    pub warmup: u32,
    pub results: Vec<DataPoint>,
}

pub fn write_json(path: &Path, report: &JsonReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report).context("JSON serialization failed")?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }

    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
