use anyhow::{bail, Context};
use clap::Parser;
use clap_verbosity_flag::Verbosity;

use crate::config::{get_profile, original_profile, parse_sizes, PROFILE_NAMES};
use crate::harness::BenchConfig;

/// Times a sequential mean against a chunked fork-join mean over random integer arrays
#[derive(Parser, Debug)]
#[command(name = "chunk-mean", version, about)]
pub struct BenchArgs {
    /// Array sizes to benchmark (e.g., 1M, 10M, 100K, 1000000)
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<String>>,

    /// Benchmark profile: original, quick, standard, thorough
    #[arg(long)]
    pub profile: Option<String>,

    /// Number of measured runs per size (overrides the profile)
    #[arg(long)]
    pub runs: Option<u32>,

    /// Number of warmup runs per size (overrides the profile)
    #[arg(long)]
    pub warmup: Option<u32>,

    /// Worker count for the parallel mean; defaults to the available parallelism
    #[arg(long)]
    pub workers: Option<usize>,

    /// Seed for the data generator
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Also time the rayon-backed chunked mean
    #[arg(long)]
    pub rayon: bool,

    /// Write JSON results to file
    #[arg(long)]
    pub json_file: Option<String>,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,

    #[command(flatten)]
    pub verbosity: Verbosity,
}

impl BenchArgs {
    /// Sizes come from --sizes, then --profile, then the original size list.
    /// Explicit --runs/--warmup override the profile's values, and
    /// `detected_workers` applies when --workers is absent.
    pub fn bench_config(&self, detected_workers: usize) -> anyhow::Result<BenchConfig> {
        let profile = match self.profile.as_deref() {
            Some(name) => get_profile(name).with_context(|| {
                format!("unknown profile '{name}'. Valid: {}", PROFILE_NAMES.join(", "))
            })?,
            None => original_profile(),
        };

        let sizes = match self.sizes {
            Some(ref raw) => parse_sizes(raw).map_err(anyhow::Error::msg)?,
            None => profile.sizes,
        };
        if sizes.is_empty() {
            bail!("no array sizes to benchmark");
        }

        let runs = self.runs.unwrap_or(profile.runs);
        if runs == 0 {
            bail!("--runs must be at least 1");
        }

        Ok(BenchConfig {
            sizes,
            runs,
            warmup: self.warmup.unwrap_or(profile.warmup),
            workers: self.workers.unwrap_or(detected_workers),
            seed: self.seed,
            include_rayon: self.rayon,
        })
    }
}
