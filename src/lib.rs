//! Sequential versus chunked fork-join computation of an integer array mean,
//! plus the harness that times them against each other.

pub mod average;
pub mod cli;
pub mod config;
pub mod data_gen;
pub mod error;
pub mod harness;
pub mod output;
pub mod stats;

pub use average::{
    agrees_within_tolerance, available_workers, chunk_ranges, effective_workers, mean,
    parallel_mean, partial_sums, rayon_mean,
};
pub use error::{AverageError, BenchError};
