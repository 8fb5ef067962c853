use std::fmt;
use std::hint::black_box;
use std::time::Instant;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::average::{agrees_within_tolerance, mean, parallel_mean, rayon_mean};
use crate::data_gen::DataGenerator;
use crate::error::{AverageError, BenchError};
use crate::stats::{compute_stats, Stats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    StandardAverage,
    MapReduceAverage,
    RayonAverage,
}

impl Method {
    pub fn run(self, values: &[i32], workers: usize) -> Result<f64, AverageError> {
        match self {
            Method::StandardAverage => mean(values),
            Method::MapReduceAverage => parallel_mean(values, workers),
            Method::RayonAverage => rayon_mean(values, workers),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::StandardAverage => "StandardAverage",
            Method::MapReduceAverage => "MapReduceAverage",
            Method::RayonAverage => "RayonAverage",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodResult {
    pub method: Method,
    pub average: f64,
    pub stats: Stats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPoint {
    pub size: usize,
    pub workers: usize,
    pub results: Vec<MethodResult>,
    /// Sequential mean time over chunked parallel mean time.
    pub speedup: f64,
    pub fastest: Method,
    /// Whether every method's average agreed with the sequential one.
    pub consistent: bool,
}

impl DataPoint {
    pub fn result(&self, method: Method) -> Option<&MethodResult> {
        self.results.iter().find(|r| r.method == method)
    }
}

#[derive(Debug)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    pub runs: u32,
    pub warmup: u32,
    pub workers: usize,
    pub seed: u64,
    pub include_rayon: bool,
}

impl BenchConfig {
    pub fn methods(&self) -> Vec<Method> {
        let mut methods = vec![Method::StandardAverage, Method::MapReduceAverage];
        if self.include_rayon {
            methods.push(Method::RayonAverage);
        }
        methods
    }
}

/// Run every configured size.
///
/// Fails with [`BenchError::NoRuns`] when `runs` is zero and with
/// [`AverageError::EmptyInput`] when a size of zero is requested.
pub fn run_benchmark(
    config: &BenchConfig,
    progress_cb: Option<&dyn Fn(&str)>,
) -> Result<Vec<DataPoint>, BenchError> {
    if config.runs == 0 {
        return Err(BenchError::NoRuns);
    }
    let mut generator = DataGenerator::new(config.seed);
    let mut points = Vec::with_capacity(config.sizes.len());
    let methods = config.methods();

    for &size in &config.sizes {
        let size_label = format_size(size);
        let report = |stage: &str| {
            if let Some(cb) = progress_cb {
                cb(&format!("{size_label}: {stage}"));
            }
        };

        report("generating data");
        let values = generator.uniform_i32(size);

        let reference = mean(&values)?;
        let mut consistent = true;
        for &method in &methods[1..] {
            let avg = method.run(&values, config.workers)?;
            if !agrees_within_tolerance(reference, avg, size) {
                warn!("{method} @ {size_label} returned {avg}, sequential returned {reference}");
                consistent = false;
            }
        }

        report(&format!("warmup ({} runs)", config.warmup));
        for _ in 0..config.warmup {
            for &method in &methods {
                let _ = black_box(method.run(black_box(&values), config.workers)?);
            }
        }

        let mut results = Vec::with_capacity(methods.len());
        for &method in &methods {
            report(&format!("measuring {method} ({} runs)", config.runs));
            let (average, times) = time_method(method, &values, config.workers, config.runs)?;
            results.push(MethodResult {
                method,
                average,
                stats: compute_stats(&times),
            });
        }

        let point = summarize(size, config.workers, results, consistent);
        info!(
            "{size_label}: fastest {} (speedup {:.2}x)",
            point.fastest, point.speedup
        );
        points.push(point);
    }

    Ok(points)
}

fn time_method(
    method: Method,
    values: &[i32],
    workers: usize,
    runs: u32,
) -> Result<(f64, Vec<f64>), AverageError> {
    let mut average = f64::NAN;
    let mut times = Vec::with_capacity(runs as usize);
    for _ in 0..runs {
        let start = Instant::now();
        average = black_box(method.run(black_box(values), workers)?);
        times.push(start.elapsed().as_secs_f64() * 1000.0);
    }
    Ok((average, times))
}

/// Build a DataPoint. Ties in mean time go to the method listed first.
pub fn summarize(size: usize, workers: usize, results: Vec<MethodResult>, consistent: bool) -> DataPoint {
    let time_of = |method: Method| {
        results
            .iter()
            .find(|r| r.method == method)
            .map(|r| r.stats.mean)
    };
    let speedup = match (time_of(Method::StandardAverage), time_of(Method::MapReduceAverage)) {
        (Some(seq), Some(par)) if par > 0.0 => seq / par,
        _ => 0.0,
    };
    let fastest = results
        .iter()
        .fold(None::<&MethodResult>, |best, r| match best {
            Some(b) if b.stats.mean <= r.stats.mean => Some(b),
            _ => Some(r),
        })
        .map_or(Method::StandardAverage, |r| r.method);

    DataPoint {
        size,
        workers,
        results,
        speedup,
        fastest,
        consistent,
    }
}

pub fn format_size(size: usize) -> String {
    if size >= 1_000_000 && size % 1_000_000 == 0 {
        format!("{}M", size / 1_000_000)
    } else if size >= 1_000 && size % 1_000 == 0 {
        format!("{}K", size / 1_000)
    } else {
        format!("{}", size)
    }
}
