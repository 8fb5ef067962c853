use serde::{Deserialize, Serialize};

/// Descriptive statistics over timing samples, in milliseconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stats {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub stddev: f64,
    pub cv_percent: f64,
    pub sample_count: usize,
    pub outliers_removed: usize,
}

/// Compute statistics, discarding samples outside `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`
/// when at least two samples remain afterwards.
pub fn compute_stats(samples: &[f64]) -> Stats {
    match samples {
        [] => return Stats::default(),
        [only] => {
            return Stats {
                mean: *only,
                median: *only,
                min: *only,
                max: *only,
                sample_count: 1,
                ..Stats::default()
            };
        }
        _ => {}
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let q1 = percentile(&sorted, 25.0);
    let q3 = percentile(&sorted, 75.0);
    let iqr = q3 - q1;
    let (lower, upper) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

    let filtered: Vec<f64> = sorted
        .iter()
        .copied()
        .filter(|&v| v >= lower && v <= upper)
        .collect();
    let outliers_removed = sorted.len() - filtered.len();
    let data = if filtered.len() >= 2 { &filtered } else { &sorted };

    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let variance = data.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let stddev = variance.sqrt();

    Stats {
        mean,
        median: percentile(data, 50.0),
        min: data[0],
        max: data[data.len() - 1],
        stddev,
        cv_percent: if mean > 0.0 { stddev / mean * 100.0 } else { 0.0 },
        sample_count: data.len(),
        outliers_removed: if data.len() == filtered.len() { outliers_removed } else { 0 },
    }
}

/// Linear-interpolated percentile (0-100) of a sorted, non-empty slice.
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;
    sorted[lower] * (1.0 - frac) + sorted[upper] * frac
}
