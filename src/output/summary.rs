//! Per-size comparison lines in the console format of the original
//! averaging benchmark.

use crate::harness::{DataPoint, Method};

/// Lines reported for one size: a header, one line per method, and a verdict.
pub fn comparison_lines(dp: &DataPoint) -> Vec<String> {
    let mut lines = Vec::with_capacity(dp.results.len() + 2);
    lines.push(format!("Testing with array size: {}", dp.size));
    for r in &dp.results {
        lines.push(format!("{}: {}, Time: {:.4} ms", r.method, r.average, r.stats.mean));
    }
    lines.push(verdict(dp));
    if !dp.consistent {
        lines.push("WARNING: methods disagree on the average beyond rounding tolerance".to_string());
    }
    lines
}

/// "<fastest> is faster than <the rest>."
pub fn verdict(dp: &DataPoint) -> String {
    let others: Vec<String> = dp
        .results
        .iter()
        .map(|r| r.method)
        .filter(|&m| m != dp.fastest)
        .map(|m: Method| m.to_string())
        .collect();
    format!("{} is faster than {}.", dp.fastest, others.join(" and "))
}
