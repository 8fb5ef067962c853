use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchProfile {
    pub name: String,
    pub sizes: Vec<usize>,
    pub runs: u32,
    pub warmup: u32,
}

pub const PROFILE_NAMES: [&str; 4] = ["original", "quick", "standard", "thorough"];

pub fn original_profile() -> BenchProfile {
    BenchProfile {
        name: "original".to_string(),
        sizes: vec![1_000_000, 10_000_000, 50_000_000, 100_000_000],
        runs: 1,
        warmup: 0,
    }
}

pub fn quick_profile() -> BenchProfile {
    BenchProfile {
        name: "quick".to_string(),
        sizes: vec![1_000_000],
        runs: 3,
        warmup: 1,
    }
}

pub fn standard_profile() -> BenchProfile {
    BenchProfile {
        name: "standard".to_string(),
        sizes: vec![1_000_000, 10_000_000],
        runs: 10,
        warmup: 3,
    }
}

pub fn thorough_profile() -> BenchProfile {
    BenchProfile {
        name: "thorough".to_string(),
        sizes: vec![1_000_000, 10_000_000, 100_000_000],
        runs: 30,
        warmup: 3,
    }
}

pub fn get_profile(name: &str) -> Option<BenchProfile> {
    match name {
        "original" => Some(original_profile()),
        "quick" => Some(quick_profile()),
        "standard" => Some(standard_profile()),
        "thorough" => Some(thorough_profile()),
        _ => None,
    }
}

/// Parse a human-readable size such as "1M", "100k", "2.5M" or "1_000_000".
pub fn parse_size(s: &str) -> Result<usize, String> {
    let s = s.trim();

    let (digits, multiplier) = if let Some(prefix) = s.strip_suffix(['M', 'm']) {
        (prefix, 1_000_000.0)
    } else if let Some(prefix) = s.strip_suffix(['K', 'k']) {
        (prefix, 1_000.0)
    } else {
        return s
            .replace('_', "")
            .parse::<usize>()
            .map_err(|e| format!("Invalid size '{}': {}", s, e));
    };

    let num: f64 = digits
        .replace('_', "")
        .parse()
        .map_err(|e| format!("Invalid size '{}': {}", s, e))?;
    if !num.is_finite() || num < 0.0 {
        return Err(format!("Invalid size '{}': must be a non-negative number", s));
    }
    Ok((num * multiplier).round() as usize)
}

pub fn parse_sizes(raw: &[String]) -> Result<Vec<usize>, String> {
    raw.iter().map(|s| parse_size(s)).collect()
}
