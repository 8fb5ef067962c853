//! Sequential and chunked fork-join computation of an integer mean.
//!
//! The parallel paths split the input into `workers` contiguous chunks of
//! `len / workers` elements; the last chunk also takes the remainder.
//! Partial sums are always combined in chunk order, so repeated runs over
//! the same input give the same result regardless of which worker
//! finishes first.

use std::ops::Range;
use std::panic;
use std::thread;

use log::debug;
use rayon::prelude::*;

use crate::error::AverageError;

pub fn mean(values: &[i32]) -> Result<f64, AverageError> {
    if values.is_empty() {
        return Err(AverageError::EmptyInput);
    }
    let total: f64 = values.iter().map(|&v| v as f64).sum();
    Ok(total / values.len() as f64)
}

/// Mean computed from the scoped-thread [`partial_sums`].
///
/// `worker_count` is a parallelism hint and is clamped through
/// [`effective_workers`]; it never changes the result beyond rounding.
pub fn parallel_mean(values: &[i32], worker_count: usize) -> Result<f64, AverageError> {
    if values.is_empty() {
        return Err(AverageError::EmptyInput);
    }
    let total: f64 = partial_sums(values, worker_count).iter().sum();
    Ok(total / values.len() as f64)
}

/// Same partition as [`parallel_mean`], with the chunks summed on the rayon pool.
pub fn rayon_mean(values: &[i32], worker_count: usize) -> Result<f64, AverageError> {
    if values.is_empty() {
        return Err(AverageError::EmptyInput);
    }
    let sums: Vec<f64> = chunk_ranges(values.len(), worker_count)
        .into_par_iter()
        .map(|range| chunk_sum(&values[range]))
        .collect();
    let total: f64 = sums.iter().sum();
    Ok(total / values.len() as f64)
}

/// Sum every chunk of the partition, slot `i` holding the sum of chunk `i`.
///
/// At most [`available_workers`] scoped threads run; each owns a contiguous
/// group of chunks and their output slots. A panic in any thread is
/// re-raised on the caller.
pub fn partial_sums(values: &[i32], worker_count: usize) -> Vec<f64> {
    let ranges = chunk_ranges(values.len(), worker_count);
    let threads = ranges.len().min(available_workers());
    let per_thread = ranges.len().div_ceil(threads);
    let mut sums = vec![0.0; ranges.len()];

    thread::scope(|s| {
        sums.chunks_mut(per_thread)
            .zip(ranges.chunks(per_thread))
            .map(|(slots, group)| {
                s.spawn(move || {
                    for (slot, range) in slots.iter_mut().zip(group) {
                        *slot = chunk_sum(&values[range.clone()]);
                    }
                })
            })
            .collect::<Vec<_>>()
            .into_iter()
            .for_each(|h| h.join().unwrap_or_else(|payload| panic::resume_unwind(payload)));
    });
    sums
}

/// Clamp a requested worker count to `[1, len]`.
///
/// An empty input still yields one worker so the partition stays well formed.
pub fn effective_workers(requested: usize, len: usize) -> usize {
    let workers = requested.min(len).max(1);
    if workers != requested {
        debug!("clamped worker count {requested} to {workers} for {len} elements");
    }
    workers
}

pub fn chunk_ranges(len: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = effective_workers(workers, len);
    let chunk_size = len / workers;
    let ranges: Vec<Range<usize>> = (0..workers)
        .map(|i| {
            let start = i * chunk_size;
            let end = if i == workers - 1 { len } else { start + chunk_size };
            start..end
        })
        .collect();
    debug!(
        "partitioned {len} elements into {workers} chunks of {chunk_size} (last chunk {})",
        ranges.last().map_or(0, |r| r.len())
    );
    ranges
}

pub fn available_workers() -> usize {
    thread::available_parallelism().map_or(1, |n| n.get())
}

/// True when two means of `len` terms differ by no more than accumulated rounding.
pub fn agrees_within_tolerance(a: f64, b: f64, len: usize) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= f64::EPSILON * len.max(1) as f64 * scale
}

fn chunk_sum(chunk: &[i32]) -> f64 {
    chunk.iter().map(|&v| v as f64).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1, 2, 3, 4]).unwrap(), 2.5);
        assert_eq!(mean(&[10]).unwrap(), 10.0);
        assert_eq!(mean(&[-3, 3]).unwrap(), 0.0);
    }

    #[test]
    fn test_mean_empty() {
        assert!(matches!(mean(&[]), Err(AverageError::EmptyInput)));
    }

    #[test]
    fn test_parallel_mean_even_split() {
        assert_eq!(partial_sums(&[1, 2, 3, 4], 2), vec![3.0, 7.0]);
        assert_eq!(parallel_mean(&[1, 2, 3, 4], 2).unwrap(), 2.5);
    }

    #[test]
    fn test_parallel_mean_remainder_in_last_chunk() {
        let values = [1, 2, 3, 4, 5];
        assert_eq!(chunk_ranges(values.len(), 2), vec![0..2, 2..5]);
        assert_eq!(partial_sums(&values, 2), vec![3.0, 12.0]);
        assert_eq!(parallel_mean(&values, 2).unwrap(), 3.0);
    }

    #[test]
    fn test_parallel_mean_empty() {
        assert!(matches!(parallel_mean(&[], 4), Err(AverageError::EmptyInput)));
        assert!(matches!(rayon_mean(&[], 4), Err(AverageError::EmptyInput)));
    }

    #[test]
    fn test_single_element_any_workers() {
        for workers in [0, 1, 8] {
            assert_eq!(parallel_mean(&[10], workers).unwrap(), 10.0);
            assert_eq!(rayon_mean(&[10], workers).unwrap(), 10.0);
        }
    }

    #[test]
    fn test_effective_workers_clamp() {
        assert_eq!(effective_workers(0, 10), 1);
        assert_eq!(effective_workers(4, 10), 4);
        assert_eq!(effective_workers(16, 10), 10);
        assert_eq!(effective_workers(16, 0), 1);
    }

    #[test]
    fn test_chunk_ranges_more_workers_than_elements() {
        let ranges = chunk_ranges(3, 12);
        assert_eq!(ranges, vec![0..1, 1..2, 2..3]);
        assert!(ranges.iter().all(|r| !r.is_empty()));
    }

    #[test]
    fn test_chunk_ranges_empty_input() {
        assert_eq!(chunk_ranges(0, 4), vec![0..0]);
    }

    #[test]
    fn test_chunk_ranges_last_takes_remainder() {
        let ranges = chunk_ranges(103, 10);
        assert_eq!(ranges.len(), 10);
        for r in &ranges[..9] {
            assert_eq!(r.len(), 10);
        }
        assert_eq!(ranges[9], 90..103);
    }

    #[test]
    fn test_partial_sums_one_slot_per_worker() {
        let values: Vec<i32> = (1..=100).collect();
        let sums = partial_sums(&values, 7);
        assert_eq!(sums.len(), 7);
        assert_eq!(sums.iter().sum::<f64>(), 5050.0);
        // chunk 0 covers 1..=14
        assert_eq!(sums[0], 105.0);
    }

    #[test]
    fn test_partial_sums_more_chunks_than_threads() {
        let values: Vec<i32> = (1..=1000).collect();
        let sums = partial_sums(&values, 1000);
        let expected: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        assert_eq!(sums, expected);
    }

    #[test]
    fn test_strategies_agree() {
        let values: Vec<i32> = (0..10_007).map(|i| (i * 37 % 101) - 50).collect();
        let seq = mean(&values).unwrap();
        for workers in [1, 2, 3, 8, 64] {
            let par = parallel_mean(&values, workers).unwrap();
            let ray = rayon_mean(&values, workers).unwrap();
            assert!(agrees_within_tolerance(seq, par, values.len()), "{seq} vs {par}");
            assert!(agrees_within_tolerance(seq, ray, values.len()), "{seq} vs {ray}");
        }
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let values = vec![i32::MAX; 1000];
        assert_eq!(mean(&values).unwrap(), i32::MAX as f64);
        assert_eq!(parallel_mean(&values, 4).unwrap(), i32::MAX as f64);
    }

    #[test]
    fn test_available_workers_positive() {
        assert!(available_workers() >= 1);
    }

    #[test]
    fn test_tolerance() {
        assert!(agrees_within_tolerance(2.5, 2.5, 4));
        assert!(agrees_within_tolerance(1e6, 1e6 * (1.0 + f64::EPSILON), 4));
        assert!(!agrees_within_tolerance(2.5, 2.6, 4));
    }
}
