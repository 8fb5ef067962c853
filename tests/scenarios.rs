//! Worked examples for the sequential and chunked means.

use chunk_mean::{chunk_ranges, mean, parallel_mean, partial_sums, rayon_mean, AverageError};

#[test]
fn even_split_of_four_values() {
    let values = [1, 2, 3, 4];
    assert_eq!(chunk_ranges(values.len(), 2), vec![0..2, 2..4]);
    assert_eq!(partial_sums(&values, 2), vec![3.0, 7.0]);
    assert_eq!(parallel_mean(&values, 2), Ok(2.5));
    assert_eq!(mean(&values), Ok(2.5));
}

#[test]
fn single_value_single_worker() {
    assert_eq!(mean(&[10]), Ok(10.0));
    assert_eq!(parallel_mean(&[10], 1), Ok(10.0));
    assert_eq!(rayon_mean(&[10], 1), Ok(10.0));
}

#[test]
fn empty_input_is_rejected_by_every_strategy() {
    assert_eq!(mean(&[]), Err(AverageError::EmptyInput));
    assert_eq!(parallel_mean(&[], 1), Err(AverageError::EmptyInput));
    assert_eq!(parallel_mean(&[], 0), Err(AverageError::EmptyInput));
    assert_eq!(rayon_mean(&[], 8), Err(AverageError::EmptyInput));
}

#[test]
fn remainder_goes_to_last_chunk() {
    let values = [1, 2, 3, 4, 5];
    assert_eq!(chunk_ranges(values.len(), 2), vec![0..2, 2..5]);
    assert_eq!(partial_sums(&values, 2), vec![3.0, 12.0]);
    assert_eq!(parallel_mean(&values, 2), Ok(3.0));
    assert_eq!(rayon_mean(&values, 2), Ok(3.0));
}

#[test]
fn zero_workers_is_clamped_to_one() {
    let values = [2, 4, 6];
    assert_eq!(partial_sums(&values, 0), vec![12.0]);
    assert_eq!(parallel_mean(&values, 0), Ok(4.0));
}

#[test]
fn oversubscribed_workers_get_one_element_each() {
    let values = [5, 6, 7];
    assert_eq!(partial_sums(&values, 64), vec![5.0, 6.0, 7.0]);
    assert_eq!(parallel_mean(&values, 64), Ok(6.0));
}

#[test]
fn repeated_runs_are_bit_identical() {
    let values: Vec<i32> = (0..100_003).map(|i| (i * 7919) % 1000 - 500).collect();
    let first = parallel_mean(&values, 6).unwrap();
    for _ in 0..5 {
        assert_eq!(parallel_mean(&values, 6).unwrap().to_bits(), first.to_bits());
    }
}

#[test]
fn million_worker_hint_on_million_elements() {
    let values = vec![1i32; 1_000_000];
    assert_eq!(parallel_mean(&values, 1_000_000), Ok(1.0));
    let sums = partial_sums(&values, 1_000_000);
    assert_eq!(sums.len(), 1_000_000);
    assert!(sums.iter().all(|&s| s == 1.0));
}
