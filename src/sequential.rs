use crate::timing::{Reduction, Stopwatch};

/// The naive single-threaded sum of squares.
///
/// Squares and sums wrap on overflow: totals beyond the 64-bit range are
/// reported modulo 2^64 and are not detected.
///
/// # Arguments
/// * `sequence` - The values to square and add.
///
/// # Returns
/// `Σ sequence[i]²`.
pub fn sum_of_squares(sequence: &[i64]) -> i64 {
    sequence
        .iter()
        .fold(0i64, |acc, &x| acc.wrapping_add(x.wrapping_mul(x)))
}

/// Times `sum_of_squares` with the same stopwatch the parallel engine uses.
///
/// # Arguments
/// * `sequence` - The values to square and add.
///
/// # Returns
/// The total paired with the elapsed time of the loop.
pub fn timed_sum_of_squares(sequence: &[i64]) -> Reduction {
    let stopwatch = Stopwatch::start();
    let total = sum_of_squares(sequence);
    stopwatch.finish(total)
}
