pub mod config;
pub mod error;
pub mod reduction;
pub mod sequence;
pub mod sequential;
pub mod timing;

pub use config::{RunConfig, workers_from_hint};
pub use error::ConfigErr;
pub use reduction::{CombineMode, ReductionEngine};
pub use timing::Reduction;

/// Computes the sum of squares of `sequence` on a freshly built pool.
///
/// The pool lives for the duration of the call. A `worker_hint` of zero or
/// less runs with a single worker instead of failing.
///
/// Squares and sums wrap on 64-bit overflow, the result is then the true
/// total modulo 2^64 and nothing reports it.
///
/// # Arguments
/// * `sequence` - The values to square and add.
/// * `worker_hint` - The requested amount of workers.
///
/// # Returns
/// The total and the elapsed wall-clock time of the reduction.
pub fn reduce_sum_of_squares(sequence: &[i64], worker_hint: isize) -> Reduction {
    ReductionEngine::new(workers_from_hint(worker_hint), CombineMode::default()).reduce(sequence)
}
