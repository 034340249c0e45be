use std::{num::NonZeroUsize, ops::Range};

/// Splits the index space `[0, len)` into contiguous chunks, one per worker.
///
/// Every chunk but the last holds `ceil(len / workers)` indices, so the plan
/// never has more chunks than workers and may have fewer when `len` is small.
///
/// # Arguments
/// * `len` - The length of the input sequence.
/// * `workers` - The amount of workers sharing the iteration space.
///
/// # Returns
/// Disjoint ranges covering `[0, len)` in order, empty if `len` is zero.
pub fn plan(len: usize, workers: NonZeroUsize) -> Vec<Range<usize>> {
    if len == 0 {
        return Vec::new();
    }

    let chunk_size = len.div_ceil(workers.get());

    (0..len)
        .step_by(chunk_size)
        .map(|start| start..(start + chunk_size).min(len))
        .collect()
}
