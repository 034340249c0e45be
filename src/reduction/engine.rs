use std::{num::NonZeroUsize, ops::Range};

use log::{debug, info, warn};
use rayon::{ThreadPool, ThreadPoolBuilder, prelude::*};

use super::{
    CombineMode, partition,
    accumulator::{Accumulator, AtomicAccumulator, LockedAccumulator},
};
use crate::{
    sequential,
    timing::{Reduction, Stopwatch},
};

/// Computes the sum of squares of a sequence across a fixed pool of workers.
///
/// The engine owns a dedicated thread pool of exactly `workers` threads and
/// reuses it for every call to `reduce`. Calls are independent of each other.
#[derive(Debug)]
pub struct ReductionEngine {
    workers: NonZeroUsize,
    mode: CombineMode,
    pool: Option<ThreadPool>,
}

impl ReductionEngine {
    /// Creates a new `ReductionEngine`.
    ///
    /// If the thread pool can't be built the engine degrades to a single
    /// worker running on the caller's thread.
    ///
    /// # Arguments
    /// * `workers` - The amount of worker threads.
    /// * `mode` - How partial sums are merged into the total.
    ///
    /// # Returns
    /// A new `ReductionEngine` instance.
    pub fn new(workers: NonZeroUsize, mode: CombineMode) -> Self {
        let built = ThreadPoolBuilder::new()
            .num_threads(workers.get())
            .thread_name(|i| format!("reduce-worker-{i}"))
            .build();

        match built {
            Ok(pool) => {
                info!(workers = workers.get(); "reduction pool ready, combining with {mode}");

                Self {
                    workers,
                    mode,
                    pool: Some(pool),
                }
            }
            Err(e) => {
                warn!("failed to build reduction pool, running sequentially: {e}");

                Self {
                    workers: NonZeroUsize::MIN,
                    mode,
                    pool: None,
                }
            }
        }
    }

    /// Returns the amount of workers the engine actually runs with.
    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    pub fn mode(&self) -> CombineMode {
        self.mode
    }

    /// Computes `Σ sequence[i]²` in parallel.
    ///
    /// The timer covers partitioning, the per-chunk work and the combine step.
    /// The calling thread blocks until every worker has finished.
    ///
    /// # Arguments
    /// * `sequence` - The values to square and add, shared read-only by the workers.
    ///
    /// # Returns
    /// The total, identical to `sequential::sum_of_squares`, and the elapsed time.
    pub fn reduce(&self, sequence: &[i64]) -> Reduction {
        let stopwatch = Stopwatch::start();
        let chunks = partition::plan(sequence.len(), self.workers);

        let total = match &self.pool {
            Some(pool) => pool.install(|| self.combine(sequence, &chunks)),
            None => sequential::sum_of_squares(sequence),
        };

        let reduction = stopwatch.finish(total);

        debug!(
            len = sequence.len(),
            chunks = chunks.len(),
            total = total;
            "reduction finished in {:?}", reduction.elapsed()
        );

        reduction
    }

    fn combine(&self, sequence: &[i64], chunks: &[Range<usize>]) -> i64 {
        match self.mode {
            CombineMode::Atomic => accumulate(AtomicAccumulator::default(), sequence, chunks),
            CombineMode::Critical => accumulate(LockedAccumulator::default(), sequence, chunks),
            CombineMode::Fold => chunks
                .par_iter()
                .map(|chunk| partial(sequence, chunk))
                .collect::<Vec<_>>()
                .into_iter()
                .fold(0, i64::wrapping_add),
        }
    }
}

/// Has every worker add its partial straight into the shared accumulator.
fn accumulate<A: Accumulator>(acc: A, sequence: &[i64], chunks: &[Range<usize>]) -> i64 {
    chunks
        .par_iter()
        .for_each(|chunk| acc.add(partial(sequence, chunk)));

    acc.total()
}

/// The private per-worker sum over a single chunk.
fn partial(sequence: &[i64], chunk: &Range<usize>) -> i64 {
    let partial = sequential::sum_of_squares(&sequence[chunk.clone()]);

    debug!(
        worker = rayon::current_thread_index().unwrap_or_default(),
        start = chunk.start,
        end = chunk.end;
        "chunk reduced"
    );

    partial
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: [CombineMode; 3] = [CombineMode::Atomic, CombineMode::Critical, CombineMode::Fold];

    fn engine(workers: usize, mode: CombineMode) -> ReductionEngine {
        ReductionEngine::new(NonZeroUsize::new(workers).unwrap(), mode)
    }

    #[test]
    fn small_sequence_every_mode() {
        let seq = [0, 1, 2, 3, 4];

        for mode in MODES {
            for workers in [1, 4] {
                let reduction = engine(workers, mode).reduce(&seq);
                assert_eq!(reduction.total(), 30, "mode={mode} workers={workers}");
            }
        }
    }

    #[test]
    fn empty_sequence_is_zero() {
        for mode in MODES {
            let reduction = engine(4, mode).reduce(&[]);

            assert_eq!(reduction.total(), 0);
            assert!(reduction.elapsed_secs() >= 0.);
        }
    }

    #[test]
    fn engine_reports_requested_workers() {
        let engine = engine(3, CombineMode::Critical);

        assert_eq!(engine.workers().get(), 3);
        assert_eq!(engine.mode(), CombineMode::Critical);
    }

    #[test]
    fn engine_is_reusable() {
        let engine = engine(4, CombineMode::Atomic);
        let seq: Vec<i64> = (1..=100).collect();

        let first = engine.reduce(&seq).total();
        let second = engine.reduce(&seq).total();
        assert_eq!(first, second);
        assert_eq!(first, 338_350);
    }

    #[test]
    fn missing_pool_runs_sequentially() {
        let seq: Vec<i64> = (-50..50).collect();
        let expected = sequential::sum_of_squares(&seq);

        for mode in MODES {
            let engine = ReductionEngine {
                workers: NonZeroUsize::MIN,
                mode,
                pool: None,
            };

            assert_eq!(engine.workers().get(), 1);
            assert_eq!(engine.reduce(&seq).total(), expected, "mode={mode}");
            assert_eq!(engine.reduce(&[]).total(), 0);
        }
    }

    #[test]
    fn partial_covers_only_its_chunk() {
        let seq = [1, 2, 3, 4];
        assert_eq!(partial(&seq, &(1..3)), 13);
    }
}
