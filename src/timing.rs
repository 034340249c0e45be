use std::time::{Duration, Instant};

/// The outcome of a sum-of-squares reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reduction {
    total: i64,
    elapsed: Duration,
}

impl Reduction {
    /// Creates a new `Reduction`.
    ///
    /// # Arguments
    /// * `total` - The combined sum of squares.
    /// * `elapsed` - How long the reduction took.
    ///
    /// # Returns
    /// A new `Reduction` instance.
    pub fn new(total: i64, elapsed: Duration) -> Self {
        Self { total, elapsed }
    }

    /// Returns the combined sum of squares.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Returns the elapsed wall-clock time.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the elapsed wall-clock time in fractional seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// A monotonic timer started right before the work it measures.
#[derive(Debug)]
pub struct Stopwatch(Instant);

impl Stopwatch {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    /// Stops the timer and pairs the elapsed time with the computed total.
    ///
    /// # Arguments
    /// * `total` - The result produced while the timer was running.
    ///
    /// # Returns
    /// The finished `Reduction`.
    pub fn finish(self, total: i64) -> Reduction {
        Reduction::new(total, self.0.elapsed())
    }
}
