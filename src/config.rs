use std::{env, num::NonZeroUsize, thread};

use log::warn;

use crate::{
    error::{ConfigErr, Result},
    reduction::CombineMode,
};

/// Environment variable holding the requested worker count.
pub const WORKERS_VAR: &str = "REDUCE_WORKERS";
/// Environment variable holding the length of the benchmark sequence.
pub const LEN_VAR: &str = "REDUCE_LEN";
/// Environment variable selecting how partial sums are combined.
pub const COMBINE_VAR: &str = "REDUCE_COMBINE";

pub const DEFAULT_LEN: usize = 200_000;

/// The most workers a hint can ask for: the machine's available parallelism.
pub fn max_workers() -> NonZeroUsize {
    thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

/// Turns a worker count hint into a usable worker count.
///
/// Zero and negative hints fall back to a single worker, hints above
/// `max_workers` are capped to it.
///
/// # Arguments
/// * `hint` - The requested amount of workers.
///
/// # Returns
/// Between one and `max_workers` workers.
pub fn workers_from_hint(hint: isize) -> NonZeroUsize {
    let workers = usize::try_from(hint)
        .ok()
        .and_then(NonZeroUsize::new)
        .unwrap_or(NonZeroUsize::MIN);

    let max = max_workers();
    if workers > max {
        warn!(requested = workers.get(), max = max.get(); "worker hint too large, capping");
        return max;
    }

    workers
}

/// Parses a worker count hint, see `workers_from_hint`.
///
/// # Returns
/// A `ConfigErr::InvalidWorkers` if `raw` isn't an integer.
pub fn parse_workers(raw: &str) -> Result<NonZeroUsize> {
    raw.trim()
        .parse::<isize>()
        .map(workers_from_hint)
        .map_err(|_| ConfigErr::InvalidWorkers(raw.to_string()))
}

/// Parses a sequence length.
///
/// # Returns
/// A `ConfigErr::InvalidLength` if `raw` isn't a non-negative integer.
pub fn parse_len(raw: &str) -> Result<usize> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigErr::InvalidLength(raw.to_string()))
}

/// Settings for a single benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    workers: NonZeroUsize,
    length: usize,
    mode: CombineMode,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            workers: max_workers(),
            length: DEFAULT_LEN,
            mode: CombineMode::default(),
        }
    }
}

impl RunConfig {
    /// Creates a new `RunConfig`.
    ///
    /// # Arguments
    /// * `workers` - The amount of worker threads.
    /// * `length` - The length of the ascending input sequence.
    /// * `mode` - How partial sums are combined.
    ///
    /// # Returns
    /// A new `RunConfig` instance.
    pub fn new(workers: NonZeroUsize, length: usize, mode: CombineMode) -> Self {
        Self {
            workers,
            length,
            mode,
        }
    }

    /// Reads the run settings from the process environment.
    ///
    /// Never fails: unset variables keep their defaults and invalid ones are
    /// logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the run settings through `lookup`, with the same fallbacks as `from_env`.
    ///
    /// # Arguments
    /// * `lookup` - Returns the raw value for a variable name, if set.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(WORKERS_VAR) {
            match parse_workers(&raw) {
                Ok(workers) => config.workers = workers,
                Err(e) => warn!("{e}, using {} workers", config.workers),
            }
        }

        if let Some(raw) = lookup(LEN_VAR) {
            match parse_len(&raw) {
                Ok(length) => config.length = length,
                Err(e) => warn!("{e}, using length {}", config.length),
            }
        }

        if let Some(raw) = lookup(COMBINE_VAR) {
            match raw.parse() {
                Ok(mode) => config.mode = mode,
                Err(e) => warn!("{e}, using {}", config.mode),
            }
        }

        config
    }

    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn mode(&self) -> CombineMode {
        self.mode
    }
}
