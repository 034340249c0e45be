mod accumulator;
mod engine;
mod partition;

use std::{fmt, str::FromStr};

pub use accumulator::{Accumulator, AtomicAccumulator, LockedAccumulator};
pub use engine::ReductionEngine;
pub use partition::plan;

use crate::error::ConfigErr;

/// How the engine merges per-worker partial sums into the total.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CombineMode {
    /// Workers `fetch_add` their partial into a shared atomic.
    Atomic,
    /// Workers add their partial inside a mutex-guarded critical section.
    Critical,
    /// Partials stay private and are folded serially after the join.
    #[default]
    Fold,
}

impl fmt::Display for CombineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CombineMode::Atomic => "atomic",
            CombineMode::Critical => "critical",
            CombineMode::Fold => "fold",
        };

        f.write_str(name)
    }
}

impl FromStr for CombineMode {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "atomic" => Ok(CombineMode::Atomic),
            "critical" => Ok(CombineMode::Critical),
            "fold" => Ok(CombineMode::Fold),
            _ => Err(ConfigErr::InvalidCombine(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(" Atomic ".parse(), Ok(CombineMode::Atomic));
        assert_eq!("CRITICAL".parse(), Ok(CombineMode::Critical));
        assert_eq!("fold".parse(), Ok(CombineMode::Fold));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "reduce".parse::<CombineMode>().unwrap_err();
        assert_eq!(err, ConfigErr::InvalidCombine("reduce".to_string()));
    }

    #[test]
    fn display_parses_back() {
        for mode in [CombineMode::Atomic, CombineMode::Critical, CombineMode::Fold] {
            assert_eq!(mode.to_string().parse(), Ok(mode));
        }
    }
}
