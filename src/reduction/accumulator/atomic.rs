use std::sync::atomic::{AtomicI64, Ordering};

use super::Accumulator;

/// An accumulator backed by a single atomic integer.
///
/// `fetch_add` wraps on overflow, same as the sequential loop.
#[derive(Debug, Default)]
pub struct AtomicAccumulator {
    total: AtomicI64,
}

impl Accumulator for AtomicAccumulator {
    fn add(&self, partial: i64) {
        self.total.fetch_add(partial, Ordering::AcqRel);
    }

    fn total(&self) -> i64 {
        self.total.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn concurrent_adds_are_not_lost() {
        const THREADS: i64 = 8;
        const ADDS: i64 = 1000;

        let acc = AtomicAccumulator::default();

        thread::scope(|s| {
            for _ in 0..THREADS {
                s.spawn(|| (0..ADDS).for_each(|_| acc.add(1)));
            }
        });

        assert_eq!(acc.total(), THREADS * ADDS);
    }

    #[test]
    fn wraps_on_overflow() {
        let acc = AtomicAccumulator::default();
        acc.add(i64::MAX);
        acc.add(1);

        assert_eq!(acc.total(), i64::MIN);
    }
}
