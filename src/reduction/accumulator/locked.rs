use parking_lot::Mutex;

use super::Accumulator;

/// An accumulator guarded by a critical section.
///
/// Every `add` takes the lock, so partials are applied one at a time.
#[derive(Debug, Default)]
pub struct LockedAccumulator {
    total: Mutex<i64>,
}

impl Accumulator for LockedAccumulator {
    fn add(&self, partial: i64) {
        let mut total = self.total.lock();
        *total = total.wrapping_add(partial);
    }

    fn total(&self) -> i64 {
        *self.total.lock()
    }
}
