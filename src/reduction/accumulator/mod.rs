mod accumulator;
mod atomic;
mod locked;

pub use accumulator::Accumulator;
pub use atomic::AtomicAccumulator;
pub use locked::LockedAccumulator;
