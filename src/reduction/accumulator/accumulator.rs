/// The shared total that workers fold their partial sums into.
///
/// Implementations must serialize concurrent calls to `add` so that no
/// partial is lost or counted twice.
pub trait Accumulator: Sync {
    /// Should add a worker's partial sum into the total, wrapping on overflow.
    ///
    /// # Arguments
    /// * `partial` - The sum of squares over one chunk.
    fn add(&self, partial: i64);

    /// Should return the total accumulated so far.
    fn total(&self) -> i64;
}
