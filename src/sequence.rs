/// Builds the benchmark input `[0, 1, ..., n - 1]`.
///
/// # Arguments
/// * `n` - The length of the sequence.
///
/// # Returns
/// The ascending sequence as signed 64-bit integers.
pub fn ascending(n: usize) -> Vec<i64> {
    (0..n).map(|i| i as i64).collect()
}
