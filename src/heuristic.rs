//! Cluster-count selection policies.
//!
//! Picking k is deliberately the caller's job; the engine never guesses. This
//! module holds the one default policy worth sharing: the square-root rule,
//! which tracks "a handful of themes per few dozen documents" well enough for
//! digest-style pipelines.

/// Suggest a cluster count for `n` items: `floor(sqrt(n))` clamped to
/// `[min_k, max_k]`.
///
/// `n = 0` is treated as 1, so the suggestion bottoms out at `min_k` instead
/// of zero. Callers with domain knowledge about their corpus should ignore
/// this and pick k directly.
///
/// # Panics
///
/// Panics if `min_k > max_k`.
///
/// # Examples
///
/// ```rust
/// use motif::suggest_cluster_count;
///
/// assert_eq!(suggest_cluster_count(9, 2, 8), 3);
/// assert_eq!(suggest_cluster_count(2, 2, 8), 2);
/// assert_eq!(suggest_cluster_count(500, 2, 8), 8);
/// ```
pub fn suggest_cluster_count(n: usize, min_k: usize, max_k: usize) -> usize {
    let root = (n.max(1) as f64).sqrt() as usize;
    root.clamp(min_k, max_k)
}
