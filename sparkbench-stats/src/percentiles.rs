//! Percentile Extraction
//!
//! Nearest-rank selection over an already-sorted sample slice: percentile
//! values are always actual sample values, never interpolated between them,
//! so tail percentiles report real observed latencies.

/// Compute a single nearest-rank percentile from sorted samples
///
/// `percentile` is clamped to `[0, 100]`. The 100th percentile selects the
/// last sample; every other value selects `samples[p * n / 100]`.
///
/// # Examples
///
/// ```
/// # use sparkbench_stats::compute_percentile;
/// let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(compute_percentile(&samples, 50), 3.0);
/// assert_eq!(compute_percentile(&samples, 100), 5.0);
/// ```
pub fn compute_percentile(sorted: &[f64], percentile: u32) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }

    let n = sorted.len();
    let p = percentile.min(100) as usize;
    let index = if p == 100 { n - 1 } else { p * n / 100 };
    sorted[index]
}

/// Compute a batch of percentiles, preserving request order
pub fn compute_percentiles(sorted: &[f64], percentiles: &[u32]) -> Vec<f64> {
    percentiles
        .iter()
        .map(|&p| compute_percentile(sorted, p))
        .collect()
}
