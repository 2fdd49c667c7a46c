//! Summary Statistics
//!
//! Compact per-measurement summary for the formatting layer: mean, noise,
//! extremes, and the nearest-rank median. Built from the same sorted slice
//! and precomputed sum the other statistics consume.

use crate::noise::compute_noise;
use crate::percentiles::compute_percentile;
use serde::{Deserialize, Serialize};

/// Summary of one measurement's sample set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Relative noise; infinite below the minimum sample count
    pub noise: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// Nearest-rank median
    pub median: f64,
    /// Number of samples summarized
    pub sample_count: usize,
}

/// Compute summary statistics over sorted samples
///
/// An empty sample set yields a zeroed summary with infinite noise rather
/// than an error, matching the degraded-not-failed policy of the rest of the
/// engine.
pub fn compute_summary(sorted: &[f64], sum: f64) -> SummaryStatistics {
    if sorted.is_empty() {
        return SummaryStatistics {
            mean: 0.0,
            noise: f64::INFINITY,
            min: 0.0,
            max: 0.0,
            median: 0.0,
            sample_count: 0,
        };
    }

    SummaryStatistics {
        mean: sum / sorted.len() as f64,
        noise: compute_noise(sorted, sum),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        median: compute_percentile(sorted, 50),
        sample_count: sorted.len(),
    }
}
