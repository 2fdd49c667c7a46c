//! Noise Estimation
//!
//! Noise is the unbiased relative standard deviation of a measurement's
//! samples, a unitless measurement-quality indicator. Undersized sample sets
//! degrade to an "infinite noise" sentinel rather than failing.

use crate::MIN_NOISE_SAMPLES;

/// Compute the relative noise of a measurement's samples
///
/// `sum` is supplied by the caller so one summation serves every statistic
/// derived from the same sample set.
///
/// Returns `f64::INFINITY` when fewer than [`MIN_NOISE_SAMPLES`] samples are
/// available; otherwise `sqrt(sum((x - mean)^2) / (n - 1)) / mean`.
///
/// # Examples
///
/// ```
/// # use sparkbench_stats::compute_noise;
/// let samples = vec![99.0, 100.0, 100.0, 100.0, 101.0];
/// let sum: f64 = samples.iter().sum();
/// let noise = compute_noise(&samples, sum);
/// assert!(noise < 0.01);
/// ```
pub fn compute_noise(samples: &[f64], sum: f64) -> f64 {
    if samples.len() < MIN_NOISE_SAMPLES {
        return f64::INFINITY;
    }

    let n = samples.len() as f64;
    let mean = sum / n;
    let sum_sq: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum();
    (sum_sq / (n - 1.0)).sqrt() / mean
}
