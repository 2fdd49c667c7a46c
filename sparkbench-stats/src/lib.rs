#![warn(missing_docs)]
//! SparkBench Statistics Engine
//!
//! Post-processes the timing samples of one finished measurement:
//! - Relative noise (unbiased relative standard deviation)
//! - Nearest-rank percentile extraction
//! - Fixed-window histogram binning with underflow/overflow sentinels
//! - Adaptive histogram fitting (trims sparse edge bins, recomputes the window)
//!
//! Every operation is a pure function over a caller-owned sample slice. All
//! operations except [`compute_noise`] require the slice to be sorted
//! ascending; callers own sorting, and unsorted input yields incorrect (but
//! non-crashing) results.

mod histogram;
mod noise;
mod percentiles;
mod summary;

pub use histogram::{
    FittedHistogram, Histogram, Window, WindowError, compute_histogram, fit_histogram,
};
pub use noise::compute_noise;
pub use percentiles::{compute_percentile, compute_percentiles};
pub use summary::{SummaryStatistics, compute_summary};

/// Sample count below which noise estimates are statistically unreliable
pub const MIN_NOISE_SAMPLES: usize = 5;

/// Default histogram bin count requested by the reporting layer
pub const DEFAULT_HISTOGRAM_BINS: usize = 32;

/// Default fraction of the fullest bin below which edge bins are trimmed
pub const DEFAULT_TRIM_FRACTION: f64 = 0.05;
