#![warn(missing_docs)]
//! # SparkBench
//!
//! Statistical post-processing and compact visualization for benchmark
//! timing samples:
//! - **Noise**: unbiased relative standard deviation with an infinite-noise
//!   sentinel for undersized sample sets
//! - **Percentiles**: nearest-rank selection, never interpolated
//! - **Adaptive Histograms**: fixed-window binning plus a fit pass that trims
//!   sparse edge bins and tightens the window
//! - **Block Charts**: fixed-height text rendering with eighths-of-a-block
//!   vertical resolution
//!
//! The harness around this crate owns measurement, sample collection and
//! sorting, and document serialization; this crate consumes a finished,
//! sorted sample vector and produces numbers and printable strings.
//!
//! ## Quick Start
//!
//! ```
//! use sparkbench::prelude::*;
//!
//! let mut samples: Vec<f64> = vec![102.0, 99.0, 100.0, 101.0, 98.0, 100.0];
//! samples.sort_by(|a, b| a.partial_cmp(b).unwrap());
//!
//! let sum: f64 = samples.iter().sum();
//! let noise = compute_noise(&samples, sum);
//! assert!(noise < 0.05);
//!
//! let window = Window::from_bounds(95.0, 105.0, 10).unwrap();
//! let fitted = fit_histogram(&samples, &window, 0.05);
//! let chart = HistogramChart::new(&fitted.histogram).render();
//! assert_eq!(chart.lines().count(), NUM_ROWS);
//! ```

pub use sparkbench_report::{HistogramChart, NUM_ROWS, format_measurement};
pub use sparkbench_stats::{
    DEFAULT_HISTOGRAM_BINS, DEFAULT_TRIM_FRACTION, FittedHistogram, Histogram, MIN_NOISE_SAMPLES,
    SummaryStatistics, Window, WindowError, compute_histogram, compute_noise, compute_percentile,
    compute_percentiles, compute_summary, fit_histogram,
};

/// Common imports for harness code
pub mod prelude {
    pub use sparkbench_report::{HistogramChart, NUM_ROWS, format_measurement};
    pub use sparkbench_stats::{
        FittedHistogram, Histogram, SummaryStatistics, Window, compute_histogram, compute_noise,
        compute_percentiles, compute_summary, fit_histogram,
    };
}
