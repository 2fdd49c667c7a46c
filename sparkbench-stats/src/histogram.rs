//! Histogram Construction and Adaptive Fitting
//!
//! A histogram over a measurement's samples is described by a [`Window`]
//! (`min`, `stride`, bin count) and holds `bins + 2` counts: one underflow
//! slot for samples below the window, the interior bins, and one overflow
//! slot for samples at or above the window maximum.
//!
//! [`fit_histogram`] tightens a caller-provided window around the populated
//! part of the distribution: edge bins holding less than a caller-chosen
//! fraction of the fullest bin are trimmed and the histogram is recomputed
//! over the narrowed window, keeping the bin count fixed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The value range and resolution of a histogram
///
/// Bin `i` (1-indexed among the interior bins) spans
/// `[min + (i-1)*stride, min + i*stride)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Low edge of the first interior bin
    pub min: f64,
    /// Width of each interior bin
    pub stride: f64,
    /// Number of interior bins
    pub bins: usize,
}

/// Rejected window parameters
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WindowError {
    /// A histogram needs at least one interior bin
    #[error("histogram window requires at least one bin")]
    ZeroBins,
    /// Bounds must be finite numbers
    #[error("histogram window bounds must be finite, got [{min}, {max}]")]
    NonFiniteBounds {
        /// Requested low bound
        min: f64,
        /// Requested high bound
        max: f64,
    },
    /// The high bound must exceed the low bound
    #[error("histogram window maximum {max} does not exceed minimum {min}")]
    EmptyRange {
        /// Requested low bound
        min: f64,
        /// Requested high bound
        max: f64,
    },
}

impl Window {
    /// Create a window from its minimum, stride, and bin count
    pub fn new(min: f64, stride: f64, bins: usize) -> Self {
        Self { min, stride, bins }
    }

    /// Create a window spanning `[min, max)` divided into `bins` equal bins
    ///
    /// Validates caller-supplied bounds; the adaptive fit constructs its
    /// windows directly since its loop bounds make them valid by
    /// construction.
    pub fn from_bounds(min: f64, max: f64, bins: usize) -> Result<Self, WindowError> {
        if bins == 0 {
            return Err(WindowError::ZeroBins);
        }
        if !min.is_finite() || !max.is_finite() {
            return Err(WindowError::NonFiniteBounds { min, max });
        }
        if max <= min {
            return Err(WindowError::EmptyRange { min, max });
        }
        Ok(Self {
            min,
            stride: (max - min) / bins as f64,
            bins,
        })
    }

    /// Boundary value at `level`: `min + level * stride`
    ///
    /// Levels `0..=bins` are the interior bin edges; the fit step also
    /// evaluates level `bins + 1` when the overflow slot survives trimming.
    pub fn boundary(&self, level: usize) -> f64 {
        self.min + level as f64 * self.stride
    }

    /// High edge of the last interior bin
    pub fn max(&self) -> f64 {
        self.boundary(self.bins)
    }
}

/// Bin counts for one histogram, sentinel slots included
///
/// The counts sum to the size of the sample set the histogram was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Histogram {
    counts: Vec<usize>,
}

impl Histogram {
    /// All `bins + 2` counts: underflow, interior bins, overflow
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Interior bin counts, sentinels excluded
    pub fn interior(&self) -> &[usize] {
        &self.counts[1..self.counts.len() - 1]
    }

    /// Number of interior bins
    pub fn bins(&self) -> usize {
        self.counts.len() - 2
    }

    /// Count of samples below the window minimum
    pub fn underflow(&self) -> usize {
        self.counts[0]
    }

    /// Count of samples at or above the window maximum
    pub fn overflow(&self) -> usize {
        self.counts[self.counts.len() - 1]
    }

    /// Total number of samples binned, sentinels included
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest count across all slots, sentinels included
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Result of [`fit_histogram`]: the tightened window and its histogram
///
/// The window is returned alongside the counts because callers label the
/// chart axis from the fitted bounds, not the ones they passed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedHistogram {
    /// Window the histogram was recomputed over
    pub window: Window,
    /// Histogram over the fitted window
    pub histogram: Histogram,
}

/// Bin sorted samples into a histogram over `window`
///
/// One left-to-right sweep: each of the `bins + 1` boundary levels is located
/// with a binary search that resumes from the previous boundary's position,
/// so the cursor never backtracks. `O((bins+1) log n)` worst case, near-linear
/// in practice on monotonic boundaries.
pub fn compute_histogram(sorted: &[f64], window: &Window) -> Histogram {
    debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    let mut counts = Vec::with_capacity(window.bins + 2);
    let mut cursor = 0;
    for level in 0..=window.bins {
        let boundary = window.boundary(level);
        let pos = cursor + sorted[cursor..].partition_point(|&x| x < boundary);
        // Level 0 lands the underflow count; later levels the interior bins.
        counts.push(pos - cursor);
        cursor = pos;
    }
    counts.push(sorted.len() - cursor);

    Histogram { counts }
}

/// Fit a histogram window to the populated part of the distribution
///
/// Builds an initial histogram over `window`, trims edge slots whose count is
/// below `count_thresh_frac` of the fullest slot, then recomputes over the
/// narrowed window. The bin count is preserved; only `min` and `stride`
/// tighten. The trim loops are bounded so the fitted window is never empty or
/// inverted, even when a single bin holds every sample.
pub fn fit_histogram(sorted: &[f64], window: &Window, count_thresh_frac: f64) -> FittedHistogram {
    let initial = compute_histogram(sorted, window);
    let threshold = initial.max_count() as f64 * count_thresh_frac;

    let top = window.bins + 1;
    let mut min_level = 1;
    while min_level < top && (initial.counts[min_level] as f64) < threshold {
        min_level += 1;
    }
    let mut max_level = top;
    while max_level > min_level && (initial.counts[max_level] as f64) < threshold {
        max_level -= 1;
    }

    // Keep everything from the low edge of bin `min_level` to the high edge
    // of bin `max_level`. max_level >= min_level holds, so the span is at
    // least one stride wide.
    let min = window.boundary(min_level - 1);
    let max = window.boundary(max_level);
    let fitted = Window::new(min, (max - min) / window.bins as f64, window.bins);

    FittedHistogram {
        histogram: compute_histogram(sorted, &fitted),
        window: fitted,
    }
}
