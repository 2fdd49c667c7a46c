//! Human-Readable Measurement Output
//!
//! Formats one measurement's summary and fitted histogram as a terminal
//! block: statistics lines, the block-glyph chart, and a window caption so
//! the chart's value range is readable without the machine report.

use crate::chart::HistogramChart;
use sparkbench_stats::{FittedHistogram, SummaryStatistics};

/// Format a measurement for terminal display
///
/// The summary carries no unit of its own, so the caller names one; the
/// label is printed verbatim after every statistic and the window caption.
///
/// # Arguments
/// * `name` - Measurement identifier, printed as the block heading
/// * `unit` - Unit label for the sample values (e.g. `"ns"`)
/// * `summary` - Summary statistics of the sample set
/// * `fitted` - Adaptive histogram plus the window it was fitted to
pub fn format_measurement(
    name: &str,
    unit: &str,
    summary: &SummaryStatistics,
    fitted: &FittedHistogram,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", name));
    output.push_str(&format!(
        "  mean: {:.2} {}  noise: {:.2}%  samples: {}\n",
        summary.mean,
        unit,
        summary.noise * 100.0,
        summary.sample_count
    ));
    output.push_str(&format!(
        "  min: {:.2} {u}  median: {:.2} {u}  max: {:.2} {u}\n",
        summary.min,
        summary.median,
        summary.max,
        u = unit
    ));

    output.push_str(&HistogramChart::new(&fitted.histogram).render());

    let window = &fitted.window;
    output.push_str(&format!(
        "  range: [{:.2}, {:.2}) {u}  bin width: {:.2} {u}\n",
        window.min,
        window.max(),
        window.stride,
        u = unit
    ));

    output
}
