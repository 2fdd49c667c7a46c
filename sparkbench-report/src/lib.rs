#![warn(missing_docs)]
//! SparkBench Report - Chart Rendering and Human Output
//!
//! Turns the statistics engine's histograms into compact fixed-width text:
//! - A one-column-per-bin block-glyph chart with sub-character (eighths)
//!   vertical resolution
//! - A human-readable per-measurement summary block for terminal display
//!
//! Machine-readable document formats (JSON, CSV, markdown) are assembled by
//! the surrounding harness, not here.

mod chart;
mod human;

pub use chart::{HistogramChart, NUM_ROWS};
pub use human::format_measurement;
