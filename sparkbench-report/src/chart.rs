//! Block-Glyph Histogram Chart
//!
//! Renders a histogram as a fixed-height text chart, one column per interior
//! bin. Each cell quantizes its bar height to eighths of a character cell and
//! maps the level through a fixed glyph table, so a full column resolves
//! `NUM_ROWS * 8` height steps.

use sparkbench_stats::Histogram;

/// Fixed chart height in character rows
pub const NUM_ROWS: usize = 10;

/// Fill levels 0..=8 as vertical-eighths block glyphs (blank through full)
const GLYPHS: [char; 9] = [
    ' ', '\u{2581}', '\u{2582}', '\u{2583}', '\u{2584}', '\u{2585}', '\u{2586}', '\u{2587}',
    '\u{2588}',
];

/// Non-owning view over a histogram's counts for one render pass
///
/// Borrows the bin vector for the duration of the render call; the sentinel
/// underflow/overflow slots participate in scaling but are not drawn as
/// columns.
pub struct HistogramChart<'a> {
    counts: &'a [usize],
}

impl<'a> HistogramChart<'a> {
    /// View the given histogram for rendering
    pub fn new(histogram: &'a Histogram) -> Self {
        Self {
            counts: histogram.counts(),
        }
    }

    fn bins(&self) -> usize {
        self.counts.len() - 2
    }

    /// Quantize bar heights into a rows-by-bins grid of levels in `[0, 8]`
    ///
    /// Row 0 is the bottom row. Bars scale against the largest count in the
    /// whole vector, sentinels included, so the fullest slot spans every row.
    fn quantize(&self) -> Vec<u8> {
        let max_count = self.counts.iter().copied().max().unwrap_or(0);
        debug_assert!(max_count > 0, "cannot chart an all-zero histogram");

        let bins = self.bins();
        let mut grid = vec![0u8; bins * NUM_ROWS];
        for (bin, &count) in self.counts[1..=bins].iter().enumerate() {
            // Divide instead of multiplying by a precomputed reciprocal:
            // count == max_count must scale to exactly 1.0, and 1/max rounds
            // one ulp short for counts like 49 or 107.
            let scaled = count as f64 / max_count as f64;
            let num_full = (scaled * NUM_ROWS as f64) as usize;
            debug_assert!(num_full <= NUM_ROWS, "bar exceeds chart height");

            for row in 0..num_full {
                grid[row * bins + bin] = 8;
            }
            if num_full < NUM_ROWS {
                grid[num_full * bins + bin] = (scaled.fract() * 8.0) as u8;
            }
        }
        grid
    }

    /// Render the chart as a bordered multi-line string
    ///
    /// Exactly [`NUM_ROWS`] newline-terminated lines, each `bins + 2`
    /// characters wide counting the `|` borders. Axis labels are the
    /// caller's business; the fitted window carries the bounds they need.
    pub fn render(&self) -> String {
        let bins = self.bins();
        let grid = self.quantize();

        // Worst case every glyph is 3 UTF-8 bytes, plus borders and newline.
        let mut output = String::with_capacity(NUM_ROWS * (3 * bins + 3));
        for row in (0..NUM_ROWS).rev() {
            output.push('|');
            for bin in 0..bins {
                output.push(GLYPHS[grid[row * bins + bin] as usize]);
            }
            output.push('|');
            output.push('\n');
        }
        output
    }
}
