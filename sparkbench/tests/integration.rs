//! Integration tests for SparkBench
//!
//! Exercise the full post-processing pipeline the harness runs per
//! measurement: sorted samples through statistics, adaptive fitting, and
//! chart rendering.

use sparkbench::{
    HistogramChart, NUM_ROWS, Window, compute_histogram, compute_noise, compute_percentiles,
    compute_summary, fit_histogram, format_measurement,
};

fn sorted(mut samples: Vec<f64>) -> Vec<f64> {
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap());
    samples
}

/// A clustered distribution with a few far-out stragglers, the shape a noisy
/// benchmark run produces.
fn noisy_run() -> Vec<f64> {
    let mut samples: Vec<f64> = (0..300)
        .map(|x| 1000.0 + ((x * 71) % 100) as f64)
        .collect();
    samples.extend([400.0, 5000.0, 5200.0]);
    sorted(samples)
}

#[test]
fn test_report_pipeline() {
    let samples = noisy_run();
    let sum: f64 = samples.iter().sum();

    let summary = compute_summary(&samples, sum);
    assert_eq!(summary.sample_count, samples.len());
    assert!(summary.noise.is_finite());
    assert_eq!(summary.min, 400.0);
    assert_eq!(summary.max, 5200.0);

    let window = Window::from_bounds(summary.min, summary.max, 20).unwrap();
    let fitted = fit_histogram(&samples, &window, 0.05);

    // Every sample lands somewhere in the refitted histogram.
    assert_eq!(fitted.histogram.total(), samples.len());
    assert_eq!(fitted.histogram.bins(), 20);
    // The stragglers get trimmed out of the window.
    assert!(fitted.window.max() < 5200.0);

    let block = format_measurement("pipeline", "ns", &summary, &fitted);
    assert_eq!(block.lines().count(), 3 + NUM_ROWS + 1);
}

#[test]
fn test_chart_width_tracks_bin_count() {
    let samples = noisy_run();
    for bins in [1, 8, 40] {
        let window = Window::from_bounds(400.0, 5200.0, bins).unwrap();
        let hist = compute_histogram(&samples, &window);
        let rendered = HistogramChart::new(&hist).render();

        assert_eq!(rendered.lines().count(), NUM_ROWS);
        for line in rendered.lines() {
            assert_eq!(line.chars().count(), bins + 2);
        }
    }
}

#[test]
fn test_percentiles_from_pipeline_samples() {
    let samples = sorted((1..=5).map(|x| x as f64).collect());
    let values = compute_percentiles(&samples, &[0, 50, 100]);
    assert_eq!(values, vec![1.0, 3.0, 5.0]);
}

#[test]
fn test_noise_sentinel_for_short_runs() {
    for n in 0..5 {
        let samples: Vec<f64> = (0..n).map(|x| 100.0 + x as f64).collect();
        assert!(compute_noise(&samples, samples.iter().sum()).is_infinite());
    }

    let steady = vec![100.0; 5];
    assert_eq!(compute_noise(&steady, 500.0), 0.0);
}

#[test]
fn test_degenerate_all_equal_samples() {
    // Zero-variance run: the fit must still produce a usable window and the
    // chart must still be full-size.
    let samples = vec![250.0; 64];
    let window = Window::new(200.0, 10.0, 12);
    let fitted = fit_histogram(&samples, &window, 0.5);

    assert_eq!(fitted.histogram.total(), 64);
    assert!(fitted.window.stride > 0.0);

    let rendered = HistogramChart::new(&fitted.histogram).render();
    assert_eq!(rendered.lines().count(), NUM_ROWS);

    // The single occupied column is drawn at full height.
    let full_cells = rendered.chars().filter(|&c| c == '\u{2588}').count();
    assert_eq!(full_cells, NUM_ROWS);
}
