use approx::assert_abs_diff_eq;
use chartview::core::{PlotSize, Sample, SampleSeries};
use chartview::render::NullRenderer;
use chartview::{ChartError, ChartView};

fn sample_series() -> SampleSeries {
    SampleSeries::new(vec![
        Sample::new(0.0, 0.0),
        Sample::new(1.0, 10.0),
        Sample::new(2.0, 5.0),
        Sample::new(3.0, 20.0),
    ])
    .expect("valid series")
}

#[test]
fn visible_range_covers_the_full_series_when_inactive() {
    let chart = ChartView::new(sample_series(), "demo");

    let (min_x, max_x, min_y, max_y) = chart.visible_range().expect("range");
    assert_abs_diff_eq!(min_x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(max_x, 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(min_y, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(max_y, 20.0, epsilon = 1e-12);
}

#[test]
fn y_bounds_reflect_only_windowed_samples() {
    let mut chart = ChartView::new(sample_series(), "demo");
    chart.set_viewport(1.0, 1.0);

    // the window spans the whole series here (padding on both edges), so the
    // y-range still includes the padded samples
    let (min_x, max_x, min_y, max_y) = chart.visible_range().expect("range");
    assert_abs_diff_eq!(min_x, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(max_x, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(min_y, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(max_y, 20.0, epsilon = 1e-12);
}

#[test]
fn empty_series_without_viewport_fails_the_render_pass() {
    let chart = ChartView::new(SampleSeries::empty(), "empty");

    assert!(matches!(
        chart.visible_range(),
        Err(ChartError::EmptySeries)
    ));

    let mut renderer = NullRenderer::default();
    assert!(
        chart
            .render(&mut renderer, PlotSize::new(400.0, 240.0))
            .is_err()
    );
}

#[test]
fn labels_match_the_plot_dimensions() {
    let chart = ChartView::new(sample_series(), "demo");

    let labels = chart.labels(PlotSize::new(450.0, 250.0)).expect("labels");
    assert_eq!(labels.horizontal.len(), 5);
    assert_eq!(labels.vertical.len(), 4);
}

#[test]
fn labels_reject_an_invalid_plot_size() {
    let chart = ChartView::new(sample_series(), "demo");

    let err = chart
        .labels(PlotSize::new(0.0, 250.0))
        .expect_err("zero width must fail");
    assert!(matches!(err, ChartError::InvalidPlotSize { .. }));

    let err = chart
        .labels(PlotSize::new(f64::NAN, 250.0))
        .expect_err("nan width must fail");
    assert!(matches!(err, ChartError::InvalidPlotSize { .. }));
}

#[test]
fn explicit_labels_bypass_generation() {
    let chart = ChartView::new(sample_series(), "demo")
        .with_horizontal_labels(vec!["mon".into(), "tue".into()])
        .with_vertical_labels(vec!["high".into(), "low".into()]);

    let labels = chart.labels(PlotSize::new(800.0, 600.0)).expect("labels");
    assert_eq!(labels.horizontal, vec!["mon", "tue"]);
    assert_eq!(labels.vertical, vec!["high", "low"]);
}

#[test]
fn labels_are_regenerated_after_a_viewport_change() {
    let mut chart = ChartView::new(sample_series(), "demo");
    let plot = PlotSize::new(400.0, 240.0);

    let before = chart.labels(plot).expect("labels");
    chart.set_viewport(1.0, 0.5);
    let after = chart.labels(plot).expect("labels");

    assert_ne!(before.horizontal, after.horizontal);
}

#[test]
fn labels_are_regenerated_when_the_plot_size_changes() {
    let chart = ChartView::new(sample_series(), "demo");

    let small = chart.labels(PlotSize::new(200.0, 160.0)).expect("labels");
    let large = chart.labels(PlotSize::new(600.0, 400.0)).expect("labels");

    assert_eq!(small.horizontal.len(), 3);
    assert_eq!(large.horizontal.len(), 7);
}

#[test]
fn formatter_precision_is_pinned_until_invalidated() {
    // full series y-span is 20 -> 1 fraction digit, so 2.5 keeps its decimal
    let series = SampleSeries::new(vec![
        Sample::new(0.0, 0.0),
        Sample::new(2.5, 10.0),
        Sample::new(5.0, 20.0),
    ])
    .expect("valid series");
    let mut chart = ChartView::new(series, "demo");
    let plot = PlotSize::new(200.0, 160.0);

    let labels = chart.labels(plot).expect("labels");
    assert_eq!(labels.horizontal, vec!["0", "2.5", "5"]);

    // narrowing the viewport shrinks the y-span, but the formatter keeps its
    // precision until a zoom (or explicit call) invalidates it
    chart.set_viewport(0.0, 2.4);
    let labels = chart.labels(plot).expect("labels");
    assert_eq!(labels.horizontal, vec!["0", "1.2", "2.4"]);

    chart.invalidate_formatter();
    let labels = chart.labels(plot).expect("labels");
    // y-span is now 10 -> 3 fraction digits
    assert_eq!(labels.horizontal, vec!["0", "1.2", "2.4"]);
    assert_eq!(labels.vertical.last().map(String::as_str), Some("0"));
}

#[test]
fn render_reports_window_and_label_counts() {
    let mut chart = ChartView::new(sample_series(), "demo");
    chart.set_viewport(1.0, 1.0);

    let mut renderer = NullRenderer::default();
    chart
        .render(&mut renderer, PlotSize::new(450.0, 250.0))
        .expect("render");

    assert_eq!(renderer.last_sample_count, 4);
    assert_eq!(renderer.last_horizontal_label_count, 5);
    assert_eq!(renderer.last_vertical_label_count, 4);
    assert!(renderer.last_drew_geometry);
}

#[test]
fn degenerate_y_range_suppresses_geometry_but_not_labels() {
    let series = SampleSeries::new(vec![Sample::new(0.0, 7.0), Sample::new(10.0, 7.0)])
        .expect("valid series");
    let chart = ChartView::new(series, "flat");

    let mut renderer = NullRenderer::default();
    chart
        .render(&mut renderer, PlotSize::new(450.0, 250.0))
        .expect("render");

    assert!(!renderer.last_drew_geometry);
    assert_eq!(renderer.last_vertical_label_count, 4);
}

#[test]
fn title_and_series_are_exposed_to_the_drawing_collaborator() {
    let chart = ChartView::new(sample_series(), "cpu load");

    assert_eq!(chart.title(), "cpu load");
    assert_eq!(chart.series().len(), 4);
    assert_eq!(chart.window().len(), 4);
}

#[test]
fn viewport_state_serializes_for_host_snapshots() {
    let mut chart = ChartView::new(sample_series(), "demo");
    chart.set_viewport(1.5, 0.75);

    let json = serde_json::to_value(chart.viewport()).expect("serialize");
    assert_eq!(json["start"], 1.5);
    assert_eq!(json["size"], 0.75);
}
