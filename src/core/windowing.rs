use crate::core::{Sample, Viewport};
use crate::error::{ChartError, ChartResult};

/// Returns the minimal contiguous sub-slice needed to render `viewport`.
///
/// With an inactive viewport this is the full backing slice, no copy. With
/// an active one it contains every sample inside `[start, start + size]`
/// plus at most one sample left of the range and at most one right of it,
/// so partially visible segments still reach the plot edges while
/// scrolling. When every sample lies left of the range the window collapses
/// to the single last sample.
#[must_use]
pub fn visible_window(samples: &[Sample], viewport: Viewport) -> &[Sample] {
    if !viewport.is_active() {
        return samples;
    }

    let range_start = viewport.start();
    let range_end = range_start + viewport.size();

    let first_in_range = samples.partition_point(|sample| sample.x < range_start);
    let begin = first_in_range.saturating_sub(1);
    let end = samples[first_in_range..]
        .iter()
        .position(|sample| sample.x > range_end)
        .map_or(samples.len(), |offset| first_in_range + offset + 1);

    &samples[begin..end]
}

/// Min/max y over a window, seeded from its first element.
pub fn window_y_bounds(window: &[Sample]) -> ChartResult<(f64, f64)> {
    let mut iter = window.iter();
    let first = iter.next().ok_or(ChartError::EmptySeries)?;

    let mut min_y = first.y;
    let mut max_y = first.y;
    for sample in iter {
        min_y = min_y.min(sample.y);
        max_y = max_y.max(sample.y);
    }
    Ok((min_y, max_y))
}
