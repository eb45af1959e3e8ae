use std::sync::{Mutex, PoisonError};

use tracing::{debug, trace};

use crate::core::{
    LabelFormatter, LabelLocale, LabelSet, PlotSize, Sample, SampleSeries, Viewport,
    horizontal_labels, vertical_labels, visible_window, window_y_bounds,
};
use crate::error::ChartResult;
use crate::interaction::{GestureState, PinchEvent, TouchEvent};
use crate::render::{SeriesFrame, SeriesRenderer};

/// Memoized per-pass label state, torn down by invalidation.
///
/// The mutex doubles as the single-flight guard around the lazy-compute
/// path: exactly one generation happens per invalidation even when a render
/// pass and a gesture callback race on the cache.
#[derive(Debug, Default)]
struct LabelCache {
    labels: Option<LabelSet>,
    formatter: Option<LabelFormatter>,
    plot: Option<PlotSize>,
}

/// Chart aggregate: owns the series, viewport, label caches and gesture
/// state, and exposes the render-pass, configuration and gesture surfaces.
///
/// The series is fixed at construction; displaying different data means
/// building a new `ChartView`.
#[derive(Debug)]
pub struct ChartView {
    series: SampleSeries,
    title: String,
    viewport: Viewport,
    explicit_horizontal: Option<Vec<String>>,
    explicit_vertical: Option<Vec<String>>,
    locale: LabelLocale,
    gesture: GestureState,
    cache: Mutex<LabelCache>,
}

impl ChartView {
    #[must_use]
    pub fn new(series: SampleSeries, title: impl Into<String>) -> Self {
        Self {
            series,
            title: title.into(),
            viewport: Viewport::inactive(),
            explicit_horizontal: None,
            explicit_vertical: None,
            locale: LabelLocale::default(),
            gesture: GestureState::default(),
            cache: Mutex::new(LabelCache::default()),
        }
    }

    /// Fixed horizontal labels; generation is bypassed for that axis.
    #[must_use]
    pub fn with_horizontal_labels(mut self, labels: Vec<String>) -> Self {
        self.explicit_horizontal = Some(labels);
        self
    }

    /// Fixed vertical labels; generation is bypassed for that axis.
    #[must_use]
    pub fn with_vertical_labels(mut self, labels: Vec<String>) -> Self {
        self.explicit_vertical = Some(labels);
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: LabelLocale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn series(&self) -> &SampleSeries {
        &self.series
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Visible `(min_x, max_x, min_y, max_y)`.
    ///
    /// The x-bounds come from the viewport (or the full series when it is
    /// inactive); the y-bounds are measured over the windowed samples only,
    /// so the vertical scale follows what is currently on screen.
    pub fn visible_range(&self) -> ChartResult<(f64, f64, f64, f64)> {
        let min_x = self.viewport.min_x(&self.series)?;
        let max_x = self.viewport.max_x(&self.series)?;
        let (min_y, max_y) = window_y_bounds(self.window())?;
        Ok((min_x, max_x, min_y, max_y))
    }

    /// Minimal contiguous sample run covering the current viewport.
    #[must_use]
    pub fn window(&self) -> &[Sample] {
        visible_window(self.series.samples(), self.viewport)
    }

    /// Lazily generated labels for the given plot size.
    ///
    /// Results are memoized until the viewport, plot size or y-range
    /// changes. Explicit labels supplied at construction always win for
    /// their axis.
    pub fn labels(&self, plot: PlotSize) -> ChartResult<LabelSet> {
        plot.validate()?;

        let mut cache = self.lock_cache();
        if cache.plot != Some(plot) {
            cache.labels = None;
            cache.plot = Some(plot);
        }
        if let Some(labels) = &cache.labels {
            return Ok(labels.clone());
        }

        let (min_x, max_x, min_y, max_y) = self.visible_range()?;
        let formatter = *cache
            .formatter
            .get_or_insert_with(|| LabelFormatter::for_span(max_y - min_y, self.locale));

        let horizontal = match &self.explicit_horizontal {
            Some(labels) => labels.clone(),
            None => horizontal_labels(min_x, max_x, plot.width, formatter),
        };
        let vertical = match &self.explicit_vertical {
            Some(labels) => labels.clone(),
            None => vertical_labels(min_y, max_y, plot.height, formatter),
        };

        let labels = LabelSet {
            horizontal,
            vertical,
        };
        cache.labels = Some(labels.clone());
        trace!(
            horizontal = labels.horizontal.len(),
            vertical = labels.vertical.len(),
            "generated axis labels"
        );
        Ok(labels)
    }

    /// Runs one render pass against a geometry backend.
    ///
    /// A degenerate y-range suppresses series geometry but still delivers
    /// axis labels and the title.
    pub fn render<R: SeriesRenderer>(&self, renderer: &mut R, plot: PlotSize) -> ChartResult<()> {
        let (min_x, max_x, min_y, max_y) = self.visible_range()?;
        let labels = self.labels(plot)?;
        let frame = SeriesFrame {
            title: &self.title,
            samples: self.window(),
            min_x,
            max_x,
            min_y,
            max_y,
            horizontal_labels: &labels.horizontal,
            vertical_labels: &labels.vertical,
            draw_geometry: min_y != max_y,
        };
        renderer.draw(&frame)
    }

    /// Sets the viewport directly. The new range is not clamped here; it is
    /// repaired lazily by the next interactive pan or zoom.
    pub fn set_viewport(&mut self, start: f64, size: f64) {
        self.viewport.set(start, size);
        debug!(start, size, "set viewport");
        self.invalidate_labels();
    }

    pub fn set_scrollable(&mut self, scrollable: bool) {
        self.gesture.set_scrollable(scrollable);
    }

    /// Enabling scaling implicitly enables scrolling as well.
    pub fn set_scalable(&mut self, scalable: bool) {
        self.gesture.set_scalable(scalable);
    }

    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.gesture.is_scrollable()
    }

    #[must_use]
    pub fn is_scalable(&self) -> bool {
        self.gesture.is_scalable()
    }

    #[must_use]
    pub fn is_user_interacting(&self) -> bool {
        self.gesture.is_user_interacting()
    }

    /// Feeds one touch event through the gesture state machine.
    ///
    /// Returns whether the event was consumed. Unhandled events (chart not
    /// scrollable) fall back to the host's default handling. While a pinch
    /// is in progress, touch events are consumed without panning: scale and
    /// pan are mutually exclusive per event, scale wins.
    pub fn handle_touch(&mut self, event: TouchEvent, content_width: f64) -> bool {
        if !self.gesture.is_scrollable() {
            return false;
        }
        if self.gesture.is_scalable() && self.gesture.is_scale_active() {
            return true;
        }

        if let Some(pixel_delta) = self.gesture.on_touch(event) {
            trace!(pixel_delta, content_width, "touch pan");
            self.viewport
                .pan_by_pixels(pixel_delta, content_width, &self.series);
            self.invalidate_labels();
        }
        true
    }

    /// Applies a pinch-scale event to the viewport.
    ///
    /// Returns false (unhandled) when scaling is disabled. Zooming changes
    /// the visible y-range, so the formatter precision is invalidated along
    /// with the labels.
    pub fn handle_pinch(&mut self, event: PinchEvent) -> bool {
        if !self.gesture.is_scalable() {
            return false;
        }

        self.gesture.set_scale_active(event.in_progress);
        trace!(
            scale_factor = event.scale_factor,
            in_progress = event.in_progress,
            "pinch zoom"
        );
        self.viewport.zoom_by_factor(event.scale_factor, &self.series);
        self.invalidate_labels();
        self.invalidate_formatter();
        true
    }

    /// Drops the cached label set; the next `labels` call regenerates it.
    pub fn invalidate_labels(&self) {
        self.lock_cache().labels = None;
    }

    /// Drops the cached formatter precision along with the labels.
    pub fn invalidate_formatter(&self) {
        let mut cache = self.lock_cache();
        cache.formatter = None;
        cache.labels = None;
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, LabelCache> {
        // single logical UI thread: a poisoned lock only means a caller
        // panicked mid-generation, the cache itself stays coherent
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
