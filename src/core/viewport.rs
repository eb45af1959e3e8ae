use serde::{Deserialize, Serialize};

use crate::core::SampleSeries;
use crate::error::{ChartError, ChartResult};

/// Visible x-range of the chart: `[start, start + size)`.
///
/// `size == 0.0` is the inactive sentinel meaning "show the full series".
/// While active, pan and zoom keep `start >= first.x` and
/// `start + size <= last.x` by clamping, never by rejecting a mutation.
/// An explicitly set viewport is not clamped until the next interactive
/// pan or zoom touches it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    start: f64,
    size: f64,
}

impl Viewport {
    /// Inactive viewport showing the full series.
    #[must_use]
    pub fn inactive() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(start: f64, size: f64) -> Self {
        Self { start, size }
    }

    #[must_use]
    pub fn start(self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn size(self) -> f64 {
        self.size
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.size != 0.0
    }

    /// Direct assignment, deliberately without clamping: an external caller
    /// may park the viewport outside the data bounds until the user interacts.
    pub fn set(&mut self, start: f64, size: f64) {
        self.start = start;
        self.size = size;
    }

    /// Left edge of the visible range, falling back to the first sample when
    /// no viewport is active.
    pub fn min_x(self, series: &SampleSeries) -> ChartResult<f64> {
        if self.is_active() {
            return Ok(self.start);
        }
        series.first().map(|s| s.x).ok_or(ChartError::EmptySeries)
    }

    /// Right edge of the visible range, falling back to the last sample when
    /// no viewport is active.
    pub fn max_x(self, series: &SampleSeries) -> ChartResult<f64> {
        if self.is_active() {
            return Ok(self.start + self.size);
        }
        series.last().map(|s| s.x).ok_or(ChartError::EmptySeries)
    }

    /// Translates a screen-space drag delta into a data-space shift.
    ///
    /// Dragging right (positive delta) moves the visible window left, hence
    /// the inverted sign. No-op when inactive or when the series is empty.
    pub fn pan_by_pixels(&mut self, pixel_delta: f64, pixel_width: f64, series: &SampleSeries) {
        if !self.is_active() {
            return;
        }
        let (Some(first), Some(last)) = (series.first(), series.last()) else {
            return;
        };
        if !pixel_delta.is_finite() || !pixel_width.is_finite() || pixel_width == 0.0 {
            return;
        }

        self.start -= pixel_delta * self.size / pixel_width;
        self.clamp_to(first.x, last.x);
    }

    /// Rescales the visible range around its center.
    ///
    /// `new_size = size * factor; diff = new_size - size; start += diff / 2;
    /// size -= diff`. A factor below 1.0 therefore grows the window (zoom
    /// out), which is the only case that can push it past the data bounds
    /// and requires re-clamping.
    pub fn zoom_by_factor(&mut self, factor: f64, series: &SampleSeries) {
        if !self.is_active() || !factor.is_finite() {
            return;
        }

        let new_size = self.size * factor;
        let diff = new_size - self.size;
        self.start += diff / 2.0;
        self.size -= diff;

        if diff < 0.0 {
            let (Some(first), Some(last)) = (series.first(), series.last()) else {
                return;
            };

            if self.start < first.x {
                self.start = first.x;
            }

            let overlap = self.start + self.size - last.x;
            if overlap > 0.0 {
                if self.start - overlap > first.x {
                    // room on the left: shift the window back into range
                    self.start -= overlap;
                } else {
                    // maximal zoom-out: pin to the full data range
                    self.start = first.x;
                    self.size = last.x - self.start;
                }
            }
        }
    }

    fn clamp_to(&mut self, min_x: f64, max_x: f64) {
        if self.start < min_x {
            self.start = min_x;
        } else if self.start + self.size > max_x {
            self.start = max_x - self.size;
        }
    }
}
