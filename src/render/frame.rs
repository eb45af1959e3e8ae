use crate::core::Sample;
use crate::error::{ChartError, ChartResult};

/// Fully materialized per-pass input for a series renderer.
///
/// `draw_geometry` is false when the visible y-range is degenerate
/// (`min_y == max_y`): slope is undefined there, so backends must skip the
/// series geometry while axis labels and the title still render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesFrame<'a> {
    pub title: &'a str,
    pub samples: &'a [Sample],
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub horizontal_labels: &'a [String],
    pub vertical_labels: &'a [String],
    pub draw_geometry: bool,
}

impl SeriesFrame<'_> {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.min_x.is_finite()
            || !self.max_x.is_finite()
            || !self.min_y.is_finite()
            || !self.max_y.is_finite()
        {
            return Err(ChartError::InvalidData(
                "frame bounds must be finite".to_owned(),
            ));
        }
        if self.min_x > self.max_x {
            return Err(ChartError::InvalidData(
                "frame x-bounds must be ordered".to_owned(),
            ));
        }
        if self.draw_geometry && self.min_y == self.max_y {
            return Err(ChartError::InvalidData(
                "degenerate y-range frames must not request geometry".to_owned(),
            ));
        }
        Ok(())
    }
}
