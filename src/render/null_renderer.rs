use crate::error::ChartResult;
use crate::render::{SeriesFrame, SeriesRenderer};

/// No-op renderer used by tests and headless chart usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_sample_count: usize,
    pub last_horizontal_label_count: usize,
    pub last_vertical_label_count: usize,
    pub last_drew_geometry: bool,
}

impl SeriesRenderer for NullRenderer {
    fn draw(&mut self, frame: &SeriesFrame<'_>) -> ChartResult<()> {
        frame.validate()?;
        self.last_sample_count = frame.samples.len();
        self.last_horizontal_label_count = frame.horizontal_labels.len();
        self.last_vertical_label_count = frame.vertical_labels.len();
        self.last_drew_geometry = frame.draw_geometry;
        Ok(())
    }
}
