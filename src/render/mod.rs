mod frame;
mod null_renderer;

pub use frame::SeriesFrame;
pub use null_renderer::NullRenderer;

use crate::error::ChartResult;

/// Contract implemented by any series geometry backend (line, bar, ...).
///
/// Backends receive a fully materialized frame per pass, so drawing code
/// stays isolated from viewport, windowing and label logic.
pub trait SeriesRenderer {
    fn draw(&mut self, frame: &SeriesFrame<'_>) -> ChartResult<()>;
}
