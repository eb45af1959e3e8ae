use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Returned by min/max accessors when there are no samples to measure.
    #[error("series contains no samples")]
    EmptySeries,

    #[error("invalid plot size: width={width}, height={height}")]
    InvalidPlotSize { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
