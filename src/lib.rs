//! chartview: scrollable, zoomable 2D series chart engine.
//!
//! The crate owns viewport state, visible-data windowing and adaptive axis
//! label generation. Pixel drawing stays behind the
//! [`render::SeriesRenderer`] seam so the engine is independent of any
//! specific series geometry or backend.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::ChartView;
pub use error::{ChartError, ChartResult};
