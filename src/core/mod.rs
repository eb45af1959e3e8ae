pub mod formatter;
pub mod labels;
pub mod series;
pub mod types;
pub mod viewport;
pub mod windowing;

pub use formatter::{LabelFormatter, LabelLocale, max_fraction_digits_for_span};
pub use labels::{
    HORIZONTAL_LABEL_STEP_PX, LabelSet, VERTICAL_LABEL_STEP_PX, horizontal_labels, vertical_labels,
};
pub use series::SampleSeries;
pub use types::{PlotSize, Sample};
pub use viewport::Viewport;
pub use windowing::{visible_window, window_y_bounds};
