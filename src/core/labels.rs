use serde::{Deserialize, Serialize};

use crate::core::LabelFormatter;

/// Target pixel spacing between adjacent horizontal-axis labels.
pub const HORIZONTAL_LABEL_STEP_PX: f64 = 100.0;
/// Target pixel spacing between adjacent vertical-axis labels.
pub const VERTICAL_LABEL_STEP_PX: f64 = 80.0;

/// Generated axis labels for one render pass.
///
/// Vertical labels are stored top-to-bottom: index 0 sits at the max-y grid
/// line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    pub horizontal: Vec<String>,
    pub vertical: Vec<String>,
}

/// `floor(pixel_width / 100) + 1` labels evenly spaced over `[min_x, max_x]`,
/// both ends inclusive.
#[must_use]
pub fn horizontal_labels(
    min_x: f64,
    max_x: f64,
    pixel_width: f64,
    formatter: LabelFormatter,
) -> Vec<String> {
    let count = (pixel_width / HORIZONTAL_LABEL_STEP_PX) as usize;
    if count == 0 {
        return vec![formatter.format(min_x)];
    }

    let span = max_x - min_x;
    (0..=count)
        .map(|i| formatter.format(min_x + span * i as f64 / count as f64))
        .collect()
}

/// `floor(pixel_height / 80) + 1` labels over `[min_y, max_y]`, stored in
/// screen order: index 0 carries the maximum value.
#[must_use]
pub fn vertical_labels(
    min_y: f64,
    max_y: f64,
    pixel_height: f64,
    formatter: LabelFormatter,
) -> Vec<String> {
    let count = (pixel_height / VERTICAL_LABEL_STEP_PX) as usize;
    if count == 0 {
        return vec![formatter.format(max_y)];
    }

    let span = max_y - min_y;
    let mut labels = vec![String::new(); count + 1];
    for i in 0..=count {
        labels[count - i] = formatter.format(min_y + span * i as f64 / count as f64);
    }
    labels
}
