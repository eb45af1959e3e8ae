use serde::{Deserialize, Serialize};

use crate::core::Sample;
use crate::error::{ChartError, ChartResult};

/// Immutable-after-construction sample sequence, ascending in x.
///
/// The ascending order is a caller contract: it is asserted in debug builds
/// only, and windowing results are undefined when it is violated. Replacing
/// the data of a chart means building a new series (and chart) instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SampleSeries {
    samples: Vec<Sample>,
}

impl SampleSeries {
    /// Wraps samples sorted ascending by x. An empty series is valid but
    /// degenerate: bound queries on it fail with [`ChartError::EmptySeries`].
    pub fn new(samples: Vec<Sample>) -> ChartResult<Self> {
        for sample in &samples {
            if !sample.x.is_finite() || !sample.y.is_finite() {
                return Err(ChartError::InvalidData(
                    "sample values must be finite".to_owned(),
                ));
            }
        }
        debug_assert!(
            samples.windows(2).all(|pair| pair[0].x <= pair[1].x),
            "samples must be sorted ascending by x"
        );

        Ok(Self { samples })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<Sample> {
        self.samples.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<Sample> {
        self.samples.last().copied()
    }
}
