//! Streaming Delta-v accumulator.

use serde::{Deserialize, Serialize};
use vcp_core::Real;

use crate::params::MetricParams;
use crate::sample::Sample;

/// Running form of [`compute`](crate::compute).
///
/// Feeding the same samples in the same order yields exactly the value
/// `compute` returns for the slice.
///
/// ```rust
/// use vcp_metric::{DeltaVAccumulator, Sample};
///
/// let mut metric = DeltaVAccumulator::default();
/// metric.integrate(&Sample::new(100.0, 0.5, 1.2, 10.0, 1.0));
/// metric.integrate(&Sample::new(90.0, 0.6, 1.1, 9.0, 1.0));
///
/// assert!(metric.delta_v() > 0.0);
/// assert_eq!(metric.sample_count(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeltaVAccumulator {
    params: MetricParams,
    /// Sum of contributions before outer scaling.
    accumulated: Real,
    sample_count: u64,
}

impl DeltaVAccumulator {
    pub fn new(params: MetricParams) -> Self {
        Self {
            params,
            accumulated: 0.0,
            sample_count: 0,
        }
    }

    /// Add one sample's contribution.
    pub fn integrate(&mut self, sample: &Sample) {
        self.accumulated += sample.contribution(self.params.alpha, self.params.v0);
        self.sample_count += 1;
    }

    /// Outer-scaled value of everything integrated so far.
    pub fn delta_v(&self) -> Real {
        self.params.outer_scale() * self.accumulated
    }

    /// Zero the sum, keep the parameters.
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
        self.sample_count = 0;
    }

    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    pub fn params(&self) -> &MetricParams {
        &self.params
    }
}

impl Extend<Sample> for DeltaVAccumulator {
    fn extend<I: IntoIterator<Item = Sample>>(&mut self, iter: I) {
        for s in iter {
            self.integrate(&s);
        }
    }
}
