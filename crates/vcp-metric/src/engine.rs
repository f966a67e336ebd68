//! Batch reduction of a sample slice into one Delta-v value.

use rayon::prelude::*;
use vcp_core::Real;

use crate::params::MetricParams;
use crate::sample::Sample;

/// Sequential Delta-v over `samples` in order.
///
/// An empty slice gives 0.0 whatever the parameters.
pub fn compute(samples: &[Sample], params: &MetricParams) -> Real {
    let (alpha, v0) = (params.alpha, params.v0);
    let accumulated = samples
        .iter()
        .fold(0.0, |acc, s| acc + s.contribution(alpha, v0));
    params.outer_scale() * accumulated
}

/// Delta-v with contributions summed on the rayon pool.
///
/// Summation order is up to rayon's work splitting, so the result agrees
/// with [`compute`] to rounding but not bit for bit.
pub fn compute_parallel(samples: &[Sample], params: &MetricParams) -> Real {
    let (alpha, v0) = (params.alpha, params.v0);
    let accumulated: Real = samples
        .par_iter()
        .map(|s| s.contribution(alpha, v0))
        .sum();
    params.outer_scale() * accumulated
}

/// Chooses between sequential and parallel reduction by input size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeltaVMetricEngine {
    parallel_threshold: Option<usize>,
}

impl DeltaVMetricEngine {
    /// Always-sequential engine.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: None,
        }
    }

    /// Use [`compute_parallel`] once `samples.len() >= threshold`.
    pub fn with_parallel_threshold(threshold: usize) -> Self {
        Self {
            parallel_threshold: Some(threshold),
        }
    }

    pub fn parallel_threshold(&self) -> Option<usize> {
        self.parallel_threshold
    }

    pub fn uses_parallel(&self, sample_count: usize) -> bool {
        matches!(self.parallel_threshold, Some(t) if sample_count >= t)
    }

    pub fn compute(&self, samples: &[Sample], params: &MetricParams) -> Real {
        if self.uses_parallel(samples.len()) {
            compute_parallel(samples, params)
        } else {
            compute(samples, params)
        }
    }
}
