//! Delta-v metric: resonance-gated integral over telemetry samples.
//!
//! ```text
//! ∆v = Isp · η · e^(−α·v₀²) · Σ  P_input · e^(−α·w²) · e^(2α·v₀·v) / max(M, 1e-9) · dt
//! ```
//!
//! The metric is an operational performance functional, not a physical law.
//! Two entry points compute it:
//! - [`DeltaVMetricEngine`] reduces a whole sample slice in one call
//! - [`DeltaVAccumulator`] integrates samples one at a time

pub mod accumulator;
pub mod engine;
pub mod params;
pub mod sample;

pub use accumulator::DeltaVAccumulator;
pub use engine::{DeltaVMetricEngine, compute, compute_parallel};
pub use params::MetricParams;
pub use sample::{INERTIA_FLOOR, Sample};
