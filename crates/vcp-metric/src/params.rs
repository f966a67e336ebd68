//! Metric parameters.

use serde::{Deserialize, Serialize};
use vcp_core::Real;

/// Parameters for the Delta-v metric.
///
/// Each field defaults independently when absent from a request, so
/// `{"alpha": 0.0}` keeps `isp`, `eta` and `v0` at their defaults.
///
/// | Parameter | Default | Effect |
/// |-----------|---------|--------|
/// | `isp`     | 1.0     | Scales the overall magnitude. |
/// | `eta`     | 1.0     | Efficiency coefficient. |
/// | `alpha`   | 0.1     | Resonance sensitivity of both gates. |
/// | `v0`      | 1.0     | Reference velocity. |
///
/// Nothing is validated here. Keep `2·alpha·v0·velocity` well below ~709 or
/// the velocity gate overflows to infinity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricParams {
    /// Specific efficiency factor.
    #[serde(default = "default_isp")]
    pub isp: Real,
    /// System efficiency coefficient.
    #[serde(default = "default_eta")]
    pub eta: Real,
    /// Resonance sensitivity coefficient.
    #[serde(default = "default_alpha")]
    pub alpha: Real,
    /// Reference velocity state `v₀`.
    #[serde(default = "default_v0")]
    pub v0: Real,
}

fn default_isp() -> Real {
    1.0
}

fn default_eta() -> Real {
    1.0
}

fn default_alpha() -> Real {
    0.1
}

fn default_v0() -> Real {
    1.0
}

impl Default for MetricParams {
    fn default() -> Self {
        Self {
            isp: default_isp(),
            eta: default_eta(),
            alpha: default_alpha(),
            v0: default_v0(),
        }
    }
}

impl MetricParams {
    /// `isp · eta · exp(-alpha · v0²)`, applied once to the accumulated sum.
    pub fn outer_scale(&self) -> Real {
        self.isp * self.eta * (-self.alpha * self.v0 * self.v0).exp()
    }
}
