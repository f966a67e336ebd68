//! Telemetry samples.

use serde::{Deserialize, Serialize};
use vcp_core::Real;

/// Smallest inertia used in the integrand.
pub const INERTIA_FLOOR: Real = 1e-9;

/// One telemetry observation.
///
/// All five fields are required on the wire; a request missing any of them
/// fails to decode. Values are stored as given; the inertia floor is applied
/// when the contribution is computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Compute or power input `P_input(t)`.
    pub p_input: Real,
    /// Workload intensity `w(t)`.
    pub workload: Real,
    /// Instantaneous adaptation velocity `v(t)`.
    pub velocity: Real,
    /// Effective system inertia `M(t)`.
    pub inertia: Real,
    /// Interval length. Negative values are integrated as given.
    pub dt: Real,
}

impl Sample {
    pub fn new(p_input: Real, workload: Real, velocity: Real, inertia: Real, dt: Real) -> Self {
        Self {
            p_input,
            workload,
            velocity,
            inertia,
            dt,
        }
    }

    /// `max(inertia, 1e-9)`; guards division by zero or negative inertia.
    pub fn inertia_safe(&self) -> Real {
        self.inertia.max(INERTIA_FLOOR)
    }

    /// `exp(-alpha · workload²)`, in (0, 1].
    pub fn workload_gate(&self, alpha: Real) -> Real {
        (-alpha * self.workload * self.workload).exp()
    }

    /// `exp(2 · alpha · v0 · velocity)`.
    ///
    /// Unbounded: saturates to `+inf` once the exponent passes ~709.78, and
    /// that infinity carries through to the metric.
    pub fn velocity_gate(&self, alpha: Real, v0: Real) -> Real {
        (2.0 * alpha * v0 * self.velocity).exp()
    }

    /// `P_input · workload_gate · velocity_gate / inertia_safe · dt`.
    pub fn contribution(&self, alpha: Real, v0: Real) -> Real {
        let integrand = self.p_input * self.workload_gate(alpha) * self.velocity_gate(alpha, v0)
            / self.inertia_safe();
        integrand * self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inertia_floor_applies_to_zero_and_negative() {
        assert_eq!(Sample::new(1.0, 0.0, 0.0, 0.0, 1.0).inertia_safe(), INERTIA_FLOOR);
        assert_eq!(Sample::new(1.0, 0.0, 0.0, -5.0, 1.0).inertia_safe(), INERTIA_FLOOR);
        assert_eq!(Sample::new(1.0, 0.0, 0.0, 2.0, 1.0).inertia_safe(), 2.0);
    }

    #[test]
    fn workload_gate_is_one_at_zero_and_decays() {
        let s0 = Sample::new(1.0, 0.0, 0.0, 1.0, 1.0);
        let s5 = Sample::new(1.0, 5.0, 0.0, 1.0, 1.0);
        let neg5 = Sample::new(1.0, -5.0, 0.0, 1.0, 1.0);
        assert_eq!(s0.workload_gate(0.1), 1.0);
        assert!(s5.workload_gate(0.1) < 1.0);
        assert_eq!(s5.workload_gate(0.1), neg5.workload_gate(0.1));
    }

    #[test]
    fn velocity_gate_saturates_to_infinity() {
        let s = Sample::new(1.0, 0.0, 1e6, 1.0, 1.0);
        assert!(s.velocity_gate(0.1, 1.0).is_infinite());
    }

    #[test]
    fn negative_dt_flips_contribution_sign() {
        let fwd = Sample::new(2.0, 0.5, 0.3, 1.0, 1.0);
        let back = Sample::new(2.0, 0.5, 0.3, 1.0, -1.0);
        assert_eq!(fwd.contribution(0.1, 1.0), -back.contribution(0.1, 1.0));
    }

    #[test]
    fn sample_requires_every_field() {
        let err = serde_json::from_str::<Sample>(
            r#"{"p_input": 1.0, "workload": 0.0, "velocity": 0.0, "inertia": 1.0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing field `dt`"));
    }
}
