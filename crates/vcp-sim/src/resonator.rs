//! Resonator value types.
//!
//! All three are plain value objects: a call receives them, works on copies,
//! and hands a fresh [`ResonatorState`] back.

use serde::{Deserialize, Serialize};
use vcp_core::{Real, angular_frequency};

/// Physical parameters of a damped, driven resonator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResonatorConfig {
    /// Natural frequency (Hz), must be positive
    pub frequency_hz: Real,
    /// Quality factor, must be positive
    pub q_factor: Real,
    /// Cubic stiffness (Duffing nonlinearity)
    pub beta: Real,
}

/// Snapshot of a resonator at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResonatorState {
    /// Displacement
    pub x: Real,
    /// Velocity
    pub v: Real,
    /// Total mechanical energy, as reported by the backend
    #[serde(default)]
    pub energy: Real,
    /// Oscillation phase (rad), as reported by the backend
    #[serde(default)]
    pub phase: Real,
    /// Absolute elapsed time (s)
    #[serde(default)]
    pub time: Real,
}

impl ResonatorState {
    /// State at rest at the given displacement and velocity, `t = 0`.
    pub fn at(x: Real, v: Real) -> Self {
        Self {
            x,
            v,
            ..Self::default()
        }
    }
}

/// External periodic drive `F(t) = A·cos(2π·f·t + φ)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Excitation {
    pub amplitude: Real,
    /// Drive frequency (Hz), must be non-negative
    pub frequency_hz: Real,
    /// Drive phase offset (rad)
    pub phase: Real,
}

impl Excitation {
    /// Instantaneous drive force at absolute time `t`.
    pub fn force_at(&self, t: Real) -> Real {
        let omega = angular_frequency(self.frequency_hz);
        self.amplitude * (omega * t + self.phase).cos()
    }
}
