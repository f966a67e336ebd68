//! Forced-oscillator stepping over a propagator backend.
//!
//! The drive force is a function of absolute time only, so a run of `N`
//! steps and `N` chained single-step runs see identical force histories.

use std::sync::Arc;

use tracing::debug;
use vcp_core::{Real, ensure_finite};

use crate::error::{SimError, SimResult};
use crate::propagator::PropagatorFactory;
use crate::resonator::{Excitation, ResonatorConfig, ResonatorState};

/// Step count used when a caller does not give one.
pub const DEFAULT_STEPS: u32 = 1;

/// Orchestrates repeated propagator calls with time-varying drive.
///
/// Holds no simulation state; the only field is the (optional) backend.
#[derive(Clone, Debug, Default)]
pub struct ForcedOscillatorStepper {
    backend: Option<Arc<dyn PropagatorFactory>>,
}

impl ForcedOscillatorStepper {
    pub fn new(backend: Arc<dyn PropagatorFactory>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// A stepper with no backend; every call fails with `EngineUnavailable`.
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// [`simulate`](Self::simulate) with [`DEFAULT_STEPS`].
    pub fn simulate_once(
        &self,
        config: &ResonatorConfig,
        state: &ResonatorState,
        excitation: &Excitation,
        dt: Real,
    ) -> SimResult<ResonatorState> {
        self.simulate(config, state, excitation, dt, DEFAULT_STEPS)
    }

    /// Advance `state` by `steps` steps of `dt` under `excitation`.
    ///
    /// The returned `energy` and `phase` are queried from the backend after
    /// the last step; `phase` is 0.0 for backends without a phase query.
    /// `dt` is passed through unchecked, negative values included.
    ///
    /// # Errors
    /// - `EngineUnavailable` when no backend is configured
    /// - `InvalidConfig` from the backend for non-physical configs
    /// - `InvalidArg` for `steps == 0` or a negative drive frequency
    /// - `NonFinite` if the final state is NaN or infinite
    pub fn simulate(
        &self,
        config: &ResonatorConfig,
        state: &ResonatorState,
        excitation: &Excitation,
        dt: Real,
        steps: u32,
    ) -> SimResult<ResonatorState> {
        let backend = self.backend.as_ref().ok_or(SimError::EngineUnavailable)?;
        if steps == 0 {
            return Err(SimError::InvalidArg {
                what: "steps must be at least 1",
            });
        }
        if excitation.frequency_hz < 0.0 {
            return Err(SimError::InvalidArg {
                what: "excitation frequency_hz must be non-negative",
            });
        }

        let mut engine = backend.construct(config)?;
        engine.set_state(state.x, state.v);

        let mut current_time = state.time;
        for _ in 0..steps {
            engine.set_external_force(excitation.force_at(current_time));
            engine.advance(dt)?;
            current_time += dt;
        }

        let (x, v) = engine.state();
        let next = ResonatorState {
            x: ensure_finite(x, "x")?,
            v: ensure_finite(v, "v")?,
            energy: ensure_finite(engine.total_energy(), "energy")?,
            phase: ensure_finite(engine.phase().unwrap_or(0.0), "phase")?,
            time: current_time,
        };

        debug!(
            backend = backend.name(),
            steps,
            dt,
            t_start = state.time,
            t_end = current_time,
            "resonator stepped"
        );
        Ok(next)
    }
}
