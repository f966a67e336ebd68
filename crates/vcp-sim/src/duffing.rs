//! Reference propagator: unit-mass damped, driven Duffing oscillator.
//!
//! ```text
//! x'' + (ω0/Q)·x' + ω0²·x + β·x³ = F
//! ```
//!
//! where ω0 = 2π·frequency_hz. The applied force `F` is held constant over one
//! `advance`, which is split into `substeps` equal integrator steps.
//!
//! ## Energy and phase
//!
//! ```text
//! E = ½·v² + ½·ω0²·x² + ¼·β·x⁴
//! φ = atan2(-v/ω0, x)
//! ```
//!
//! For a free linear oscillation `x = A·cos(ω0·t + φ0)` the phase evaluates to
//! `ω0·t + φ0` (wrapped to (-π, π]).

use nalgebra::Vector2;
use vcp_core::{Real, angular_frequency, ensure_finite, ensure_positive};

use crate::error::{SimError, SimResult};
use crate::integrator::IntegratorType;
use crate::model::TransientModel;
use crate::propagator::{Propagator, PropagatorFactory};
use crate::resonator::ResonatorConfig;

/// Right-hand side of the Duffing equation with a held drive force.
#[derive(Clone, Debug)]
pub struct DuffingModel {
    omega0: Real,
    damping: Real,
    beta: Real,
    force: Real,
}

impl DuffingModel {
    /// Build the model, rejecting non-physical parameters.
    ///
    /// # Errors
    /// `InvalidConfig` if `frequency_hz` or `q_factor` is not strictly
    /// positive, or any parameter is non-finite.
    pub fn new(config: &ResonatorConfig) -> SimResult<Self> {
        let frequency_hz = ensure_positive(config.frequency_hz, "frequency_hz must be positive")
            .map_err(|_| SimError::InvalidConfig {
                what: "frequency_hz must be positive and finite",
            })?;
        let q_factor = ensure_positive(config.q_factor, "q_factor must be positive").map_err(
            |_| SimError::InvalidConfig {
                what: "q_factor must be positive and finite",
            },
        )?;
        let beta = ensure_finite(config.beta, "beta").map_err(|_| SimError::InvalidConfig {
            what: "beta must be finite",
        })?;

        let omega0 = angular_frequency(frequency_hz);
        Ok(Self {
            omega0,
            damping: omega0 / q_factor,
            beta,
            force: 0.0,
        })
    }

    /// Natural angular frequency (rad/s).
    pub fn omega0(&self) -> Real {
        self.omega0
    }

    pub fn set_force(&mut self, force: Real) {
        self.force = force;
    }

    pub fn energy(&self, x: Real, v: Real) -> Real {
        0.5 * v * v + 0.5 * self.omega0 * self.omega0 * x * x + 0.25 * self.beta * x.powi(4)
    }

    pub fn phase(&self, x: Real, v: Real) -> Real {
        (-v / self.omega0).atan2(x)
    }
}

impl TransientModel for DuffingModel {
    type State = Vector2<Real>;

    fn rhs(&mut self, _t: f64, s: &Self::State) -> SimResult<Self::State> {
        let (x, v) = (s[0], s[1]);
        let accel = self.force
            - self.damping * v
            - self.omega0 * self.omega0 * x
            - self.beta * x * x * x;
        Ok(Vector2::new(v, accel))
    }

    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State {
        a + b
    }

    fn scale(&self, a: &Self::State, scale: f64) -> Self::State {
        a * scale
    }
}

/// Engine built by [`DuffingFactory`]; lives for one stepping call.
#[derive(Clone, Debug)]
pub struct DuffingPropagator {
    model: DuffingModel,
    integrator: IntegratorType,
    substeps: u32,
    state: Vector2<Real>,
}

impl DuffingPropagator {
    pub fn new(model: DuffingModel, integrator: IntegratorType, substeps: u32) -> SimResult<Self> {
        if substeps == 0 {
            return Err(SimError::InvalidArg {
                what: "substeps must be at least 1",
            });
        }
        Ok(Self {
            model,
            integrator,
            substeps,
            state: Vector2::zeros(),
        })
    }
}

impl Propagator for DuffingPropagator {
    fn set_state(&mut self, x: Real, v: Real) {
        self.state = Vector2::new(x, v);
    }

    fn set_external_force(&mut self, force: Real) {
        self.model.set_force(force);
    }

    fn advance(&mut self, dt: Real) -> SimResult<()> {
        let h = dt / Real::from(self.substeps);
        let mut t = 0.0;
        for _ in 0..self.substeps {
            self.state = self.integrator.step(&mut self.model, t, &self.state, h)?;
            t += h;
        }
        Ok(())
    }

    fn state(&self) -> (Real, Real) {
        (self.state[0], self.state[1])
    }

    fn total_energy(&self) -> Real {
        self.model.energy(self.state[0], self.state[1])
    }

    fn phase(&self) -> Option<Real> {
        Some(self.model.phase(self.state[0], self.state[1]))
    }
}

/// Factory for [`DuffingPropagator`] engines.
#[derive(Clone, Debug)]
pub struct DuffingFactory {
    integrator: IntegratorType,
    substeps: u32,
}

impl DuffingFactory {
    /// # Errors
    /// Returns error if `substeps` is zero.
    pub fn new(integrator: IntegratorType, substeps: u32) -> SimResult<Self> {
        if substeps == 0 {
            return Err(SimError::InvalidArg {
                what: "substeps must be at least 1",
            });
        }
        Ok(Self {
            integrator,
            substeps,
        })
    }

    pub fn integrator(&self) -> IntegratorType {
        self.integrator
    }

    pub fn substeps(&self) -> u32 {
        self.substeps
    }
}

impl Default for DuffingFactory {
    fn default() -> Self {
        Self {
            integrator: IntegratorType::RK4,
            substeps: 1,
        }
    }
}

impl PropagatorFactory for DuffingFactory {
    fn construct(&self, config: &ResonatorConfig) -> SimResult<Box<dyn Propagator>> {
        let model = DuffingModel::new(config)?;
        Ok(Box::new(DuffingPropagator::new(
            model,
            self.integrator,
            self.substeps,
        )?))
    }

    fn name(&self) -> &'static str {
        match self.integrator {
            IntegratorType::RK4 => "duffing-rk4",
            IntegratorType::ForwardEuler => "duffing-euler",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn linear_config() -> ResonatorConfig {
        ResonatorConfig {
            frequency_hz: 1.0,
            q_factor: 1e12,
            beta: 0.0,
        }
    }

    fn run_free(factory: &DuffingFactory, config: &ResonatorConfig, dt: f64, n: usize) -> (f64, f64) {
        let mut engine = factory.construct(config).unwrap();
        engine.set_state(1.0, 0.0);
        engine.set_external_force(0.0);
        for _ in 0..n {
            engine.advance(dt).unwrap();
        }
        engine.state()
    }

    #[test]
    fn rejects_non_positive_frequency() {
        let cfg = ResonatorConfig {
            frequency_hz: 0.0,
            ..linear_config()
        };
        let err = DuffingFactory::default().construct(&cfg).err().unwrap();
        assert!(matches!(err, SimError::InvalidConfig { .. }));
    }

    #[test]
    fn rejects_non_positive_q_factor() {
        let cfg = ResonatorConfig {
            q_factor: -1.0,
            ..linear_config()
        };
        assert!(matches!(
            DuffingModel::new(&cfg),
            Err(SimError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn rejects_nan_beta() {
        let cfg = ResonatorConfig {
            beta: f64::NAN,
            ..linear_config()
        };
        assert!(DuffingModel::new(&cfg).is_err());
    }

    #[test]
    fn rejects_zero_substeps() {
        assert!(DuffingFactory::new(IntegratorType::RK4, 0).is_err());
    }

    #[test]
    fn rk4_tracks_harmonic_solution_over_one_period() {
        // 100 steps of 0.01 s = one period at 1 Hz; x returns to 1.
        let (x, v) = run_free(&DuffingFactory::default(), &linear_config(), 0.01, 100);
        assert!((x - 1.0).abs() < 1e-4, "x = {x}");
        assert!(v.abs() < 1e-3, "v = {v}");
    }

    #[test]
    fn substeps_refine_forward_euler() {
        let coarse = DuffingFactory::new(IntegratorType::ForwardEuler, 1).unwrap();
        let fine = DuffingFactory::new(IntegratorType::ForwardEuler, 10).unwrap();
        let (x_coarse, _) = run_free(&coarse, &linear_config(), 0.01, 50);
        let (x_fine, _) = run_free(&fine, &linear_config(), 0.01, 50);
        // Half period: exact x = cos(π) = -1
        assert!((x_fine + 1.0).abs() < (x_coarse + 1.0).abs());
    }

    #[test]
    fn damping_dissipates_energy() {
        let cfg = ResonatorConfig {
            frequency_hz: 1.0,
            q_factor: 5.0,
            beta: 0.0,
        };
        let mut engine = DuffingFactory::default().construct(&cfg).unwrap();
        engine.set_state(1.0, 0.0);
        let e0 = engine.total_energy();
        for _ in 0..200 {
            engine.advance(0.01).unwrap();
        }
        assert!(engine.total_energy() < e0);
    }

    #[test]
    fn energy_includes_quartic_term() {
        let cfg = ResonatorConfig {
            frequency_hz: 1.0,
            q_factor: 10.0,
            beta: 4.0,
        };
        let model = DuffingModel::new(&cfg).unwrap();
        let omega0 = 2.0 * PI;
        let expected = 0.5 * 0.25 + 0.5 * omega0 * omega0 * 1.0 + 0.25 * 4.0 * 1.0;
        assert!((model.energy(1.0, 0.5) - expected).abs() < 1e-12);
    }

    #[test]
    fn phase_of_positive_displacement_at_rest_is_zero() {
        let engine = {
            let mut e = DuffingFactory::default().construct(&linear_config()).unwrap();
            e.set_state(1.0, 0.0);
            e
        };
        assert_eq!(engine.phase(), Some(0.0));
    }

    #[test]
    fn phase_advances_with_free_motion() {
        // Quarter period: x = cos(π/2) ≈ 0, v = -ω0 → φ ≈ π/2
        let model = DuffingModel::new(&linear_config()).unwrap();
        let omega0 = model.omega0();
        assert!((model.phase(0.0, -omega0) - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn constant_force_shifts_equilibrium() {
        let cfg = ResonatorConfig {
            frequency_hz: 1.0,
            q_factor: 0.5,
            beta: 0.0,
        };
        let mut engine = DuffingFactory::default().construct(&cfg).unwrap();
        let omega0 = 2.0 * PI;
        engine.set_state(0.0, 0.0);
        engine.set_external_force(omega0 * omega0);
        for _ in 0..2_000 {
            engine.advance(0.005).unwrap();
        }
        // Critically damped; settles at F/ω0² = 1
        let (x, _) = engine.state();
        assert!((x - 1.0).abs() < 1e-3, "x = {x}");
    }

    #[test]
    fn factory_name_reflects_integrator() {
        assert_eq!(DuffingFactory::default().name(), "duffing-rk4");
        let euler = DuffingFactory::new(IntegratorType::ForwardEuler, 2).unwrap();
        assert_eq!(euler.name(), "duffing-euler");
        assert_eq!(euler.substeps(), 2);
    }
}
