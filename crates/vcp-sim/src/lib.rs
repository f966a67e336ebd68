//! Stateless resonator stepping for driven oscillators.
//!
//! Provides:
//! - Resonator value types (config, state, excitation)
//! - Propagator capability traits for pluggable physics backends
//! - Reference Duffing backend on fixed-step RK4 / forward Euler
//! - Forced-oscillator stepper with absolute-time drive bookkeeping
//! - Coupling update pass-through

pub mod coupling;
pub mod duffing;
pub mod error;
pub mod integrator;
pub mod model;
pub mod propagator;
pub mod resonator;
pub mod stepper;

pub use coupling::{CouplingUpdate, CouplingUpdater, NetworkConfig};
pub use duffing::{DuffingFactory, DuffingModel, DuffingPropagator};
pub use error::{SimError, SimResult};
pub use integrator::{ForwardEuler, Integrator, IntegratorType, RK4};
pub use model::TransientModel;
pub use propagator::{Propagator, PropagatorFactory};
pub use resonator::{Excitation, ResonatorConfig, ResonatorState};
pub use stepper::{DEFAULT_STEPS, ForcedOscillatorStepper};
