//! Capability interface for physics backends.
//!
//! A backend advances position and velocity under an applied force; the
//! stepper only orchestrates. Any type implementing these traits can stand in
//! for the bundled Duffing backend.

use std::fmt::Debug;

use crate::error::SimResult;
use crate::resonator::ResonatorConfig;
use vcp_core::Real;

/// One live resonator engine, owned by a single stepping call.
pub trait Propagator {
    /// Overwrite displacement and velocity.
    fn set_state(&mut self, x: Real, v: Real);

    /// Force held constant over the next [`advance`](Propagator::advance).
    fn set_external_force(&mut self, force: Real);

    /// Advance the internal state by one physical time step.
    fn advance(&mut self, dt: Real) -> SimResult<()>;

    /// Current `(x, v)`.
    fn state(&self) -> (Real, Real);

    /// Total mechanical energy of the current state.
    fn total_energy(&self) -> Real;

    /// Oscillation phase, if the backend tracks one.
    fn phase(&self) -> Option<Real> {
        None
    }
}

/// Builds engines from a configuration.
///
/// Factories are shared across calls and threads; engines are not.
pub trait PropagatorFactory: Send + Sync + Debug {
    /// Construct an engine, rejecting non-physical configurations.
    fn construct(&self, config: &ResonatorConfig) -> SimResult<Box<dyn Propagator>>;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}
