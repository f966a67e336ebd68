//! First-order form of a resonator model, as seen by the integrators.

use crate::error::SimResult;

/// A system written as `ds/dt = f(t, s)`.
///
/// Second-order oscillators implement this over `(x, v)`; the integrators only
/// need the slope and vector-space arithmetic on the state.
pub trait TransientModel {
    type State: Clone;

    /// Slope `f(t, s)`. Mutable so a model can hold per-step inputs.
    fn rhs(&mut self, t: f64, s: &Self::State) -> SimResult<Self::State>;

    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State;

    fn scale(&self, a: &Self::State, factor: f64) -> Self::State;
}
