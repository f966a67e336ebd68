//! Fixed-step time integrators.

use serde::{Deserialize, Serialize};

use crate::error::SimResult;
use crate::model::TransientModel;

/// One fixed step of an explicit scheme over a [`TransientModel`].
pub trait Integrator {
    /// State at `t + dt` from the state at `t`.
    fn step<M: TransientModel>(
        &self,
        model: &mut M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State>;
}

/// Integrator selection for backends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegratorType {
    /// 4th-order Runge-Kutta (default, most accurate, 4 rhs calls per step).
    #[default]
    #[serde(rename = "rk4")]
    RK4,
    /// Forward Euler (1st-order, faster, 1 rhs call per step).
    ForwardEuler,
}

impl IntegratorType {
    /// Dispatch one step to the selected integrator.
    pub fn step<M: TransientModel>(
        self,
        model: &mut M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State> {
        match self {
            IntegratorType::RK4 => RK4.step(model, t, x, dt),
            IntegratorType::ForwardEuler => ForwardEuler.step(model, t, x, dt),
        }
    }
}

/// Classical four-stage Runge-Kutta.
///
/// Fourth order in `dt`; the stage times are passed through to the model even
/// though the Duffing right-hand side only sees a force held over the step.
#[derive(Clone, Debug)]
pub struct RK4;

impl Integrator for RK4 {
    fn step<M: TransientModel>(
        &self,
        model: &mut M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State> {
        let half = 0.5 * dt;
        let t_mid = t + half;

        let k1 = model.rhs(t, x)?;
        let s_mid = model.add(x, &model.scale(&k1, half));
        let k2 = model.rhs(t_mid, &s_mid)?;
        let s_mid = model.add(x, &model.scale(&k2, half));
        let k3 = model.rhs(t_mid, &s_mid)?;
        let s_end = model.add(x, &model.scale(&k3, dt));
        let k4 = model.rhs(t + dt, &s_end)?;

        // Simpson weights 1-2-2-1 over the slope samples.
        let inner = model.scale(&model.add(&k2, &k3), 2.0);
        let outer = model.add(&k1, &k4);
        let slope = model.add(&inner, &outer);
        Ok(model.add(x, &model.scale(&slope, dt / 6.0)))
    }
}

/// Explicit first-order Euler. One slope evaluation per step; drifts in
/// energy on undamped oscillators, so pair it with sub-stepping.
#[derive(Clone, Debug)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step<M: TransientModel>(
        &self,
        model: &mut M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State> {
        let slope = model.rhs(t, x)?;
        Ok(model.add(x, &model.scale(&slope, dt)))
    }
}
