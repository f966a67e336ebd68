//! `/simulate`: one stateless stepping call.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use vcp_sim::{DEFAULT_STEPS, ForcedOscillatorStepper};

use crate::error::{AppError, AppResult};
use crate::protocol::{SimulateRequest, SimulateResponse};

/// Decode a `/simulate` body. A `null` body counts as an empty object.
pub fn decode(body: &Value) -> AppResult<SimulateRequest> {
    if body.is_null() {
        return Ok(SimulateRequest::default());
    }
    SimulateRequest::deserialize(body).map_err(|e| AppError::Validation(e.to_string()))
}

/// Validate and run a simulate request.
pub fn simulate(
    stepper: &ForcedOscillatorStepper,
    request: &SimulateRequest,
) -> AppResult<SimulateResponse> {
    let (Some(config), Some(state), Some(input), Some(dt)) =
        (&request.config, &request.state, &request.input, request.dt)
    else {
        return Err(AppError::MissingFields(request.missing_fields().join(", ")));
    };
    let steps = request.steps.unwrap_or(DEFAULT_STEPS);

    let state = stepper.simulate(config, state, input, dt, steps)?;
    debug!(steps, dt, time = state.time, energy = state.energy, "simulate served");
    Ok(SimulateResponse { state })
}

/// Decode, validate and run in one go.
pub fn simulate_value(
    stepper: &ForcedOscillatorStepper,
    body: &Value,
) -> AppResult<SimulateResponse> {
    let request = decode(body)?;
    simulate(stepper, &request)
}
