//! `/delta_v`: Delta-v over a request's sample sequence.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use vcp_metric::{DeltaVMetricEngine, MetricParams, Sample};

use crate::error::{AppError, AppResult};
use crate::protocol::{DeltaVRequest, DeltaVResponse};

/// Decode a `/delta_v` body.
///
/// A failure inside `samples` (e.g. a sample missing a field) is a data
/// error; anything else malformed is a validation error. `null` for the body
/// or either key means "use the default".
pub fn decode(body: &Value) -> AppResult<DeltaVRequest> {
    let fields = match body {
        Value::Null => return Ok(DeltaVRequest::default()),
        Value::Object(fields) => fields,
        _ => {
            return Err(AppError::Validation(
                "request body must be a JSON object".to_string(),
            ));
        }
    };

    let samples = match fields.get("samples") {
        None | Some(Value::Null) => Vec::new(),
        Some(raw) => Vec::<Sample>::deserialize(raw).map_err(|e| AppError::Data(e.to_string()))?,
    };
    let params = match fields.get("params") {
        None | Some(Value::Null) => MetricParams::default(),
        Some(raw) => MetricParams::deserialize(raw)
            .map_err(|e| AppError::Validation(format!("params: {e}")))?,
    };
    Ok(DeltaVRequest { samples, params })
}

pub fn delta_v(engine: &DeltaVMetricEngine, request: &DeltaVRequest) -> DeltaVResponse {
    let delta_v = engine.compute(&request.samples, &request.params);
    debug!(
        samples = request.samples.len(),
        parallel = engine.uses_parallel(request.samples.len()),
        delta_v,
        "delta_v served"
    );
    DeltaVResponse { delta_v }
}

pub fn delta_v_value(engine: &DeltaVMetricEngine, body: &Value) -> AppResult<DeltaVResponse> {
    let request = decode(body)?;
    Ok(delta_v(engine, &request))
}
