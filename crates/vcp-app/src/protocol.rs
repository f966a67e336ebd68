//! JSON request and response bodies.
//!
//! Field names follow the wire format the orchestrator already speaks:
//!
//! | Route       | Request                                            | Response |
//! |-------------|----------------------------------------------------|----------|
//! | `/simulate` | `{config, state, input, dt, steps?}`               | `{state}` |
//! | `/delta_v`  | `{samples?, params?}`                              | `{delta_v}` |
//! | `/coupling` | `{source_id, target_id, strength, phase_shift}`    | `{status, config}` |
//!
//! Failures answer `{error}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use vcp_metric::{MetricParams, Sample};
use vcp_sim::{Excitation, NetworkConfig, ResonatorConfig, ResonatorState};

/// `/simulate` body. Top-level fields are optional here so that absence can
/// be reported as a missing-fields error instead of a decode error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulateRequest {
    #[serde(default)]
    pub config: Option<ResonatorConfig>,
    #[serde(default)]
    pub state: Option<ResonatorState>,
    #[serde(default)]
    pub input: Option<Excitation>,
    #[serde(default)]
    pub dt: Option<f64>,
    #[serde(default)]
    pub steps: Option<u32>,
}

impl SimulateRequest {
    /// Names of absent required fields, in wire order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.config.is_none() {
            missing.push("config");
        }
        if self.state.is_none() {
            missing.push("state");
        }
        if self.input.is_none() {
            missing.push("input");
        }
        if self.dt.is_none() {
            missing.push("dt");
        }
        missing
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulateResponse {
    pub state: ResonatorState,
}

/// `/delta_v` body; both keys may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeltaVRequest {
    #[serde(default)]
    pub samples: Vec<Sample>,
    #[serde(default)]
    pub params: MetricParams,
}

/// A non-finite metric value serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeltaVResponse {
    pub delta_v: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouplingResponse {
    pub status: String,
    pub config: NetworkConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// One line of the serve loop's input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub route: String,
    #[serde(default)]
    pub body: Value,
}

/// Outcome of one routed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub ok: bool,
    pub status: u16,
    pub body: Value,
}
