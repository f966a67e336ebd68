//! Route dispatch and error envelopes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Value, json};
use tracing::{info_span, warn};
use uuid::Uuid;
use vcp_metric::DeltaVMetricEngine;
use vcp_sim::{CouplingUpdater, ForcedOscillatorStepper};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::protocol::{ErrorBody, Exchange, Reply};
use crate::{coupling_service, metric_service, simulate_service};

/// Known request routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Simulate,
    DeltaV,
    Coupling,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Simulate => "/simulate",
            Route::DeltaV => "/delta_v",
            Route::Coupling => "/coupling",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = AppError;

    /// Accepts `simulate`, `/simulate`, `api/v1/simulate` and
    /// `/api/v1/simulate` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim().trim_matches('/');
        let name = path.strip_prefix("api/v1/").unwrap_or(path);
        match name {
            "simulate" => Ok(Route::Simulate),
            "delta_v" => Ok(Route::DeltaV),
            "coupling" => Ok(Route::Coupling),
            _ => Err(AppError::UnknownRoute(s.to_string())),
        }
    }
}

/// Everything a request needs; cheap to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Services {
    stepper: ForcedOscillatorStepper,
    metric: DeltaVMetricEngine,
    coupling: CouplingUpdater,
}

impl Services {
    pub fn new(stepper: ForcedOscillatorStepper, metric: DeltaVMetricEngine) -> Self {
        Self {
            stepper,
            metric,
            coupling: CouplingUpdater,
        }
    }

    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self::new(config.build_stepper()?, config.build_metric_engine()))
    }

    pub fn stepper(&self) -> &ForcedOscillatorStepper {
        &self.stepper
    }

    pub fn metric(&self) -> &DeltaVMetricEngine {
        &self.metric
    }

    /// Run `route` on `body`, returning the encoded success body.
    pub fn dispatch(&self, route: Route, body: &Value) -> AppResult<Value> {
        match route {
            Route::Simulate => encode(&simulate_service::simulate_value(&self.stepper, body)?),
            Route::DeltaV => encode(&metric_service::delta_v_value(&self.metric, body)?),
            Route::Coupling => encode(&coupling_service::update_coupling_value(
                &self.coupling,
                body,
            )?),
        }
    }

    /// Route by name and fold any failure into an error envelope.
    pub fn handle(&self, route: &str, body: &Value) -> Reply {
        let request_id = Uuid::new_v4();
        let span = info_span!("request", route, %request_id);
        let _guard = span.enter();

        let result = route
            .parse::<Route>()
            .and_then(|route| self.dispatch(route, body));
        match result {
            Ok(body) => Reply {
                ok: true,
                status: 200,
                body,
            },
            Err(err) => {
                warn!(status = err.status_code(), error = %err, "request failed");
                error_reply(&err)
            }
        }
    }

    /// Serve one JSON line `{route, body}`; always yields one JSON line.
    pub fn handle_line(&self, line: &str) -> String {
        let reply = match serde_json::from_str::<Exchange>(line) {
            Ok(exchange) => self.handle(&exchange.route, &exchange.body),
            Err(err) => {
                let err = AppError::from(err);
                warn!(error = %err, "unreadable request line");
                error_reply(&err)
            }
        };
        serde_json::to_string(&reply).unwrap_or_else(|e| encode_failure_line(&e.to_string()))
    }
}

/// Last-resort reply line when a reply cannot be serialized.
fn encode_failure_line(message: &str) -> String {
    json!({"ok": false, "status": 500, "body": {"error": message}}).to_string()
}

fn encode<T: Serialize>(value: &T) -> AppResult<Value> {
    Ok(serde_json::to_value(value)?)
}

fn error_reply(err: &AppError) -> Reply {
    Reply {
        ok: false,
        status: err.status_code(),
        body: serde_json::to_value(ErrorBody {
            error: err.to_string(),
        })
        .unwrap_or(Value::Null),
    }
}
