//! `/coupling`: coupling update pass-through.

use serde::Deserialize;
use serde_json::Value;
use vcp_sim::{CouplingUpdate, CouplingUpdater, NetworkConfig};

use crate::error::{AppError, AppResult};
use crate::protocol::CouplingResponse;

pub fn decode(body: &Value) -> AppResult<CouplingUpdate> {
    CouplingUpdate::deserialize(body).map_err(|e| AppError::Validation(e.to_string()))
}

/// Apply `update` to an empty network; there is no stored topology to
/// update against.
pub fn update_coupling(updater: &CouplingUpdater, update: &CouplingUpdate) -> CouplingResponse {
    let config = updater.update(NetworkConfig::new(), update);
    CouplingResponse {
        status: "success".to_string(),
        config,
    }
}

pub fn update_coupling_value(updater: &CouplingUpdater, body: &Value) -> AppResult<CouplingResponse> {
    let update = decode(body)?;
    Ok(update_coupling(updater, &update))
}
