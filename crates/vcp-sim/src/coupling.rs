//! Coupling update pass-through.
//!
//! There is no coupling-graph data model yet, so an update is accepted,
//! logged and the network configuration is returned unchanged.

use serde::{Deserialize, Serialize};
use tracing::debug;
use vcp_core::Real;

/// Opaque network topology as supplied by the caller.
pub type NetworkConfig = serde_json::Map<String, serde_json::Value>;

/// Directed weighted edge between two resonators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouplingUpdate {
    pub source_id: String,
    pub target_id: String,
    pub strength: Real,
    pub phase_shift: Real,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CouplingUpdater;

impl CouplingUpdater {
    /// Apply `update` to `network`. Currently the identity.
    pub fn update(&self, network: NetworkConfig, update: &CouplingUpdate) -> NetworkConfig {
        debug!(
            source = %update.source_id,
            target = %update.target_id,
            strength = update.strength,
            phase_shift = update.phase_shift,
            "coupling update passed through"
        );
        network
    }
}
