//! Service configuration, loaded from YAML.
//!
//! ```yaml
//! backend:
//!   kind: duffing          # duffing | none
//!   integrator: rk4        # rk4 | forward_euler
//!   substeps: 1
//! metric:
//!   parallel_threshold: 10000
//! ```
//!
//! Every key is optional.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use vcp_metric::DeltaVMetricEngine;
use vcp_sim::{DuffingFactory, ForcedOscillatorStepper, IntegratorType};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub metric: MetricConfig,
}

/// Which propagator the stepper drives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Bundled Duffing reference backend.
    #[default]
    Duffing,
    /// No backend; simulate requests fail as engine-unavailable.
    #[serde(rename = "none")]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub kind: BackendKind,
    pub integrator: IntegratorType,
    /// Integrator sub-steps per propagator advance
    pub substeps: u32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::Duffing,
            integrator: IntegratorType::RK4,
            substeps: 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricConfig {
    /// Sample count at which the rayon reduction kicks in; unset keeps the
    /// sequential, order-exact sum.
    pub parallel_threshold: Option<usize>,
}

impl AppConfig {
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        let config: AppConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.backend.substeps == 0 {
            return Err(AppError::Config(
                "backend.substeps must be at least 1".to_string(),
            ));
        }
        if self.metric.parallel_threshold == Some(0) {
            return Err(AppError::Config(
                "metric.parallel_threshold must be positive when set".to_string(),
            ));
        }
        Ok(())
    }

    /// Stepper wired to the configured backend.
    pub fn build_stepper(&self) -> AppResult<ForcedOscillatorStepper> {
        match self.backend.kind {
            BackendKind::Duffing => {
                let factory = DuffingFactory::new(self.backend.integrator, self.backend.substeps)
                    .map_err(|e| AppError::Config(e.to_string()))?;
                Ok(ForcedOscillatorStepper::new(Arc::new(factory)))
            }
            BackendKind::Unavailable => Ok(ForcedOscillatorStepper::unavailable()),
        }
    }

    pub fn build_metric_engine(&self) -> DeltaVMetricEngine {
        match self.metric.parallel_threshold {
            Some(threshold) => DeltaVMetricEngine::with_parallel_threshold(threshold),
            None => DeltaVMetricEngine::sequential(),
        }
    }
}

pub fn load_yaml(path: &Path) -> AppResult<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    AppConfig::from_yaml_str(&content)
}
