//! Error types for the vcp-app service layer.

use std::path::PathBuf;

use vcp_sim::SimError;

/// Who is at fault for a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad request; retrying unchanged will fail again.
    Client,
    /// Service-side failure.
    Server,
}

/// Application error type wrapping the core crates' errors with a
/// client/server classification.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing required fields: {0}")]
    MissingFields(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Invalid sample data: {0}")]
    Data(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Resonator engine not available")]
    EngineUnavailable,

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for vcp-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::MissingFields(_)
            | AppError::Validation(_)
            | AppError::Data(_)
            | AppError::InvalidInput(_)
            | AppError::UnknownRoute(_)
            | AppError::Json(_) => ErrorKind::Client,
            AppError::EngineUnavailable
            | AppError::Simulation(_)
            | AppError::Config(_)
            | AppError::ConfigFileRead { .. }
            | AppError::Yaml(_)
            | AppError::Io(_) => ErrorKind::Server,
        }
    }

    /// HTTP-style status for transports that want one.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::UnknownRoute(_) => 404,
            _ => match self.kind() {
                ErrorKind::Client => 400,
                ErrorKind::Server => 500,
            },
        }
    }
}

impl From<SimError> for AppError {
    fn from(err: SimError) -> Self {
        match err {
            SimError::EngineUnavailable => AppError::EngineUnavailable,
            SimError::InvalidConfig { .. } | SimError::InvalidArg { .. } => {
                AppError::InvalidInput(err.to_string())
            }
            SimError::NonFinite { .. } | SimError::Backend { .. } => {
                AppError::Simulation(err.to_string())
            }
        }
    }
}
