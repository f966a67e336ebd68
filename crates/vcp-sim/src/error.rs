//! Error types for resonator stepping.

use thiserror::Error;

/// Errors encountered while stepping a resonator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Propagator backend is not available")]
    EngineUnavailable,

    #[error("Invalid resonator configuration: {what}")]
    InvalidConfig { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Failure reported by a propagator implementation from `construct` or
    /// `advance`, for backends whose errors do not fit the other variants.
    #[error("Backend error: {message}")]
    Backend { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<vcp_core::CoreError> for SimError {
    fn from(e: vcp_core::CoreError) -> Self {
        match e {
            vcp_core::CoreError::NonFinite { what, value } => SimError::NonFinite { what, value },
            vcp_core::CoreError::InvalidArg { what } => SimError::InvalidArg { what },
        }
    }
}
