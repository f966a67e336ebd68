//! Service layer for the resonator and Delta-v computations.
//!
//! Decodes JSON request bodies, validates them, runs the stateless core and
//! encodes either a result or an error envelope. Shared by the CLI's one-shot
//! commands and its line-oriented serve loop; an HTTP front end would sit on
//! top of [`Services::handle`].

pub mod config;
pub mod coupling_service;
pub mod error;
pub mod metric_service;
pub mod protocol;
pub mod router;
pub mod simulate_service;

pub use config::{AppConfig, BackendConfig, BackendKind, MetricConfig, load_yaml};
pub use error::{AppError, AppResult, ErrorKind};
pub use protocol::{
    CouplingResponse, DeltaVRequest, DeltaVResponse, ErrorBody, Exchange, Reply, SimulateRequest,
    SimulateResponse,
};
pub use router::{Route, Services};
