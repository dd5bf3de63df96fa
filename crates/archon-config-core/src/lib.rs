//! Startup configuration checks for Archon deployments.
//!
//! The backend URL rule lives in [`endpoint`]; [`env`] runs it together with
//! the key checks when the process loads its environment.

pub mod config;
pub mod endpoint;
pub mod env;
pub mod error;
pub mod keys;
pub mod logging;
pub mod rag;

pub use endpoint::{validate_backend_url, AcceptReason, AcceptedEndpoint, EndpointError};
pub use env::{load_environment_config, EnvironmentConfig};
pub use error::ConfigurationError;
pub use rag::RagStrategyConfig;
