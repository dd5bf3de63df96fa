//! Startup configuration errors.
//!
//! None of these are recoverable in-process; the operator has to fix the
//! deployment's environment and restart.
//!
//! Wrapped errors are part of the message, not `source()`.

use thiserror::Error;

use crate::endpoint::EndpointError;
use crate::keys::OpenAiKeyError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("{name} environment variable is required")]
    MissingVar { name: &'static str },

    #[error("PORT or ARCHON_MCP_PORT environment variable is required")]
    MissingPort,

    #[error("PORT must be a valid integer, got: {value}")]
    InvalidPort { value: String },

    #[error("invalid SUPABASE_URL: {0}")]
    InvalidEndpoint(EndpointError),

    #[error("invalid OPENAI_API_KEY: {0}")]
    OpenAiKey(OpenAiKeyError),

    #[error(
        "SUPABASE_SERVICE_KEY is the Supabase ANON key, not the SERVICE key. \
         The anon key is public and restricted by row level security, so writes will fail. \
         Copy the 'service_role' secret from Supabase Dashboard > Settings > API instead."
    )]
    AnonServiceKey,

    #[error("unknown Supabase key role '{role}', expected 'service_role'")]
    UnknownServiceKeyRole { role: String },
}

impl From<EndpointError> for ConfigurationError {
    fn from(e: EndpointError) -> Self {
        ConfigurationError::InvalidEndpoint(e)
    }
}

impl From<OpenAiKeyError> for ConfigurationError {
    fn from(e: OpenAiKeyError) -> Self {
        ConfigurationError::OpenAiKey(e)
    }
}
