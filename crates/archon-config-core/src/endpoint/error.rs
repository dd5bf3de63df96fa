//! Error types for backend endpoint validation.

use std::net::IpAddr;

use thiserror::Error;

/// Why a backend URL was rejected.
///
/// The URL itself is not carried in the error: it may embed credentials
/// and the message ends up in logs and on the operator's terminal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    /// Empty input, or a string the URL parser rejects.
    #[error("unparseable URL: {reason}")]
    Unparseable { reason: String },

    /// Plain `http` pointed at a DNS name.
    #[error("backend URL must use https for named hosts (scheme: http, host: {host})")]
    InsecureSymbolicHost { host: String },

    /// Plain `http` pointed at `0.0.0.0` / `::`, which is not a destination.
    #[error("backend URL host {host} is the unspecified address and cannot be connected to")]
    InsecureUnspecifiedHost { host: IpAddr },

    /// Anything other than `http` or `https`.
    #[error("backend URL must use http or https (scheme: {scheme})")]
    UnsupportedScheme { scheme: String },
}
