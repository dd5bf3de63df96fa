//! Backend (Supabase) URL validation.
//!
//! `https` is always accepted. Plain `http` is accepted only when the host is
//! an IP literal other than the unspecified address, public or private.
//! Named hosts over `http` are rejected.
//!
//! The check is pure: no DNS lookups, no I/O, no logging.

mod error;

use std::net::IpAddr;

use url::{Host, Url};

pub use error::EndpointError;

const SECURE_SCHEME: &str = "https";
const INSECURE_SCHEME: &str = "http";

/// Why a backend URL was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptReason {
    /// `https`, any host.
    SecureTransport,
    /// `http` to a concrete IP literal.
    PlaintextIpLiteral(IpAddr),
}

/// A backend URL that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedEndpoint {
    pub url: Url,
    pub reason: AcceptReason,
}

impl AcceptedEndpoint {
    /// True when the connection will not be encrypted.
    pub fn is_plaintext(&self) -> bool {
        matches!(self.reason, AcceptReason::PlaintextIpLiteral(_))
    }
}

/// Validates a backend URL for outbound connection.
///
/// # Examples
///
/// - `https://db.example.com:8000` → accepted
/// - `http://10.0.0.5:8000`, `http://203.0.113.7:8000` → accepted
/// - `http://db.example.com:8000` → [`EndpointError::InsecureSymbolicHost`]
/// - `http://0.0.0.0:8000` → [`EndpointError::InsecureUnspecifiedHost`]
pub fn validate_backend_url(raw: &str) -> Result<AcceptedEndpoint, EndpointError> {
    if raw.trim().is_empty() {
        return Err(EndpointError::Unparseable {
            reason: "URL is empty".to_string(),
        });
    }

    let parsed = Url::parse(raw).map_err(|e| EndpointError::Unparseable {
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        SECURE_SCHEME => Ok(AcceptedEndpoint {
            url: parsed,
            reason: AcceptReason::SecureTransport,
        }),
        INSECURE_SCHEME => check_plaintext_host(parsed),
        other => Err(EndpointError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

fn check_plaintext_host(url: Url) -> Result<AcceptedEndpoint, EndpointError> {
    let ip = match url.host() {
        Some(Host::Ipv4(v4)) => IpAddr::V4(v4),
        Some(Host::Ipv6(v6)) => IpAddr::V6(v6),
        Some(Host::Domain(name)) => {
            return Err(EndpointError::InsecureSymbolicHost {
                host: name.to_string(),
            })
        }
        None => {
            return Err(EndpointError::Unparseable {
                reason: "URL has no host".to_string(),
            })
        }
    };

    if is_unspecified(ip) {
        return Err(EndpointError::InsecureUnspecifiedHost { host: ip });
    }

    Ok(AcceptedEndpoint {
        url,
        reason: AcceptReason::PlaintextIpLiteral(ip),
    })
}

/// `raw` with any `user:password@` part removed, for logs and terminal output.
pub fn strip_credentials(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) => {
            let _ = url.set_password(None);
            let _ = url.set_username("");
            url.to_string()
        }
        Err(_) => "<unparseable URL>".to_string(),
    }
}

/// `0.0.0.0`, `::`, and the IPv4-mapped `::ffff:0.0.0.0`.
fn is_unspecified(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => v4.is_unspecified(),
        IpAddr::V6(v6) => {
            v6.is_unspecified() || v6.to_ipv4_mapped().is_some_and(|v4| v4.is_unspecified())
        }
    }
}
