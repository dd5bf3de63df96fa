//! Supabase service key inspection.
//!
//! Supabase keys are JWTs whose `role` claim tells the anon (public,
//! row-level-security bound) key apart from the service key. Only the
//! payload is read; the signature is not verified.

use base64::engine::general_purpose;
use base64::engine::Engine;
use serde_json::{Map, Value};

/// Outcome of inspecting a service key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceKeyStatus {
    Empty,
    /// The public anon key was supplied where the service key belongs.
    AnonKey,
    ServiceRole,
    /// JWT with a role other than `anon`/`service_role`, or none at all.
    UnknownRole(String),
    /// Not a JWT we can read. Accepted: newer key formats are opaque.
    Undecodable,
}

impl ServiceKeyStatus {
    /// Whether startup may continue with this key.
    pub fn is_accepted(&self) -> bool {
        matches!(self, ServiceKeyStatus::ServiceRole | ServiceKeyStatus::Undecodable)
    }

    /// Stable code for logs and CLI output.
    pub fn code(&self) -> String {
        match self {
            ServiceKeyStatus::Empty => "EMPTY_KEY".to_string(),
            ServiceKeyStatus::AnonKey => "ANON_KEY_DETECTED".to_string(),
            ServiceKeyStatus::ServiceRole => "VALID_SERVICE_KEY".to_string(),
            ServiceKeyStatus::UnknownRole(role) => format!("UNKNOWN_KEY_TYPE:{role}"),
            ServiceKeyStatus::Undecodable => "UNABLE_TO_VALIDATE".to_string(),
        }
    }
}

/// Classifies a Supabase key by the `role` claim of its JWT payload.
pub fn inspect_service_key(key: &str) -> ServiceKeyStatus {
    if key.is_empty() {
        return ServiceKeyStatus::Empty;
    }

    let claims = match decode_claims(key) {
        Some(c) => c,
        None => return ServiceKeyStatus::Undecodable,
    };

    match claims.get("role") {
        Some(Value::String(role)) if role == "anon" => ServiceKeyStatus::AnonKey,
        Some(Value::String(role)) if role == "service_role" => ServiceKeyStatus::ServiceRole,
        Some(Value::String(role)) => ServiceKeyStatus::UnknownRole(role.clone()),
        Some(other) => ServiceKeyStatus::UnknownRole(other.to_string()),
        None => ServiceKeyStatus::UnknownRole("None".to_string()),
    }
}

/// Decodes header and payload of a compact JWT; both must be JSON objects.
fn decode_claims(token: &str) -> Option<Map<String, Value>> {
    let mut parts = token.split('.');
    let header = parts.next()?;
    let payload = parts.next()?;
    let _signature = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    decode_segment(header)?;
    decode_segment(payload)
}

fn decode_segment(segment: &str) -> Option<Map<String, Value>> {
    let bytes = general_purpose::URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .ok()?;
    match serde_json::from_slice(&bytes).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
