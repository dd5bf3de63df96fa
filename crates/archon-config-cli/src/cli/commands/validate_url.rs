//! `archon-config validate-url <url>` – check one backend URL.

use anyhow::{Context, Result};
use archon_config::endpoint::{validate_backend_url, AcceptReason, AcceptedEndpoint};

pub fn run_validate_url(url: &str) -> Result<()> {
    let accepted = validate_backend_url(url).context("backend URL rejected")?;
    println!("{}", describe(&accepted));
    Ok(())
}

fn describe(accepted: &AcceptedEndpoint) -> String {
    match accepted.reason {
        AcceptReason::SecureTransport => format!("accepted: {} (https)", accepted.url),
        AcceptReason::PlaintextIpLiteral(ip) => {
            format!("accepted: {} (plaintext http to IP literal {ip})", accepted.url)
        }
    }
}
