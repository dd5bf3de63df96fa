//! `archon-config inspect-key <key>` – classify a Supabase key.

use anyhow::{bail, Result};
use archon_config::keys::{inspect_service_key, ServiceKeyStatus};

pub fn run_inspect_key(key: &str) -> Result<()> {
    let status = inspect_service_key(key);
    println!("{}", status.code());
    match status {
        ServiceKeyStatus::AnonKey => {
            bail!("this is the anon key; use the service_role key for SUPABASE_SERVICE_KEY")
        }
        ServiceKeyStatus::UnknownRole(role) => {
            bail!("unknown key role '{role}', expected 'service_role'")
        }
        ServiceKeyStatus::Empty => bail!("key is empty"),
        ServiceKeyStatus::ServiceRole | ServiceKeyStatus::Undecodable => Ok(()),
    }
}
