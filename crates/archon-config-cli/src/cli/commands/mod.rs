//! CLI command handlers, one per file.

mod check;
mod init;
mod inspect_key;
mod rag;
mod validate_url;

pub use check::run_check;
pub use init::run_init;
pub use inspect_key::run_inspect_key;
pub use rag::run_rag;
pub use validate_url::run_validate_url;
