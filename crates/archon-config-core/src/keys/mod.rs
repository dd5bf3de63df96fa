//! API key sanity checks run at startup.

mod openai;
mod service_key;

pub use openai::{validate_openai_api_key, OpenAiKeyError};
pub use service_key::{inspect_service_key, ServiceKeyStatus};
