//! OpenAI API key format check.

use thiserror::Error;

const KEY_PREFIX: &str = "sk-";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpenAiKeyError {
    #[error("OpenAI API key cannot be empty")]
    Empty,
    #[error("OpenAI API key must start with 'sk-'")]
    MissingPrefix,
}

/// Checks the shape of an OpenAI key. Does not contact the API.
pub fn validate_openai_api_key(key: &str) -> Result<(), OpenAiKeyError> {
    if key.is_empty() {
        return Err(OpenAiKeyError::Empty);
    }
    if !key.starts_with(KEY_PREFIX) {
        return Err(OpenAiKeyError::MissingPrefix);
    }
    Ok(())
}
