use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

pub trait ProviderClient {
    /// Sends `prompt` as the only user message and returns the reply text.
    fn complete(&self, model: &str, prompt: &str) -> Result<String, ProviderError>;
}
