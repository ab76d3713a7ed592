use reqwest::blocking::Client;

use crate::error::ProviderError;
use crate::llm::models::openai::{build_chat_completions_request_body, read_completion_text};
use crate::llm::models::provider_base::{Message, ProviderClient};

pub const AZURE_DEFAULT_API_VERSION: &str = "2024-05-01-preview";

/// Azure OpenAI deployment client. The model name selects the deployment.
#[derive(Debug, Clone)]
pub struct AzureOpenAiClient {
    pub endpoint: String,
    pub api_key: String,
    pub api_version: String,
    http_client: Client,
}

impl AzureOpenAiClient {
    pub fn new(endpoint: String, api_key: String, api_version: String) -> Self {
        Self {
            endpoint,
            api_key,
            api_version,
            http_client: Client::new(),
        }
    }

    pub fn chat(&self, deployment: &str, messages: Vec<Message>) -> Result<String, ProviderError> {
        let request_body = build_chat_completions_request_body(deployment, messages);
        let url = deployment_url(&self.endpoint, deployment);

        log::debug!("POST {} (api-version {})", url, self.api_version);
        let response = self
            .http_client
            .post(&url)
            .query(&[("api-version", self.api_version.as_str())])
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()?;

        read_completion_text(response)
    }
}

impl ProviderClient for AzureOpenAiClient {
    fn complete(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        self.chat(model, vec![Message::user(prompt)])
    }
}

pub(crate) fn deployment_url(endpoint: &str, deployment: &str) -> String {
    format!(
        "{}/openai/deployments/{}/chat/completions",
        endpoint.trim_end_matches('/'),
        deployment
    )
}
