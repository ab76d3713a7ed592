use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ProviderError;
use crate::llm::models::provider_base::{Message, ProviderClient};

pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const GPUSTACK_DEFAULT_BASE_URL: &str = "https://gpu.gess-k8s.ethz.ch/v1-openai";

#[derive(Deserialize)]
struct ChatCompletionMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionMessage,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

/// Client for any endpoint speaking the OpenAI chat-completions protocol.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    pub api_base: String,
    pub api_key: String,
    http_client: Client,
}

impl OpenAiClient {
    pub fn new(api_base: String, api_key: String) -> Self {
        Self {
            api_base,
            api_key,
            http_client: Client::new(),
        }
    }

    pub fn chat(&self, model: &str, messages: Vec<Message>) -> Result<String, ProviderError> {
        let request_body = build_chat_completions_request_body(model, messages);
        let url = chat_completions_url(&self.api_base);

        log::debug!("POST {} (model {})", url, model);
        let response = self
            .http_client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()?;

        read_completion_text(response)
    }
}

impl ProviderClient for OpenAiClient {
    fn complete(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        self.chat(model, vec![Message::user(prompt)])
    }
}

pub fn create_openai(base_url: String, api_key: String) -> OpenAiClient {
    OpenAiClient::new(base_url, api_key)
}

pub fn create_gpustack(base_url: String, api_key: String) -> OpenAiClient {
    OpenAiClient::new(base_url, api_key)
}

pub(crate) fn build_chat_completions_request_body(model: &str, messages: Vec<Message>) -> Value {
    json!({
        "model": model,
        "store": false,
        "messages": messages,
    })
}

pub(crate) fn chat_completions_url(api_base: &str) -> String {
    format!("{}/chat/completions", api_base.trim_end_matches('/'))
}

pub(crate) fn read_completion_text(response: Response) -> Result<String, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(ProviderError::Api {
            status: status.as_u16(),
            body,
        });
    }

    let body = response.text()?;
    extract_completion_text(&body)
}

pub(crate) fn extract_completion_text(body: &str) -> Result<String, ProviderError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::MalformedResponse(format!("invalid JSON body: {}", e)))?;

    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::MalformedResponse("no choices returned".to_string()))?;

    choice
        .message
        .content
        .ok_or_else(|| ProviderError::MalformedResponse("message has no content".to_string()))
}
