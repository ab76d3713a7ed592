use crate::cons::provider_cons::ProviderKind;
use crate::error::ProviderError;

use super::azure::{AzureOpenAiClient, AZURE_DEFAULT_API_VERSION};
use super::openai::{
    create_gpustack, create_openai, OpenAiClient, GPUSTACK_DEFAULT_BASE_URL,
    OPENAI_DEFAULT_BASE_URL,
};
pub use super::provider_base::{Message, ProviderClient};

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
pub const GPUSTACK_API_KEY: &str = "GPUSTACK_API_KEY";
pub const GPUSTACK_BASE_URL: &str = "GPUSTACK_BASE_URL";
pub const AZURE_OPENAI_API_KEY: &str = "AZURE_OPENAI_API_KEY";
pub const AZURE_OPENAI_ENDPOINT: &str = "AZURE_OPENAI_ENDPOINT";
pub const AZURE_OPENAI_API_VERSION: &str = "AZURE_OPENAI_API_VERSION";

pub enum AnyProviderClient {
    OpenAI(OpenAiClient),
    Azure(AzureOpenAiClient),
}

impl ProviderClient for AnyProviderClient {
    fn complete(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        match self {
            AnyProviderClient::OpenAI(c) => c.complete(model, prompt),
            AnyProviderClient::Azure(c) => c.complete(model, prompt),
        }
    }
}

/// Builds the client for `provider`, pulling credentials through `lookup`.
pub fn create_client<F>(provider: ProviderKind, lookup: F) -> Result<AnyProviderClient, ProviderError>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |var: &str| {
        lookup(var)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    let require = |var: &'static str| {
        read(var).ok_or_else(|| ProviderError::MissingCredential {
            provider: provider.provider_name().to_string(),
            var,
        })
    };

    let client = match provider {
        ProviderKind::OpenAI => AnyProviderClient::OpenAI(create_openai(
            read(OPENAI_BASE_URL).unwrap_or_else(|| OPENAI_DEFAULT_BASE_URL.to_string()),
            require(OPENAI_API_KEY)?,
        )),
        ProviderKind::GpuStack => AnyProviderClient::OpenAI(create_gpustack(
            read(GPUSTACK_BASE_URL).unwrap_or_else(|| GPUSTACK_DEFAULT_BASE_URL.to_string()),
            require(GPUSTACK_API_KEY)?,
        )),
        ProviderKind::Azure => AnyProviderClient::Azure(AzureOpenAiClient::new(
            require(AZURE_OPENAI_ENDPOINT)?,
            require(AZURE_OPENAI_API_KEY)?,
            read(AZURE_OPENAI_API_VERSION).unwrap_or_else(|| AZURE_DEFAULT_API_VERSION.to_string()),
        )),
    };
    Ok(client)
}

/// Entry point the run loop calls for every (provider, model) pair.
pub trait Dispatcher {
    fn dispatch(&self, provider: &str, model: &str, prompt: &str) -> Result<String, ProviderError>;
}

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Resolves the provider tag and reads credentials from the environment on every call.
pub struct EnvDispatcher {
    lookup: EnvLookup,
}

impl Default for EnvDispatcher {
    fn default() -> Self {
        Self::with_lookup(|var| std::env::var(var).ok())
    }
}

impl EnvDispatcher {
    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'static,
    {
        Self {
            lookup: Box::new(lookup),
        }
    }
}

impl Dispatcher for EnvDispatcher {
    fn dispatch(&self, provider: &str, model: &str, prompt: &str) -> Result<String, ProviderError> {
        let kind = ProviderKind::from_name(provider)
            .ok_or_else(|| ProviderError::UnsupportedProvider(provider.to_string()))?;
        let client = create_client(kind, &self.lookup)?;
        client.complete(model, prompt)
    }
}
