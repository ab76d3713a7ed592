// LLM client interfaces and provider implementations

pub mod provider_handle;
pub mod provider_base;
pub mod azure;
pub mod openai;
