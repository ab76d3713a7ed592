use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenAI,
    GpuStack,
    Azure,
}

impl ProviderKind {
    /// Returns the identifier used in configuration (e.g., "openai", "azure")
    pub fn provider_name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "openai",
            ProviderKind::GpuStack => "gpustack",
            ProviderKind::Azure => "azure",
        }
    }

    /// Parses a config tag. Only the exact lowercase names are accepted.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "openai" => Some(ProviderKind::OpenAI),
            "gpustack" => Some(ProviderKind::GpuStack),
            "azure" => Some(ProviderKind::Azure),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.provider_name())
    }
}
