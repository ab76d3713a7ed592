use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const CONFIG_PATH_ENV: &str = "PROMPT_SWEEP_CONFIG";
pub const DATA_DIR_ENV: &str = "PROMPT_SWEEP_DATA_DIR";
pub const LOG_DIR_ENV: &str = "PROMPT_SWEEP_LOG_DIR";

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_LOG_DIR: &str = "logs";

/// One entry under `providers:` in the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSection {
    /// Provider tag as written in the file (e.g. "openai", "azure")
    pub name: String,
    pub include: bool,
    /// Models to query, in declaration order
    pub models: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderBody {
    #[serde(default)]
    include: bool,
    #[serde(default)]
    models: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    providers: Mapping,
    prompt: String,
}

/// Parsed sweep configuration. Provider order follows the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    pub providers: Vec<ProviderSection>,
    pub prompt: String,
}

impl SweepConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_yaml::from_str(content)?;

        let mut providers = Vec::with_capacity(raw.providers.len());
        for (key, body) in raw.providers {
            let Value::String(name) = key else {
                return Err(ConfigError::Invalid(format!(
                    "provider name must be a string, got {:?}",
                    key
                )));
            };
            let body: ProviderBody = serde_yaml::from_value(body)?;
            providers.push(ProviderSection {
                name,
                include: body.include,
                models: body.models,
            });
        }

        Ok(SweepConfig {
            providers,
            prompt: raw.prompt,
        })
    }

    /// Providers with `include: true`, in file order.
    pub fn included_providers(&self) -> impl Iterator<Item = &ProviderSection> {
        self.providers.iter().filter(|p| p.include)
    }
}

/// Filesystem locations for one run, overridable through the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub config_path: PathBuf,
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl RunSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        RunSettings {
            config_path: pick(CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH),
            data_dir: pick(DATA_DIR_ENV, DEFAULT_DATA_DIR),
            log_dir: pick(LOG_DIR_ENV, DEFAULT_LOG_DIR),
        }
    }
}
