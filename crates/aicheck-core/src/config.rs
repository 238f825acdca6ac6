use std::env;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_BASE_URL: &str = "AICHECK_BASE_URL";
pub const ENV_PROXY: &str = "AICHECK_PROXY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required config field: {0}")]
    MissingField(&'static str),
}

/// Final, merged configuration used by the running process.
///
/// Merge order: CLI > ENV > defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub api_key: String,
    pub base_url: String,
    /// Optional outbound proxy.
    pub proxy: Option<String>,
}

/// Optional layer used for merging config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckConfigPatch {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub proxy: Option<String>,
}

impl CheckConfigPatch {
    pub fn from_env() -> Self {
        Self {
            api_key: env_value(ENV_API_KEY),
            base_url: env_value(ENV_BASE_URL),
            proxy: env_value(ENV_PROXY),
        }
    }

    pub fn overlay(&mut self, other: CheckConfigPatch) {
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.proxy.is_some() {
            self.proxy = other.proxy;
        }
    }

    pub fn into_config(self) -> Result<CheckConfig, ConfigError> {
        Ok(CheckConfig {
            api_key: self.api_key.ok_or(ConfigError::MissingField("api key"))?,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            proxy: self.proxy,
        })
    }
}

fn env_value(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
}
