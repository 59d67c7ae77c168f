pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("config.missing_api_key")]
    MissingApiKey,
}

/// Configuration for OpenAI API access.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: String,
}

impl OpenAIConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the API key through `lookup`. Unset and empty values are rejected;
    /// anything else is passed through untouched and judged by the API.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match lookup(API_KEY_VAR) {
            Some(api_key) if !api_key.is_empty() => Ok(Self { api_key }),
            _ => Err(ConfigError::MissingApiKey),
        }
    }
}
