use reqwest::Client;

use business::domain::haiku::errors::HaikuError;

use crate::error::request_failed;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Shared OpenAI HTTP client configuration.
pub struct OpenAIClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl OpenAIClient {
    pub fn new(api_key: String) -> Result<Self, HaikuError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Points the client at another OpenAI-compatible host.
    pub fn with_base_url(
        api_key: String,
        base_url: impl Into<String>,
    ) -> Result<Self, HaikuError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| request_failed(&e))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_openai_host() {
        let client = OpenAIClient::new("sk-test".to_string()).unwrap();
        assert_eq!(
            client.chat_completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn should_strip_trailing_slash_from_base_url() {
        let client =
            OpenAIClient::with_base_url("sk-test".to_string(), "http://localhost:9999/").unwrap();
        assert_eq!(
            client.chat_completions_url(),
            "http://localhost:9999/chat/completions"
        );
    }

    #[test]
    fn should_build_bearer_header() {
        let client = OpenAIClient::new("sk-test".to_string()).unwrap();
        assert_eq!(client.auth_header(), "Bearer sk-test");
    }
}
