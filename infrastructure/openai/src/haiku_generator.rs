use async_trait::async_trait;
use serde_json::{Value, json};

use business::domain::haiku::errors::HaikuError;
use business::domain::haiku::model::{Haiku, HaikuPrompt};
use business::domain::haiku::services::HaikuGeneratorService;

use crate::client::OpenAIClient;
use crate::error::request_failed;

const MODEL: &str = "gpt-3.5-turbo";

pub struct HaikuGeneratorOpenAI {
    client: OpenAIClient,
}

impl HaikuGeneratorOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn build_body(prompt: &HaikuPrompt) -> Value {
        json!({
            "model": MODEL,
            "messages": [
                {"role": "system", "content": prompt.system},
                {"role": "user", "content": prompt.user},
            ],
            "temperature": prompt.temperature,
            "max_tokens": prompt.max_tokens,
        })
    }

    fn extract_content(data: &Value) -> Result<&str, HaikuError> {
        data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .ok_or_else(|| {
                HaikuError::request_failed(
                    "Malformed response: missing choices[0].message.content",
                )
            })
    }
}

#[async_trait]
impl HaikuGeneratorService for HaikuGeneratorOpenAI {
    async fn generate(&self, prompt: &HaikuPrompt) -> Result<Haiku, HaikuError> {
        let body = Self::build_body(prompt);

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| request_failed(&e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(HaikuError::request_failed(format!(
                "Error code: {} - {}",
                status.as_u16(),
                text
            )));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| request_failed(&e))?;

        let content = Self::extract_content(&data)?;

        Ok(Haiku::from_completion(content))
    }
}
