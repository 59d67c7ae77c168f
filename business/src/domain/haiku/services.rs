use async_trait::async_trait;

use super::errors::HaikuError;
use super::model::{Haiku, HaikuPrompt};

/// Service port for asking a language model for a haiku.
#[async_trait]
pub trait HaikuGeneratorService: Send + Sync {
    async fn generate(&self, prompt: &HaikuPrompt) -> Result<Haiku, HaikuError>;
}
