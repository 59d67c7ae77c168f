use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::haiku::errors::HaikuError;
use crate::domain::haiku::model::{Haiku, HaikuPrompt};
use crate::domain::haiku::services::HaikuGeneratorService;
use crate::domain::haiku::use_cases::generate::GenerateHaikuUseCase;
use crate::domain::logger::Logger;

pub struct GenerateHaikuUseCaseImpl {
    pub generator: Arc<dyn HaikuGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateHaikuUseCase for GenerateHaikuUseCaseImpl {
    async fn execute(&self) -> Result<Haiku, HaikuError> {
        let prompt = HaikuPrompt::fixed();
        self.logger.debug(&format!(
            "Requesting haiku (temperature: {}, max_tokens: {})",
            prompt.temperature, prompt.max_tokens
        ));

        match self.generator.generate(&prompt).await {
            Ok(haiku) => {
                self.logger.info(&format!(
                    "Haiku generated ({} lines)",
                    haiku.text().lines().count()
                ));
                Ok(haiku)
            }
            Err(error) => {
                self.logger
                    .error(&format!("Haiku generation failed: {}", error));
                Err(error)
            }
        }
    }
}
