use std::sync::Arc;

use logger::TracingLogger;

use openai::client::OpenAIClient;
use openai::haiku_generator::HaikuGeneratorOpenAI;

use business::application::haiku::generate::GenerateHaikuUseCaseImpl;
use business::domain::haiku::errors::HaikuError;
use business::domain::haiku::services::HaikuGeneratorService;

use crate::config::openai_config::OpenAIConfig;
use crate::console::haiku::view::HaikuConsole;

pub struct DependencyContainer {
    pub haiku_console: HaikuConsole,
}

impl DependencyContainer {
    pub fn new(config: OpenAIConfig) -> Result<Self, HaikuError> {
        let openai_client = OpenAIClient::new(config.api_key)?;
        let haiku_generator = Arc::new(HaikuGeneratorOpenAI::new(openai_client));

        Ok(Self::with_generator(haiku_generator))
    }

    pub fn with_generator(generator: Arc<dyn HaikuGeneratorService>) -> Self {
        let logger = Arc::new(TracingLogger);

        let generate_haiku_use_case = Arc::new(GenerateHaikuUseCaseImpl { generator, logger });

        Self {
            haiku_console: HaikuConsole::new(generate_haiku_use_case),
        }
    }
}
