use std::io::{self, Write};
use std::sync::Arc;

use business::domain::haiku::errors::HaikuError;
use business::domain::logger::Logger;

use crate::config::openai_config::{ConfigError, OpenAIConfig};
use crate::console::Outcome;
use crate::console::message::{IntoConsoleMessage, write_lines};
use crate::setup::dependency_injection::DependencyContainer;

pub struct Runner {
    logger: Arc<dyn Logger>,
}

impl Runner {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }

    /// Runs the single haiku request.
    ///
    /// `wire` is only invoked once a credential is available, so a missing
    /// key never reaches the network.
    pub async fn run<F, W>(
        &self,
        config: Result<OpenAIConfig, ConfigError>,
        wire: F,
        out: &mut W,
    ) -> io::Result<Outcome>
    where
        F: FnOnce(OpenAIConfig) -> Result<DependencyContainer, HaikuError>,
        W: Write,
    {
        let config = match config {
            Ok(config) => config,
            Err(err) => {
                self.logger
                    .warn(&format!("Aborting before request: {}", err));
                write_lines(out, &err.into_console_message())?;
                return Ok(Outcome::MissingCredential);
            }
        };

        match wire(config) {
            Ok(container) => container.haiku_console.show(out).await,
            Err(err) => {
                self.logger
                    .error(&format!("Client construction failed: {}", err));
                write_lines(out, &err.into_console_message())?;
                Ok(Outcome::Failed)
            }
        }
    }
}
