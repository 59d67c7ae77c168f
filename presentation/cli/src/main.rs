use std::process::ExitCode;
use std::sync::Arc;

use dotenvy::dotenv;
use logger::TracingLogger;

mod config;
mod console;
mod setup;

use config::{logging_config, openai_config::OpenAIConfig};
use setup::{dependency_injection::DependencyContainer, runner::Runner};

/// CLI Entry Point
///
/// Asks the OpenAI chat completions API for one haiku and prints it.
///
/// - config/: Credential and logging configuration
/// - setup/: Dependency injection and the single-shot runner
/// - console/: Stdout rendering of haikus and errors
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing on stderr with RUST_LOG env filter
    logging_config::init_tracing()?;

    // 3. Load configuration
    let config = OpenAIConfig::from_env();

    // 4. Wire dependencies and run the request
    let mut stdout = std::io::stdout();
    let runner = Runner::new(Arc::new(TracingLogger));
    let outcome = runner
        .run(config, DependencyContainer::new, &mut stdout)
        .await?;

    Ok(outcome.exit_code())
}
