use business::domain::haiku::errors::HaikuError;

use crate::config::openai_config::ConfigError;
use crate::console::message::IntoConsoleMessage;

impl IntoConsoleMessage for HaikuError {
    fn into_console_message(self) -> Vec<String> {
        vec![
            format!("An error occurred: {}", self),
            String::new(),
            "Please check your API key and make sure you have sufficient credits.".to_string(),
        ]
    }
}

impl IntoConsoleMessage for ConfigError {
    fn into_console_message(self) -> Vec<String> {
        match self {
            ConfigError::MissingApiKey => vec![
                "Please set your OpenAI API key as an environment variable:".to_string(),
                "export OPENAI_API_KEY='your-api-key-here'".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_prefix_error_description_and_add_hint() {
        let lines = HaikuError::request_failed("Error code: 401 - bad key").into_console_message();

        assert_eq!(lines[0], "An error occurred: Error code: 401 - bad key");
        assert_eq!(
            lines.last().unwrap(),
            "Please check your API key and make sure you have sufficient credits."
        );
    }

    #[test]
    fn should_explain_how_to_set_api_key() {
        let lines = ConfigError::MissingApiKey.into_console_message();

        assert_eq!(
            lines,
            vec![
                "Please set your OpenAI API key as an environment variable:",
                "export OPENAI_API_KEY='your-api-key-here'",
            ]
        );
    }
}
