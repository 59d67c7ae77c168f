pub mod logging_config;
pub mod openai_config;
