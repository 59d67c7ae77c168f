use std::io::{self, Write};
use std::sync::Arc;

use business::domain::haiku::model::Haiku;
use business::domain::haiku::use_cases::generate::GenerateHaikuUseCase;

use crate::console::Outcome;
use crate::console::message::{IntoConsoleMessage, separator, write_lines};

impl IntoConsoleMessage for Haiku {
    fn into_console_message(self) -> Vec<String> {
        vec![
            String::new(),
            "Generated Haiku:".to_string(),
            separator(),
            self.text().to_string(),
            separator(),
        ]
    }
}

pub struct HaikuConsole {
    generate_use_case: Arc<dyn GenerateHaikuUseCase>,
}

impl HaikuConsole {
    pub fn new(generate_use_case: Arc<dyn GenerateHaikuUseCase>) -> Self {
        Self { generate_use_case }
    }

    /// Requests one haiku and prints it, or the failure, to `out`.
    pub async fn show<W: Write>(&self, out: &mut W) -> io::Result<Outcome> {
        match self.generate_use_case.execute().await {
            Ok(haiku) => {
                write_lines(out, &haiku.into_console_message())?;
                Ok(Outcome::Succeeded)
            }
            Err(err) => {
                write_lines(out, &err.into_console_message())?;
                Ok(Outcome::Failed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::haiku::errors::HaikuError;
    use mockall::mock;

    mock! {
        pub GenerateHaiku {}

        #[async_trait]
        impl GenerateHaikuUseCase for GenerateHaiku {
            async fn execute(&self) -> Result<Haiku, HaikuError>;
        }
    }

    #[test]
    fn should_frame_haiku_between_separators() {
        let lines = Haiku::from_completion("one\ntwo\nthree").into_console_message();

        assert_eq!(
            lines,
            vec![
                "",
                "Generated Haiku:",
                "--------------------",
                "one\ntwo\nthree",
                "--------------------",
            ]
        );
    }

    #[tokio::test]
    async fn should_print_haiku_and_report_success() {
        let mut use_case = MockGenerateHaiku::new();
        use_case
            .expect_execute()
            .times(1)
            .returning(|| Ok(Haiku::from_completion("short poem")));
        let console = HaikuConsole::new(Arc::new(use_case));
        let mut out = Vec::new();

        let outcome = console.show(&mut out).await.unwrap();

        assert_eq!(outcome, Outcome::Succeeded);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nGenerated Haiku:\n--------------------\nshort poem\n--------------------\n"
        );
    }

    #[tokio::test]
    async fn should_print_error_and_report_failure() {
        let mut use_case = MockGenerateHaiku::new();
        use_case
            .expect_execute()
            .times(1)
            .returning(|| Err(HaikuError::request_failed("timed out")));
        let console = HaikuConsole::new(Arc::new(use_case));
        let mut out = Vec::new();

        let outcome = console.show(&mut out).await.unwrap();

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "An error occurred: timed out\n\nPlease check your API key and make sure you have sufficient credits.\n"
        );
    }
}
