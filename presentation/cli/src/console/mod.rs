pub mod haiku;
pub mod message;

use std::process::ExitCode;

/// Terminal state of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
    MissingCredential,
}

impl Outcome {
    /// Only a missing credential ends the process with a failure status;
    /// request errors are reported and the run completes normally.
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::MissingCredential => ExitCode::FAILURE,
            Outcome::Succeeded | Outcome::Failed => ExitCode::SUCCESS,
        }
    }
}
