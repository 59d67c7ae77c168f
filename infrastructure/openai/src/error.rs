use std::error::Error;

use business::domain::haiku::errors::HaikuError;

/// Flattens an error and its `source()` chain into one line.
pub(crate) fn describe(error: &dyn Error) -> String {
    let mut description = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        description.push_str(": ");
        description.push_str(&cause.to_string());
        source = cause.source();
    }
    description
}

pub(crate) fn request_failed(error: &dyn Error) -> HaikuError {
    HaikuError::request_failed(describe(error))
}
