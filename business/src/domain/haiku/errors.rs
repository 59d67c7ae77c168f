/// Failure of a haiku request.
///
/// Network, authentication, quota and decoding failures all collapse into
/// one variant carrying the underlying description.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HaikuError {
    #[error("{0}")]
    RequestFailed(String),
}

impl HaikuError {
    pub fn request_failed(description: impl Into<String>) -> Self {
        HaikuError::RequestFailed(description.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_bare_description() {
        let error = HaikuError::request_failed("Error code: 401 - invalid key");
        assert_eq!(error.to_string(), "Error code: 401 - invalid key");
    }
}
