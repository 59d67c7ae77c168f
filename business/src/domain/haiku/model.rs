pub const SYSTEM_INSTRUCTION: &str = "You are a haiku expert. Write concise, creative haikus.";
pub const USER_PROMPT: &str = "Write a haiku about artificial intelligence.";
pub const TEMPERATURE: f64 = 0.7;
pub const MAX_TOKENS: u32 = 50;

/// Parameters of the single haiku request.
#[derive(Debug, Clone, PartialEq)]
pub struct HaikuPrompt {
    pub system: &'static str,
    pub user: &'static str,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl HaikuPrompt {
    /// The only prompt this program ever sends.
    pub const fn fixed() -> Self {
        Self {
            system: SYSTEM_INSTRUCTION,
            user: USER_PROMPT,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

/// Text returned by the remote model, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Haiku {
    text: String,
}

impl Haiku {
    pub fn from_completion(content: &str) -> Self {
        Self {
            text: content.trim().to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
