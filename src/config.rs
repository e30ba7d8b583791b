use std::time::Duration;

pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_EXTENSION: &str = "json";

/// Runtime settings for a quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// How long correct/incorrect feedback stays on screen.
    pub feedback_delay: Duration,
    /// File suffix used when discovering question files in a directory.
    pub extension: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}
