/// UI state of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Choosing which discovered question files make up the session.
    FileSelecting,
    /// Navigating the options of the current question.
    Selecting,
    /// The highlighted option was right; waiting for the timer to advance.
    FeedbackCorrect,
    /// The highlighted option was wrong; waiting for the timer to return.
    FeedbackIncorrect,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Quit,
}
