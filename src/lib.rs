//! # term-quiz
//!
//! A terminal multiple-choice quiz driven by JSON question files.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use term_quiz::{Quiz, QuizConfig, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // A file starts the quiz right away; a directory offers a file picker.
//!     let quiz = Quiz::from_path("questions", QuizConfig::default())?;
//!
//!     let summary = quiz.run().await?;
//!     println!("{} of {} on the first try", summary.first_try, summary.total);
//!
//!     Ok(())
//! }
//! ```

mod app;
mod config;
mod data;
mod event;
mod models;
mod picker;
pub mod telemetry;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use ratatui::{Terminal, backend::Backend};
use thiserror::Error;

pub use app::{App, Effect, Summary};
pub use config::{DEFAULT_EXTENSION, DEFAULT_FEEDBACK_DELAY, QuizConfig};
pub use data::{
    DiscoveryError, LoadError, SourceFile, discover_sources, load_questions_from_json,
};
pub use event::{Direction, EventHandler, QuizEvent, TimerDispatcher};
pub use models::{Outcome, Question, SelectionTracker, SessionState};
pub use picker::{Candidate, SelectionError, SourcePicker};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A question file could not be read or parsed.
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// No usable question files in the given directory.
    #[error("failed to discover question files: {0}")]
    Discovery(#[from] DiscoveryError),
    /// The terminal could not be switched into raw mode.
    #[error("failed to initialize terminal: {0}")]
    TerminalInit(#[source] io::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to draw frame: {0}")]
    Draw(String),
    /// Keyboard input stopped while the quiz was still running.
    #[error("terminal input closed")]
    InputClosed,
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from a list of questions.
    pub fn new(questions: Vec<Question>, config: &QuizConfig) -> Self {
        Self {
            app: App::with_questions(questions, config),
        }
    }

    /// Load a quiz from a question file, or from every matching file below a
    /// directory.
    ///
    /// Every discovered file is parsed up front, so a broken file fails here
    /// rather than after the user picked it.
    pub fn from_path<P: AsRef<Path>>(path: P, config: QuizConfig) -> Result<Self, QuizError> {
        let path = path.as_ref();

        if !path.is_dir() {
            let questions = load_questions_from_json(path)?;
            return Ok(Self::new(questions, &config));
        }

        let candidates = discover_sources(path, &config.extension)?
            .into_iter()
            .map(|source| {
                let questions = load_questions_from_json(&source.path)?;
                Ok::<_, LoadError>(Candidate { source, questions })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            app: App::with_candidates(candidates, &config),
        })
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal until the last question is answered or the
    /// user quits. The terminal is restored on every exit path.
    pub async fn run(mut self) -> Result<Summary, QuizError> {
        let mut terminal = terminal::init().map_err(QuizError::TerminalInit)?;
        let mut events = EventHandler::with_terminal_input();

        let result = run_event_loop(&mut terminal, &mut self.app, &mut events).await;
        drop(events);
        let restored = terminal::restore();

        settle(result, restored).map(|()| self.app.summary())
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

/// Draws, waits for one event, applies it; until the session is over.
pub async fn run_event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), QuizError> {
    let timer = events.timer();

    while !app.is_finished() {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| QuizError::Draw(e.to_string()))?;

        let event = match events.next().await {
            Some(QuizEvent::InputClosed) | None => return Err(QuizError::InputClosed),
            Some(event) => event,
        };

        if let Some(Effect::ScheduleTimer(delay)) = app.handle(event) {
            timer.schedule(delay);
        }
    }

    Ok(())
}

/// The loop's own error wins over a failed restore.
fn settle(result: Result<(), QuizError>, restored: io::Result<()>) -> Result<(), QuizError> {
    result?;
    restored.map_err(QuizError::from)
}
