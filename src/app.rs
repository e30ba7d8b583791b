use std::time::Duration;

use crate::config::QuizConfig;
use crate::event::{Direction, QuizEvent};
use crate::models::{Outcome, Question, SelectionTracker, SessionState};
use crate::picker::{Candidate, SourcePicker};

/// Side effects requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ScheduleTimer(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub answered: usize,
    pub first_try: usize,
    pub outcome: Outcome,
}

pub struct App {
    state: SessionState,
    questions: Vec<Question>,
    current_question_index: usize,
    highlighted_option: usize,
    wrong_selections: SelectionTracker,
    picker: Option<SourcePicker>,
    feedback_delay: Duration,
    first_try: usize,
    outcome: Option<Outcome>,
}

impl App {
    /// Starts directly on the first question.
    pub fn with_questions(questions: Vec<Question>, config: &QuizConfig) -> Self {
        let outcome = questions.is_empty().then_some(Outcome::Completed);

        Self {
            state: SessionState::Selecting,
            questions,
            current_question_index: 0,
            highlighted_option: 0,
            wrong_selections: SelectionTracker::new(),
            picker: None,
            feedback_delay: config.feedback_delay,
            first_try: 0,
            outcome,
        }
    }

    /// Starts in the file picker, unless there is nothing to pick between.
    pub fn with_candidates(mut candidates: Vec<Candidate>, config: &QuizConfig) -> Self {
        if candidates.len() == 1 {
            let only = candidates.remove(0);
            return Self::with_questions(only.questions, config);
        }

        let mut app = Self::with_questions(Vec::new(), config);
        app.state = SessionState::FileSelecting;
        app.picker = Some(SourcePicker::new(candidates));
        app.outcome = None;
        app
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Present only while in `FileSelecting`.
    pub fn picker(&self) -> Option<&SourcePicker> {
        self.picker.as_ref()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_question_index)
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn highlighted_option(&self) -> usize {
        self.highlighted_option
    }

    pub fn wrong_selections(&self) -> &SelectionTracker {
        &self.wrong_selections
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total: self.questions.len(),
            answered: self.current_question_index,
            first_try: self.first_try,
            outcome: self.outcome.unwrap_or(Outcome::Quit),
        }
    }

    /// Applies one event. Returns the timer to arm, if any.
    pub fn handle(&mut self, event: QuizEvent) -> Option<Effect> {
        if self.is_finished() {
            return None;
        }

        if event == QuizEvent::Quit {
            tracing::debug!(question = self.current_question_index, "quit requested");
            self.outcome = Some(Outcome::Quit);
            return None;
        }

        match self.state {
            SessionState::FileSelecting => {
                self.handle_picker(event);
                None
            }
            SessionState::Selecting => self.handle_selecting(event),
            SessionState::FeedbackCorrect | SessionState::FeedbackIncorrect => {
                if event == QuizEvent::TimerFired {
                    self.finish_feedback();
                }
                None
            }
        }
    }

    fn handle_picker(&mut self, event: QuizEvent) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };

        match event {
            QuizEvent::Navigate(direction) => picker.move_cursor(direction),
            QuizEvent::Toggle => picker.toggle_current(),
            QuizEvent::Confirm => match picker.build() {
                Ok(questions) => {
                    tracing::debug!(count = questions.len(), "question set built");
                    self.picker = None;
                    self.questions = questions;
                    self.current_question_index = 0;
                    self.highlighted_option = 0;
                    self.wrong_selections.clear();
                    self.state = SessionState::Selecting;
                }
                Err(e) => tracing::debug!(error = %e, "confirm rejected"),
            },
            _ => {}
        }
    }

    fn handle_selecting(&mut self, event: QuizEvent) -> Option<Effect> {
        match event {
            QuizEvent::Navigate(Direction::Up) => {
                self.select_previous_option();
                None
            }
            QuizEvent::Navigate(Direction::Down) => {
                self.select_next_option();
                None
            }
            QuizEvent::Confirm | QuizEvent::Toggle => self.submit_answer(),
            _ => None,
        }
    }

    fn option_count(&self) -> usize {
        self.current_question()
            .map(Question::option_count)
            .unwrap_or(0)
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.highlighted_option = (self.highlighted_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.highlighted_option = (self.highlighted_option + count - 1) % count;
        }
    }

    fn submit_answer(&mut self) -> Option<Effect> {
        let question = self.current_question()?;
        let choice = self.highlighted_option;

        if question.is_correct(choice) {
            if self.wrong_selections.is_empty() {
                self.first_try += 1;
            }
            self.state = SessionState::FeedbackCorrect;
        } else if self.wrong_selections.insert(choice) {
            self.state = SessionState::FeedbackIncorrect;
        } else {
            // Already marked wrong; no second round of feedback.
            return None;
        }

        tracing::debug!(
            question = self.current_question_index,
            choice,
            state = ?self.state,
            "answer submitted"
        );
        Some(Effect::ScheduleTimer(self.feedback_delay))
    }

    fn finish_feedback(&mut self) {
        if self.state == SessionState::FeedbackCorrect {
            self.current_question_index += 1;
            self.wrong_selections.clear();

            if self.current_question_index == self.questions.len() {
                tracing::debug!("question set completed");
                self.outcome = Some(Outcome::Completed);
            }
        }

        self.highlighted_option = 0;
        self.state = SessionState::Selecting;
    }
}
