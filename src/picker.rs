//! Pre-session selection of question files.

use thiserror::Error;

use crate::data::SourceFile;
use crate::event::Direction;
use crate::models::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("select at least one file with questions")]
    NoQuestionsSelected,
}

/// A discovered file together with its already parsed questions.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub source: SourceFile,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone)]
pub struct SourcePicker {
    candidates: Vec<Candidate>,
    /// Chosen candidate indices in the order they were toggled on.
    chosen: Vec<usize>,
    cursor: usize,
    notice: Option<SelectionError>,
}

impl SourcePicker {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            chosen: Vec::new(),
            cursor: 0,
            notice: None,
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn notice(&self) -> Option<SelectionError> {
        self.notice
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let len = self.candidates.len();
        if len == 0 {
            return;
        }

        self.cursor = match direction {
            Direction::Up => (self.cursor + len - 1) % len,
            Direction::Down => (self.cursor + 1) % len,
        };
    }

    pub fn toggle_current(&mut self) {
        self.toggle(self.cursor);
    }

    pub fn toggle(&mut self, index: usize) {
        if index >= self.candidates.len() {
            return;
        }

        self.notice = None;
        match self.chosen.iter().position(|&chosen| chosen == index) {
            Some(position) => {
                self.chosen.remove(position);
            }
            None => self.chosen.push(index),
        }
    }

    pub fn is_chosen(&self, index: usize) -> bool {
        self.chosen.contains(&index)
    }

    /// 1-based position of `index` in selection order.
    pub fn chosen_rank(&self, index: usize) -> Option<usize> {
        self.chosen
            .iter()
            .position(|&chosen| chosen == index)
            .map(|position| position + 1)
    }

    pub fn chosen_question_count(&self) -> usize {
        self.chosen
            .iter()
            .map(|&index| self.candidates[index].questions.len())
            .sum()
    }

    /// Concatenates the chosen files' questions in selection order.
    ///
    /// On failure the notice is set so the picker screen can show it.
    pub fn build(&mut self) -> Result<Vec<Question>, SelectionError> {
        let questions: Vec<Question> = self
            .chosen
            .iter()
            .flat_map(|&index| self.candidates[index].questions.iter().cloned())
            .collect();

        if questions.is_empty() {
            self.notice = Some(SelectionError::NoQuestionsSelected);
            return Err(SelectionError::NoQuestionsSelected);
        }

        Ok(questions)
    }
}
