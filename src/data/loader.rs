use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Question;

/// Errors raised while turning a question file into questions.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{} must contain at least one question", path.display())]
    Empty { path: PathBuf },
    #[error("question {} in {} is invalid: {reason}", index + 1, path.display())]
    InvalidQuestion {
        path: PathBuf,
        index: usize,
        reason: String,
    },
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let questions: Vec<Question> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if questions.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    for (index, question) in questions.iter().enumerate() {
        validate_question(question).map_err(|reason| LoadError::InvalidQuestion {
            path: path.to_path_buf(),
            index,
            reason,
        })?;
    }

    tracing::info!(path = %path.display(), count = questions.len(), "loaded questions");
    Ok(questions)
}

fn validate_question(question: &Question) -> Result<(), String> {
    if question.options.is_empty() {
        return Err("no options".to_string());
    }

    if question.correct_index >= question.options.len() {
        return Err(format!(
            "correct answer {} is out of range for {} options",
            question.correct_index,
            question.options.len()
        ));
    }

    Ok(())
}
