use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(default)]
    pub code: Option<String>,
    pub options: Vec<String>,
    #[serde(rename = "correct")]
    pub correct_index: usize,
}

impl Question {
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_question_file_fields() {
        let json = r#"{"question": "2+2?", "options": ["3", "4", "5"], "correct": 1}"#;
        let question: Question = serde_json::from_str(json).unwrap();

        assert_eq!(question.prompt, "2+2?");
        assert_eq!(question.option_count(), 3);
        assert!(question.code.is_none());
        assert!(question.is_correct(1));
        assert!(!question.is_correct(0));
    }

    #[test]
    fn test_deserialize_optional_code() {
        let json = r#"{"question": "Output?", "code": "fn main() {}", "options": ["a"], "correct": 0}"#;
        let question: Question = serde_json::from_str(json).unwrap();

        assert_eq!(question.code.as_deref(), Some("fn main() {}"));
    }
}
