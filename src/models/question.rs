use serde::{Deserialize, Serialize};

/// A single quiz item recovered from one span of the source document.
///
/// Every text field holds rendered (possibly ANSI-styled) output, not markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Rendered heading of the question
    pub question_text: String,

    /// Rendered fenced code block, empty when the question has none
    #[serde(default)]
    pub code_example: String,

    /// Rendered list items in display order
    pub choices: Vec<String>,

    /// Rendered explanation from the details block, empty when absent
    #[serde(default)]
    pub feedback: String,

    /// Position in the session pool, stamped when the record is drawn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl QuestionRecord {
    pub fn new(
        question_text: impl Into<String>,
        code_example: impl Into<String>,
        choices: Vec<String>,
        feedback: impl Into<String>,
    ) -> Self {
        Self {
            question_text: question_text.into(),
            code_example: code_example.into(),
            choices,
            feedback: feedback.into(),
            index: None,
        }
    }

    /// Whether the record carries a code example
    pub fn has_code(&self) -> bool {
        !self.code_example.is_empty()
    }

    /// Return the record stamped with its pool index
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_has_no_index() {
        let record = QuestionRecord::new("1. What?", "", vec!["A".into()], "");
        assert_eq!(record.index, None);
        assert!(!record.has_code());
    }

    #[test]
    fn test_with_index_stamps_position() {
        let record = QuestionRecord::new("1. What?", "let a;", vec!["A".into()], "").with_index(4);
        assert_eq!(record.index, Some(4));
        assert!(record.has_code());
    }

    #[test]
    fn test_index_omitted_from_json_until_sampled() {
        let record = QuestionRecord::new("Q", "", vec!["A".into(), "B".into()], "because");
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("index"));

        let json = serde_json::to_string(&record.with_index(2)).unwrap();
        assert!(json.contains("\"index\":2"));
    }
}
