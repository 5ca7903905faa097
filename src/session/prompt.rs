use crate::models::QuestionRecord;
use crate::render::wrap_ansi;
use std::fmt;

/// Identity token of the continue prompt; the NUL byte keeps it apart from any question name
pub const CONTINUE_PROMPT_NAME: &str = "\0continue";

const CONTINUE_MESSAGE: &str = "Do you want to continue?";
const QUESTION_SUFFIX: &str = "Your choice is";

/// Maps the raw answer of a prompt to what gets displayed
pub type ResultTransform = Box<dyn Fn(&str) -> String + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Question,
    Continue,
}

/// One interactive turn, emitted by the orchestrator and consumed once by the terminal
pub struct PromptSpec {
    pub kind: PromptKind,
    pub name: String,
    pub message: String,
    /// Question prompts only
    pub choices: Vec<String>,
    /// Continue prompts only
    pub default: Option<bool>,
    /// Label shown in front of the selection
    pub suffix: Option<String>,
    transform: Option<ResultTransform>,
}

impl fmt::Debug for PromptSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptSpec")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("message", &self.message)
            .field("choices", &self.choices)
            .field("default", &self.default)
            .field("suffix", &self.suffix)
            .field("transform", &self.transform.is_some())
            .finish()
    }
}

/// Prompt name of a sampled question
pub fn question_prompt_name(index: usize) -> String {
    format!("question:{}", index)
}

impl PromptSpec {
    /// Build the question prompt for a sampled record.
    ///
    /// The message is the wrapped question text followed, when present, by a
    /// blank line and the code example. Answering yields the summary of the
    /// available choices and the feedback.
    pub fn question(record: &QuestionRecord, width: usize) -> Self {
        let mut message = wrap_ansi(&record.question_text, width);
        if record.has_code() {
            message.push_str("\n\n");
            message.push_str(&record.code_example);
        }

        let choices = record.choices.clone();
        let listed = choices.join("\n");
        let feedback = record.feedback.clone();
        let transform: ResultTransform = Box::new(move |_answer: &str| {
            let feedback = format!("{}\n", feedback);
            let summary = ["\nAvailable choices were:", listed.as_str(), feedback.as_str()]
                .join("\n\n");
            wrap_ansi(&summary, width)
        });

        Self {
            kind: PromptKind::Question,
            name: question_prompt_name(record.index.unwrap_or_default()),
            message,
            choices,
            default: None,
            suffix: Some(QUESTION_SUFFIX.to_string()),
            transform: Some(transform),
        }
    }

    /// The yes/no prompt asked after every answered question
    pub fn continue_prompt() -> Self {
        Self {
            kind: PromptKind::Continue,
            name: CONTINUE_PROMPT_NAME.to_string(),
            message: CONTINUE_MESSAGE.to_string(),
            choices: Vec::new(),
            default: Some(true),
            suffix: None,
            transform: None,
        }
    }

    /// Apply the result transform, or pass the answer through
    pub fn transform(&self, answer: &str) -> String {
        match &self.transform {
            Some(transform) => transform(answer),
            None => answer.to_string(),
        }
    }
}
