pub mod extract;
pub mod markdown;

pub use extract::{extract_questions, split_spans, QuestionExtractor, SkipReason};
pub use markdown::{parse_document, MarkdownParser, Node};
