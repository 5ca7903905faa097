// mdquiz - Markdown-driven terminal quiz
// Turns a markdown question list into an interactive, randomly ordered quiz session

pub mod cli;
pub mod logging;
pub mod models;
pub mod parser;
pub mod render;
pub mod session;
pub mod source;
pub mod ui;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{QuestionRecord, QuizConfig};
pub use parser::{extract_questions, parse_document, Node, QuestionExtractor};
pub use render::RichTextRenderer;
pub use session::{Orchestrator, Sampler, SessionError, SessionOutcome};
