pub mod config;
pub mod question;

pub use config::{ConfigError, QuizConfig};
pub use question::QuestionRecord;
