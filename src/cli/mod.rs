pub mod extract;
pub mod play;

use crate::models::{QuestionRecord, QuizConfig};
use crate::parser::{extract_questions, parse_document};
use crate::render::RichTextRenderer;
use crate::source::{load_document, DocumentLocation};
use crate::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Where the quiz comes from and how it is laid out
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Read the quiz from a local markdown file instead of fetching it
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Fetch the quiz from this URL (overrides base_url and locale)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Translation of the quiz to fetch (e.g. "de-DE")
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Wrap question text at this many columns
    #[arg(long, global = true)]
    pub width: Option<usize>,

    /// Config file (default: <config dir>/mdquiz/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl SourceArgs {
    /// Load the config file and apply command line overrides
    pub fn resolve_config(&self) -> Result<QuizConfig> {
        let mut config = match self.config.clone().or_else(QuizConfig::default_path) {
            Some(path) => QuizConfig::load(&path)?,
            None => QuizConfig::default(),
        };

        if let Some(locale) = &self.locale {
            config.locale = locale.clone();
        }
        if let Some(width) = self.width {
            anyhow::ensure!(width > 0, "--width must be at least 1");
            config.wrap_width = width;
        }
        Ok(config)
    }

    /// A local file wins over an explicit URL, which wins over the configured one
    pub fn location(&self, config: &QuizConfig) -> DocumentLocation {
        match (&self.file, &self.url) {
            (Some(path), _) => DocumentLocation::Local(path.clone()),
            (None, Some(url)) => DocumentLocation::Remote(url.clone()),
            (None, None) => DocumentLocation::Remote(config.document_url()),
        }
    }
}

/// Resolve config, load the document and extract its questions
pub async fn load_questions(args: &SourceArgs) -> Result<(QuizConfig, Vec<QuestionRecord>)> {
    let config = args.resolve_config()?;
    let location = args.location(&config);

    let markdown = load_document(&location)
        .await
        .context("Failed to load the quiz document")?;

    let document = parse_document(&markdown);
    let renderer = RichTextRenderer::new(config.highlight_languages.clone());
    let questions = extract_questions(&document, &renderer);

    Ok((config, questions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_location_precedence() {
        let config = QuizConfig::default();
        let args = SourceArgs {
            file: Some(PathBuf::from("quiz.md")),
            url: Some("https://example.com/quiz.md".to_string()),
            ..SourceArgs::default()
        };
        assert_eq!(args.location(&config), DocumentLocation::Local(PathBuf::from("quiz.md")));

        let args = SourceArgs {
            url: Some("https://example.com/quiz.md".to_string()),
            ..SourceArgs::default()
        };
        assert_eq!(
            args.location(&config),
            DocumentLocation::Remote("https://example.com/quiz.md".to_string())
        );

        assert_eq!(
            SourceArgs::default().location(&config),
            DocumentLocation::Remote(config.document_url())
        );
    }

    #[test]
    fn test_overrides_applied_to_config() {
        let temp = TempDir::new().unwrap();
        let args = SourceArgs {
            locale: Some("es-ES".to_string()),
            width: Some(60),
            config: Some(temp.path().join("config.toml")),
            ..SourceArgs::default()
        };

        let config = args.resolve_config().unwrap();
        assert_eq!(config.locale, "es-ES");
        assert_eq!(config.wrap_width, 60);
    }

    #[test]
    fn test_zero_width_rejected() {
        let temp = TempDir::new().unwrap();
        let args = SourceArgs {
            width: Some(0),
            config: Some(temp.path().join("config.toml")),
            ..SourceArgs::default()
        };
        assert!(args.resolve_config().is_err());
    }

    #[tokio::test]
    async fn test_load_questions_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("quiz.md");
        std::fs::write(&path, "# Quiz\n\n---\n\n# 1. One?\n\n- A\n- B\n\n---\n\n# 2. Two?\n\n- C\n").unwrap();

        let args = SourceArgs {
            file: Some(path),
            config: Some(temp.path().join("config.toml")),
            ..SourceArgs::default()
        };
        let (_, questions) = load_questions(&args).await.unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].choices, vec!["C"]);
    }
}
