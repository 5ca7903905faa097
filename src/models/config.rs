use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the question documents (one directory per locale)
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/lydiahallie/javascript-questions/master";

/// Default translation of the question document
pub const DEFAULT_LOCALE: &str = "en-EN";

/// Default display width used for wrapping prompt text
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Errors raised while loading the quiz configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}': {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config file '{0}': {1}")]
    Parse(PathBuf, toml::de::Error),

    #[error("Invalid wrap width: {0}")]
    InvalidWidth(usize),
}

/// Quiz configuration, read from `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Base URL under which `<locale>/README.md` lives
    pub base_url: String,

    /// Translation directory to fetch
    pub locale: String,

    /// Column width for question and summary text
    pub wrap_width: usize,

    /// Fence language tags that receive syntax highlighting
    pub highlight_languages: Vec<String>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            wrap_width: DEFAULT_WRAP_WIDTH,
            highlight_languages: vec!["javascript".to_string(), "js".to_string()],
        }
    }
}

impl QuizConfig {
    /// Default config path: `<config_dir>/mdquiz/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mdquiz").join("config.toml"))
    }

    /// Load config from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        let config: QuizConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;

        if config.wrap_width == 0 {
            return Err(ConfigError::InvalidWidth(config.wrap_width));
        }
        Ok(config)
    }

    /// URL of the question document for the configured locale
    pub fn document_url(&self) -> String {
        format!(
            "{}/{}/README.md",
            self.base_url.trim_end_matches('/'),
            self.locale.trim_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = QuizConfig::load(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config, QuizConfig::default());
        assert_eq!(config.wrap_width, 80);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "locale = \"de-DE\"\nwrap_width = 100\n").unwrap();

        let config = QuizConfig::load(&path).unwrap();
        assert_eq!(config.locale, "de-DE");
        assert_eq!(config.wrap_width, 100);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.highlight_languages, vec!["javascript", "js"]);
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "wrap_width = \"wide\"").unwrap();

        assert!(matches!(QuizConfig::load(&path), Err(ConfigError::Parse(..))));
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "wrap_width = 0").unwrap();

        assert!(matches!(QuizConfig::load(&path), Err(ConfigError::InvalidWidth(0))));
    }

    #[test]
    fn test_document_url_joins_locale() {
        let config = QuizConfig {
            base_url: "https://example.com/quiz/".to_string(),
            locale: "fr-FR".to_string(),
            ..QuizConfig::default()
        };
        assert_eq!(config.document_url(), "https://example.com/quiz/fr-FR/README.md");
    }
}
