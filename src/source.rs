//! Retrieval of the quiz document

use std::path::PathBuf;

/// Errors raised while retrieving the quiz document
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to fetch '{url}': {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },

    #[error("Fetching '{url}' returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Where the quiz markdown comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentLocation {
    Remote(String),
    Local(PathBuf),
}

/// GET `url` and return the body as markdown text
pub async fn fetch_document(url: &str) -> Result<String, FetchError> {
    tracing::info!(url, "fetching quiz document");

    let request_error = |source| FetchError::Request {
        url: url.to_string(),
        source,
    };
    let response = reqwest::get(url).await.map_err(request_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(request_error)
}

/// Load the quiz markdown from wherever `location` points
pub async fn load_document(location: &DocumentLocation) -> Result<String, FetchError> {
    match location {
        DocumentLocation::Remote(url) => fetch_document(url).await,
        DocumentLocation::Local(path) => {
            tracing::info!(path = %path.display(), "reading quiz document");
            std::fs::read_to_string(path).map_err(|source| FetchError::Read {
                path: path.clone(),
                source,
            })
        }
    }
}
