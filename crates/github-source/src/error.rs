use importer_core::ImportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("Rate limited")]
    RateLimited,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, GitHubError>;

impl From<GitHubError> for ImportError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::Http(e) => ImportError::Http(e.to_string()),
            GitHubError::Parse(e) => ImportError::Parse(e.to_string()),
            GitHubError::Io(e) => ImportError::Io(e.to_string()),
            GitHubError::Unauthorized => ImportError::Unauthorized,
            GitHubError::RateLimited => ImportError::Api {
                status: 429,
                message: "GitHub API rate limit exceeded".to_string(),
            },
            GitHubError::Api { status, message } => ImportError::Api { status, message },
        }
    }
}
