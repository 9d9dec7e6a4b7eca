use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of the target repository, e.g. "owner/name".
///
/// Opaque to the importer; sources interpret it, and the on-disk layout
/// derives folder names from it via [`RepoId::folder_name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepoId(String);

impl RepoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Filesystem-safe name: path separators replaced with underscores
    pub fn folder_name(&self) -> String {
        self.0.replace(['/', '\\'], "_")
    }
}

impl std::fmt::Display for RepoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RepoId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Common issue representation across all sources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number within the repository
    pub number: u64,
    /// Issue title
    pub title: String,
    /// Number of comments on the issue
    pub comments: u64,
    /// Issue state (e.g. "open", "closed")
    pub state: String,
    /// Login of the issue author, when known
    pub author: Option<String>,
    /// Label names on the issue
    #[serde(default)]
    pub labels: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// The untouched source representation. Persistence keeps this verbatim
    /// so fields the typed model does not carry are never lost.
    pub raw: serde_json::Value,
}

/// Opaque reference to the next page of a listing.
///
/// Only the source that produced a token knows how to dereference it; the
/// importer just hands it back to [`IssueSource::next_page`].
///
/// [`IssueSource::next_page`]: crate::traits::IssueSource::next_page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageToken(String);

impl PageToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One batch of issues plus the reference to the batch after it.
///
/// A page without a `next` token is the terminal page.
#[derive(Debug, Clone)]
pub struct Page {
    pub issues: Vec<Issue>,
    pub next: Option<PageToken>,
}

impl Page {
    /// A terminal page holding the given issues
    pub fn terminal(issues: Vec<Issue>) -> Self {
        Self { issues, next: None }
    }
}
