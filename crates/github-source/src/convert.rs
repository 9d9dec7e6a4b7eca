//! Model conversions from GitHub types to importer-core issues

use chrono::{DateTime, Utc};
use importer_core::Issue;

use crate::error::Result;
use crate::models::GitHubIssue;

/// Convert one raw listing entry into a core issue.
///
/// Returns `None` for pull requests, which GitHub's issues endpoint mixes
/// into the listing. A record the typed model cannot deserialize fails the
/// whole call; the API is assumed to return well-formed issues.
pub fn issue_from_raw(value: &serde_json::Value) -> Result<Option<Issue>> {
    let issue: GitHubIssue = serde_json::from_value(value.clone())?;
    if issue.is_pull_request() {
        return Ok(None);
    }
    Ok(Some(github_issue_to_core(issue, value.clone())))
}

/// Convert a typed GitHub issue, keeping the raw representation alongside it
pub fn github_issue_to_core(issue: GitHubIssue, raw: serde_json::Value) -> Issue {
    Issue {
        number: issue.number,
        title: issue.title,
        comments: issue.comments,
        state: issue.state,
        author: issue.user.map(|u| u.login),
        labels: issue.labels.into_iter().map(|l| l.name).collect(),
        created_at: parse_github_datetime(&issue.created_at).unwrap_or_else(Utc::now),
        updated_at: parse_github_datetime(&issue.updated_at).unwrap_or_else(Utc::now),
        raw,
    }
}

fn parse_github_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
