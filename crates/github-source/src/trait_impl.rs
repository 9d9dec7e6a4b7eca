//! Implementation of importer-core traits for GitHubClient

use importer_core::{ImportError, IssueSource, Page, PageToken, RepoId, Result};

use crate::client::{GitHubClient, RawPage};
use crate::convert::issue_from_raw;

fn page_from_raw(raw: RawPage) -> Result<Page> {
    let mut issues = Vec::with_capacity(raw.issues.len());
    for value in &raw.issues {
        if let Some(issue) = issue_from_raw(value).map_err(ImportError::from)? {
            issues.push(issue);
        }
    }
    Ok(Page {
        issues,
        next: raw.next_url.map(PageToken::new),
    })
}

impl IssueSource for GitHubClient {
    fn first_page(&self, repo: &RepoId) -> Result<Page> {
        let raw = self.list_issues(repo).map_err(ImportError::from)?;
        page_from_raw(raw)
    }

    fn next_page(&self, token: &PageToken) -> Result<Page> {
        let raw = self.fetch_page(token.as_str()).map_err(ImportError::from)?;
        page_from_raw(raw)
    }
}
