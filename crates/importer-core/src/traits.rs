use crate::error::Result;
use crate::models::{Issue, Page, PageToken, RepoId};

/// Common trait for anything that can produce pages of issues
///
/// Implemented by the live GitHub client and by the cached-file store. The
/// importer only ever sees this seam, so no HTTP types leak through it.
pub trait IssueSource: Send + Sync {
    /// Fetch the first page of issues for a repository
    fn first_page(&self, repo: &RepoId) -> Result<Page>;

    /// Dereference a next-page token obtained from a previous page
    fn next_page(&self, token: &PageToken) -> Result<Page>;
}

/// Strategy invoked with lifecycle hooks as issues are fetched
///
/// For a single importer run the hooks fire as
/// `will_process` -> `process_issue`* -> `did_process`, in page order. A
/// processor instance carries its accumulator across the run and has no
/// reset contract: construct a fresh one per run.
pub trait IssueProcessor {
    /// Called once before any issue. `max_pages` is the run's page ceiling.
    fn will_process(&mut self, repo: &RepoId, max_pages: usize) {
        let _ = (repo, max_pages);
    }

    /// Called once per issue, in the order the source returned them
    fn process_issue(&mut self, repo: &RepoId, issue: &Issue);

    /// Called exactly once after the listing is exhausted; flushes output.
    /// Not called when a page fetch fails mid-run.
    fn did_process(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Processor that ignores everything it is given
pub struct NoopProcessor;

impl IssueProcessor for NoopProcessor {
    fn process_issue(&mut self, _repo: &RepoId, _issue: &Issue) {}
}
