use importer_core::{ImportError, Issue, IssueProcessor, RepoId, Result};

use crate::cli::OutputFormat;
use crate::output::output_info;
use crate::store::IssueStore;

/// Buffers every issue's raw representation and writes the whole sequence to
/// the store once the listing is exhausted.
///
/// The write happens only in `did_process`: a run that fails mid-pagination
/// flushes nothing.
pub struct StoreProcessor<'a> {
    store: &'a IssueStore,
    format: OutputFormat,
    repo: Option<RepoId>,
    buffer: Vec<serde_json::Value>,
}

impl<'a> StoreProcessor<'a> {
    pub fn new(store: &'a IssueStore, format: OutputFormat) -> Self {
        Self {
            store,
            format,
            repo: None,
            buffer: Vec::new(),
        }
    }
}

impl IssueProcessor for StoreProcessor<'_> {
    fn will_process(&mut self, repo: &RepoId, _max_pages: usize) {
        self.repo = Some(repo.clone());
    }

    fn process_issue(&mut self, _repo: &RepoId, issue: &Issue) {
        self.buffer.push(issue.raw.clone());
    }

    fn did_process(&mut self) -> Result<()> {
        let repo = self.repo.as_ref().ok_or_else(|| {
            ImportError::InvalidInput("no repository recorded for this run".to_string())
        })?;

        self.store
            .save(repo, &self.buffer)
            .map_err(|e| ImportError::Io(format!("{:#}", e)))?;

        output_info(
            &format!(
                "Cached {} issue(s) for {} in {}",
                self.buffer.len(),
                repo,
                self.store.issues_path(repo).display()
            ),
            self.format,
        );
        Ok(())
    }
}
