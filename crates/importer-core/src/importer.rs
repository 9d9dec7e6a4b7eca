use crate::error::Result;
use crate::models::RepoId;
use crate::traits::{IssueProcessor, IssueSource};

/// Default bound on pages traversed in one run, to stay clear of API rate
/// limits
pub const DEFAULT_MAX_PAGES: usize = 3;

/// Run parameters for one import
#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub repo: RepoId,
    pub max_pages: usize,
}

impl ImportConfig {
    pub fn new(repo: RepoId) -> Self {
        Self {
            repo,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }
}

/// Drives one pagination cycle over an [`IssueSource`], pushing every issue
/// to an [`IssueProcessor`].
pub struct BatchImporter<'a> {
    source: &'a dyn IssueSource,
    processor: &'a mut dyn IssueProcessor,
    config: ImportConfig,
}

impl<'a> BatchImporter<'a> {
    pub fn new(
        source: &'a dyn IssueSource,
        processor: &'a mut dyn IssueProcessor,
        config: ImportConfig,
    ) -> Self {
        Self {
            source,
            processor,
            config,
        }
    }

    /// Walk the listing page by page and feed the processor.
    ///
    /// The remaining-page counter only decrements when advancing to a fetched
    /// next page; a terminal page zeroes it instead. Any fetch failure aborts
    /// the run before `did_process` -- nothing is flushed on error.
    pub fn run(mut self) -> Result<()> {
        let repo = &self.config.repo;
        let mut remaining = self.config.max_pages;

        let mut page = self.source.first_page(repo)?;

        self.processor.will_process(repo, self.config.max_pages);
        while remaining > 0 {
            for issue in &page.issues {
                self.processor.process_issue(repo, issue);
            }

            match page.next.take() {
                Some(token) => {
                    page = self.source.next_page(&token)?;
                    remaining -= 1;
                }
                None => remaining = 0,
            }
        }
        self.processor.did_process()
    }
}
