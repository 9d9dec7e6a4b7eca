use anyhow::{Context, Result};
use importer_core::{ImportError, IssueSource, Page, PageToken, RepoId};
use std::fs;
use std::path::{Path, PathBuf};

const ISSUES_FILE_NAME: &str = "issues.json";

/// On-disk cache of raw issues: one folder per repository, holding the full
/// issue array as a single JSON document
#[derive(Debug, Clone)]
pub struct IssueStore {
    root: PathBuf,
}

impl IssueStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn repo_dir(&self, repo: &RepoId) -> PathBuf {
        self.root.join(repo.folder_name())
    }

    pub fn issues_path(&self, repo: &RepoId) -> PathBuf {
        self.repo_dir(repo).join(ISSUES_FILE_NAME)
    }

    /// Whole-repository granularity: any cached file counts as already done
    pub fn exists(&self, repo: &RepoId) -> bool {
        self.issues_path(repo).exists()
    }

    /// Write the full raw issue array for a repository
    pub fn save(&self, repo: &RepoId, issues: &[serde_json::Value]) -> Result<()> {
        let dir = self.repo_dir(repo);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create cache folder: {}", dir.display()))?;

        let path = self.issues_path(repo);
        let content = serde_json::to_string_pretty(issues)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write cache file: {}", path.display()))?;

        Ok(())
    }

    /// Read the raw issue array for a repository
    pub fn load(&self, repo: &RepoId) -> Result<Vec<serde_json::Value>> {
        let path = self.issues_path(repo);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read cache file: {}", path.display()))?;

        serde_json::from_str(&content).context("Failed to parse cache file")
    }

    /// Drop a repository from the cache
    pub fn clear(&self, repo: &RepoId) -> Result<()> {
        let dir = self.repo_dir(repo);
        if dir.exists() {
            fs::remove_dir_all(&dir)
                .with_context(|| format!("Failed to remove cache folder: {}", dir.display()))?;
        }
        Ok(())
    }
}

/// Issue source over previously cached issues.
///
/// The cached document comes back as a single terminal page, so the importer
/// control flow is identical to a live run.
pub struct StoredIssueSource<'a> {
    store: &'a IssueStore,
}

impl<'a> StoredIssueSource<'a> {
    pub fn new(store: &'a IssueStore) -> Self {
        Self { store }
    }
}

impl IssueSource for StoredIssueSource<'_> {
    fn first_page(&self, repo: &RepoId) -> importer_core::Result<Page> {
        if !self.store.exists(repo) {
            return Err(ImportError::NotFound(format!(
                "no cached issues for {} (run `hotspot fetch {}` first)",
                repo, repo
            )));
        }

        let raw = self
            .store
            .load(repo)
            .map_err(|e| ImportError::Io(format!("{:#}", e)))?;

        let mut issues = Vec::with_capacity(raw.len());
        for value in &raw {
            if let Some(issue) =
                github_source::convert::issue_from_raw(value).map_err(ImportError::from)?
            {
                issues.push(issue);
            }
        }
        Ok(Page::terminal(issues))
    }

    fn next_page(&self, _token: &PageToken) -> importer_core::Result<Page> {
        Err(ImportError::InvalidInput(
            "cached issue listings have a single page".to_string(),
        ))
    }
}
