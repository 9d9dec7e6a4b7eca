pub mod error;
pub mod importer;
pub mod models;
pub mod traits;

pub use error::{ImportError, Result};
pub use importer::{BatchImporter, ImportConfig, DEFAULT_MAX_PAGES};
pub use models::{Issue, Page, PageToken, RepoId};
pub use traits::{IssueProcessor, IssueSource, NoopProcessor};
