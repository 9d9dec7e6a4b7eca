pub mod client;
pub mod convert;
pub mod error;
pub mod models;
mod trait_impl;

#[cfg(test)]
mod client_tests;

pub use client::{GitHubClient, RawPage, DEFAULT_API_URL};
pub use error::{GitHubError, Result};
pub use models::*;

// Re-export importer-core types for convenience
pub use importer_core::{ImportError, IssueSource};
