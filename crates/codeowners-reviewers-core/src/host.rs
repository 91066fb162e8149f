//! Collaborator traits for the code-review host.
//!
//! The core never talks to a review host directly. Changed files, ownership
//! file contents and report posting are reached through these traits, so
//! different implementations can be plugged in (octocrab, a local checkout,
//! test mocks).

use crate::resolve::ChangedFile;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when interacting with the review host.
#[derive(Debug, Error)]
pub enum HostError {
    /// An API error occurred.
    #[error("API error: {0}")]
    ApiError(String),

    /// A network error occurred.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Authentication failed.
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Local IO failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Supplies the files touched by the change under review.
#[async_trait]
pub trait ChangedFilesSource: Send + Sync {
    /// Lists every changed file.
    async fn list_changed_files(&self) -> Result<Vec<ChangedFile>, HostError>;
}

/// Reads ownership files.
///
/// # Example
///
/// ```rust,ignore
/// use codeowners_reviewers_core::host::{HostError, OwnershipSource};
///
/// struct MySource { /* ... */ }
///
/// #[async_trait::async_trait]
/// impl OwnershipSource for MySource {
///     async fn read_file(&self, path: &str) -> Result<Option<String>, HostError> {
///         // Fetch the file, returning Ok(None) when it does not exist
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait OwnershipSource: Send + Sync {
    /// Reads the file at `path`, relative to the repository root.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(text))` - The file exists
    /// * `Ok(None)` - Nothing exists at this location
    /// * `Err(HostError)` - The lookup itself failed
    async fn read_file(&self, path: &str) -> Result<Option<String>, HostError>;
}

/// Publishes the rendered report.
#[async_trait]
pub trait ReportPoster: Send + Sync {
    /// Posts the report message.
    async fn post_report(&self, message: &str) -> Result<(), HostError>;
}
