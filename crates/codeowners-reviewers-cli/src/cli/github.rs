//! GitHub collaborators implemented with octocrab.
//!
//! [`OctocrabHost`] serves as all three collaborators for one pull request:
//! it lists the changed files, reads the CODEOWNERS file through the contents
//! API, and posts the report as an issue comment.

use crate::cli::config::PullRequestTarget;
use async_trait::async_trait;
use codeowners_reviewers_core::{
    ChangedFile, ChangedFilesSource, HostError, OwnershipSource, ReportPoster,
};
use http::StatusCode;
use tracing::debug;

/// A pull request on GitHub, reached through an octocrab client.
pub struct OctocrabHost {
    client: octocrab::Octocrab,
    target: PullRequestTarget,
}

impl OctocrabHost {
    /// Creates a host for the given pull request.
    pub fn new(client: octocrab::Octocrab, target: PullRequestTarget) -> Self {
        Self { client, target }
    }
}

/// Extracts the HTTP status code from an octocrab error.
fn extract_status_code(error: &octocrab::Error) -> Option<StatusCode> {
    match error {
        octocrab::Error::GitHub { source, .. } => Some(source.status_code),
        _ => None,
    }
}

/// Maps an octocrab error onto a host error by status code.
fn host_error(error: octocrab::Error) -> HostError {
    match extract_status_code(&error) {
        Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) => {
            HostError::AuthError(error.to_string())
        }
        Some(StatusCode::TOO_MANY_REQUESTS) => HostError::RateLimitExceeded,
        _ => HostError::ApiError(error.to_string()),
    }
}

#[async_trait]
impl ChangedFilesSource for OctocrabHost {
    async fn list_changed_files(&self) -> Result<Vec<ChangedFile>, HostError> {
        let t = &self.target;
        let first = self
            .client
            .pulls(&t.owner, &t.repo)
            .list_files(t.number)
            .await
            .map_err(host_error)?;
        let entries = self.client.all_pages(first).await.map_err(host_error)?;

        debug!("Pull request #{} changes {} file(s)", t.number, entries.len());
        Ok(entries
            .into_iter()
            .map(|entry| ChangedFile::new(entry.filename))
            .collect())
    }
}

#[async_trait]
impl OwnershipSource for OctocrabHost {
    async fn read_file(&self, path: &str) -> Result<Option<String>, HostError> {
        let t = &self.target;
        let repos = self.client.repos(&t.owner, &t.repo);
        let mut request = repos.get_content().path(path);
        if let Some(ref git_ref) = t.git_ref {
            request = request.r#ref(git_ref);
        }

        match request.send().await {
            Ok(contents) => {
                let mut items = contents.items;
                // A directory lists its entries; only a single file counts.
                if items.len() != 1 || items[0].r#type != "file" {
                    return Ok(None);
                }
                Ok(items.remove(0).decoded_content())
            }
            Err(e) if extract_status_code(&e) == Some(StatusCode::NOT_FOUND) => Ok(None),
            Err(e) => Err(host_error(e)),
        }
    }
}

#[async_trait]
impl ReportPoster for OctocrabHost {
    async fn post_report(&self, message: &str) -> Result<(), HostError> {
        let t = &self.target;
        self.client
            .issues(&t.owner, &t.repo)
            .create_comment(t.number, message)
            .await
            .map_err(host_error)?;
        debug!("Commented on pull request #{}", t.number);
        Ok(())
    }
}
