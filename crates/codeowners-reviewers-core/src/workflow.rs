//! End-to-end reviewer assignment against injected collaborators.
//!
//! # Example
//!
//! ```rust
//! use codeowners_reviewers_core::config::AssignConfig;
//! use codeowners_reviewers_core::source::{ChangedFileList, FsOwnershipSource};
//! use codeowners_reviewers_core::workflow::run_assignment;
//!
//! # async fn example() -> Result<(), codeowners_reviewers_core::AssignError> {
//! let changed = ChangedFileList::from_paths(["src/main.rs"]);
//! let ownership = FsOwnershipSource::new("/path/to/repo");
//! let config = AssignConfig::new().with_security_reviewers(["@appsec"]);
//!
//! let outcome = run_assignment(&changed, &ownership, None, &config).await?;
//! println!("reviewers={}", outcome.reviewers);
//! # Ok(())
//! # }
//! ```

use crate::assign::{Assignment, assign_reviewers};
use crate::config::AssignConfig;
use crate::error::AssignError;
use crate::host::{ChangedFilesSource, OwnershipSource, ReportPoster};
use crate::report::{render_not_found, render_report};
use crate::source::load_ownership_text;
use log::{debug, error, info, warn};
use serde::Serialize;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// Reviewers were resolved from an ownership file.
    Assigned,
    /// No ownership file exists; nothing was resolved.
    OwnershipNotFound,
}

/// The result of one assignment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentOutcome {
    /// How the run ended.
    pub status: OutcomeStatus,
    /// Comma-joined reviewer handles; empty when not found.
    pub reviewers: String,
    /// Where the ownership file was read from.
    pub codeowners_path: Option<String>,
    /// Locations searched without success.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub searched: Vec<String>,
    /// The full assignment, absent when not found.
    pub assignment: Option<Assignment>,
    /// The rendered report body.
    pub report: String,
    /// Whether the report was posted.
    pub posted: bool,
    /// Why posting failed, if it was attempted and failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_error: Option<String>,
}

impl AssignmentOutcome {
    /// Returns true if the ownership file was missing.
    pub fn is_not_found(&self) -> bool {
        self.status == OutcomeStatus::OwnershipNotFound
    }
}

/// Runs one assignment: fetch, resolve, classify, render, post.
///
/// The changed-file list and the ownership text are fetched concurrently.
/// A missing ownership file is not an error here: the not-found notice is
/// rendered and posted, and the outcome carries
/// [`OutcomeStatus::OwnershipNotFound`] with an empty reviewer list. A host
/// failure while fetching is returned as [`AssignError::Host`].
///
/// When `poster` is `None` the report is rendered but not posted. A failed
/// post does not discard the outcome: it is recorded in
/// [`AssignmentOutcome::post_error`] with `posted` left false.
pub async fn run_assignment(
    changed: &dyn ChangedFilesSource,
    ownership: &dyn OwnershipSource,
    poster: Option<&dyn ReportPoster>,
    config: &AssignConfig,
) -> Result<AssignmentOutcome, AssignError> {
    let (files, text) = futures::join!(
        changed.list_changed_files(),
        load_ownership_text(ownership, config)
    );

    let text = match text {
        Ok(text) => text,
        Err(AssignError::NotFound { searched }) => {
            warn!("No ownership file found (searched: {})", searched.join(", "));
            let report = render_not_found(&searched, &config.custom_message);
            let (posted, post_error) = post(poster, &report).await;
            return Ok(AssignmentOutcome {
                status: OutcomeStatus::OwnershipNotFound,
                reviewers: String::new(),
                codeowners_path: None,
                searched,
                assignment: None,
                report,
                posted,
                post_error,
            });
        }
        Err(e) => return Err(e),
    };

    let files = files?;
    debug!("{} changed file(s)", files.len());

    let assignment = assign_reviewers(&text.text, &files, &config.security_reviewers);
    let reviewers = assignment.reviewers_output();
    info!("Reviewers: {}", if reviewers.is_empty() { "(none)" } else { reviewers.as_str() });

    let report = render_report(&assignment, &config.custom_message);
    let (posted, post_error) = post(poster, &report).await;

    Ok(AssignmentOutcome {
        status: OutcomeStatus::Assigned,
        reviewers,
        codeowners_path: Some(text.path),
        searched: Vec::new(),
        assignment: Some(assignment),
        report,
        posted,
        post_error,
    })
}

/// Posts the report, returning whether it was posted and why it failed.
async fn post(poster: Option<&dyn ReportPoster>, report: &str) -> (bool, Option<String>) {
    let Some(poster) = poster else {
        debug!("No report poster configured, skipping post");
        return (false, None);
    };
    match poster.post_report(report).await {
        Ok(()) => {
            info!("Report posted");
            (true, None)
        }
        Err(e) => {
            error!("Failed to post report: {}", e);
            (false, Some(e.to_string()))
        }
    }
}
