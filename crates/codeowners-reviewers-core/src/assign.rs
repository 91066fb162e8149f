//! The pure assignment pipeline: parse, rank, resolve, classify.

use crate::classify::{Classification, classify};
use crate::parse::parse_rules;
use crate::rank::RankedRuleSet;
use crate::resolve::{ChangedFile, Resolution, Resolver};
use serde::Serialize;

/// Reviewers resolved for one change, with their classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Assignment {
    /// The raw resolution, including per-file matches.
    pub resolution: Resolution,
    /// The regular/security partition of the resolved reviewers.
    pub classification: Classification,
}

impl Assignment {
    /// Returns the machine-readable reviewer list: every resolved handle,
    /// sorted and joined with `,`. Empty when nothing was resolved.
    pub fn reviewers_output(&self) -> String {
        self.resolution
            .reviewers
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Assigns reviewers to a change.
///
/// This is a pure function of its inputs and never fails: malformed lines
/// are dropped, uncompilable patterns are skipped.
///
/// # Example
///
/// ```rust
/// use codeowners_reviewers_core::{ChangedFile, assign_reviewers};
///
/// let text = "*.go @go-team\nsrc/api/*.go @api-team\n";
/// let files = [ChangedFile::new("src/api/handler.go"), ChangedFile::new("lib/util.go")];
/// let assignment = assign_reviewers(text, &files, &["@go-team".to_string()]);
///
/// assert_eq!(assignment.reviewers_output(), "@api-team,@go-team");
/// assert!(assignment.classification.regular.contains("@api-team"));
/// assert!(assignment.classification.security_from_rules.contains("@go-team"));
/// ```
pub fn assign_reviewers(
    ownership_text: &str,
    changed_files: &[ChangedFile],
    security_reviewers: &[String],
) -> Assignment {
    let ranked = RankedRuleSet::new(parse_rules(ownership_text));
    let resolution = Resolver::new(&ranked).resolve(changed_files);
    let classification = classify(&resolution.reviewers, security_reviewers);

    Assignment {
        resolution,
        classification,
    }
}
