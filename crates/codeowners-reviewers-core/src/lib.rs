//! CODEOWNERS Reviewers Core
//!
//! A library for working out who must review a change, given a CODEOWNERS
//! file and the list of files the change touches.
//!
//! # Features
//!
//! - **Parser**: Turn ownership text into ordered `(pattern, owners)` rules
//! - **Ranking**: Order rules so the deepest pattern is tried first
//! - **Resolution**: First matching rule per file, owners unioned across files
//! - **Classification**: Split reviewers into regular and security reviewers
//! - **Workflow**: Run the whole thing against pluggable host collaborators
//!
//! # Quick Start
//!
//! ```rust
//! use codeowners_reviewers_core::{ChangedFile, assign_reviewers};
//!
//! let input = r#"
//! # CODEOWNERS file
//! *.go          @go-team
//! src/api/*.go  @api-team
//! "#;
//!
//! let changed = vec![
//!     ChangedFile::new("src/api/handler.go"),
//!     ChangedFile::new("lib/util.go"),
//! ];
//!
//! let assignment = assign_reviewers(input, &changed, &[]);
//! assert_eq!(assignment.reviewers_output(), "@api-team,@go-team");
//!
//! for file in &assignment.resolution.files {
//!     match &file.rule {
//!         Some(rule) => println!("{} -> {} {:?}", file.filename, rule.pattern, rule.owners),
//!         None => println!("{} is unowned", file.filename),
//!     }
//! }
//! ```
//!
//! # Modules
//!
//! - [`parse`]: Parser for ownership files
//! - [`rank`]: Specificity ranking
//! - [`matching`]: Pattern compilation and matching
//! - [`resolve`]: Per-file resolution
//! - [`classify`]: Security reviewer classification
//! - [`report`]: Markdown report rendering
//! - [`host`]: Collaborator traits for the review host
//! - [`source`]: Ownership file lookup and local collaborators
//! - [`workflow`]: End-to-end orchestration

pub mod assign;
pub mod classify;
pub mod config;
mod error;
#[cfg(feature = "generate")]
pub mod generate;
pub mod host;
pub mod matching;
pub mod parse;
pub mod rank;
pub mod report;
pub mod resolve;
pub mod source;
pub mod workflow;

// Re-export commonly used types at the crate root
pub use assign::{Assignment, assign_reviewers};
pub use classify::{Classification, classify};
pub use config::AssignConfig;
pub use error::AssignError;
pub use host::{ChangedFilesSource, HostError, OwnershipSource, ReportPoster};
pub use parse::{OwnershipRule, parse_rules};
pub use rank::RankedRuleSet;
pub use resolve::{ChangedFile, Resolution, Resolver, ReviewerSet};
pub use workflow::{AssignmentOutcome, OutcomeStatus, run_assignment};
