//! Parser module for ownership (CODEOWNERS) files.
//!
//! Turns raw ownership text into an ordered list of [`OwnershipRule`]s.
//! Comments, blank lines and owners that are not `@` handles are dropped.
//!
//! # Example
//!
//! ```rust
//! use codeowners_reviewers_core::parse::parse_rules;
//!
//! let input = r#"
//! # CODEOWNERS file
//! *.rs @rustacean
//! /docs/ @github/docs-team
//! "#;
//!
//! for rule in parse_rules(input) {
//!     println!("{} -> {:?}", rule.pattern, rule.owners);
//! }
//! ```

mod lexer;
mod parser;
mod rule;

pub use parser::{parse_rule_line, parse_rules};
pub use rule::OwnershipRule;

// Re-export lexer utilities that may be useful for custom parsing
pub use lexer::{is_handle, tokens};
