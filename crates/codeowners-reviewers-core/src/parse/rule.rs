//! The ownership rule type produced by the parser.

use serde::Serialize;
use std::fmt::{self, Display};

/// A single `(pattern, owners)` rule from an ownership file.
///
/// `owners` only ever holds `@`-prefixed handles and is never empty; lines
/// that would produce an ownerless rule are dropped by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnershipRule {
    /// The raw pattern text (e.g., "*.go", "src/api/*.go").
    pub pattern: String,
    /// Handles owning files that match the pattern, in line order.
    pub owners: Vec<String>,
    /// The 1-based line number the rule came from.
    pub line: usize,
}

impl OwnershipRule {
    /// Creates a new rule.
    pub fn new(pattern: impl Into<String>, owners: Vec<String>, line: usize) -> Self {
        Self {
            pattern: pattern.into(),
            owners,
            line,
        }
    }
}

impl Display for OwnershipRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)?;
        for owner in &self.owners {
            write!(f, " {}", owner)?;
        }
        Ok(())
    }
}
