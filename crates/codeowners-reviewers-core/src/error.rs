//! Error types surfaced by reviewer assignment.

use crate::host::HostError;
use thiserror::Error;

/// An error that stops reviewer assignment.
#[derive(Debug, Error)]
pub enum AssignError {
    /// No ownership file exists at any searched location.
    #[error("ownership file not found (searched: {})", .searched.join(", "))]
    NotFound {
        /// Every location that was tried, in order.
        searched: Vec<String>,
    },

    /// A host collaborator failed.
    #[error(transparent)]
    Host(#[from] HostError),
}

impl AssignError {
    /// Returns true if this is the not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AssignError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_lists_locations() {
        let err = AssignError::NotFound {
            searched: vec![".github/CODEOWNERS".to_string(), "CODEOWNERS".to_string()],
        };
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "ownership file not found (searched: .github/CODEOWNERS, CODEOWNERS)"
        );
    }

    #[test]
    fn host_errors_are_transparent() {
        let err = AssignError::from(HostError::AuthError("bad token".to_string()));
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Authentication error: bad token");
    }
}
