//! Configuration for a reviewer assignment run.

/// Locations searched for the ownership file when no path is configured.
pub const DEFAULT_LOCATIONS: &[&str] = &[".github/CODEOWNERS", "CODEOWNERS", "docs/CODEOWNERS"];

/// Everything a run needs besides its collaborators.
///
/// Assembled once at the program boundary and passed down by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignConfig {
    /// Explicit ownership file path. When unset, [`DEFAULT_LOCATIONS`] are searched.
    pub codeowners_path: Option<String>,
    /// Free text passed through to the report.
    pub custom_message: String,
    /// Handles that require security approval.
    pub security_reviewers: Vec<String>,
}

impl AssignConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ownership file path.
    pub fn with_codeowners_path(mut self, path: impl Into<String>) -> Self {
        self.codeowners_path = Some(path.into());
        self
    }

    /// Sets the custom report message.
    pub fn with_custom_message(mut self, message: impl Into<String>) -> Self {
        self.custom_message = message.into();
        self
    }

    /// Sets the security reviewers, normalizing them with [`normalize_handles`].
    pub fn with_security_reviewers<I, S>(mut self, reviewers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.security_reviewers = normalize_handles(reviewers);
        self
    }

    /// Returns the ownership file locations to try, in order.
    pub fn search_locations(&self) -> Vec<String> {
        match &self.codeowners_path {
            Some(path) => vec![path.clone()],
            None => DEFAULT_LOCATIONS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Trims handles and drops empty and repeated entries, keeping first-seen order.
pub fn normalize_handles<I, S>(handles: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for handle in handles {
        let handle = handle.as_ref().trim();
        if !handle.is_empty() && !out.iter().any(|h| h == handle) {
            out.push(handle.to_string());
        }
    }
    out
}
