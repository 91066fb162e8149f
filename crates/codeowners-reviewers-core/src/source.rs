//! Ownership file lookup and local collaborator implementations.

use crate::config::AssignConfig;
use crate::error::AssignError;
use crate::host::{ChangedFilesSource, HostError, OwnershipSource};
use crate::resolve::ChangedFile;
use async_trait::async_trait;
use log::{debug, info, trace};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Ownership file contents along with where they were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipText {
    /// The location the text was read from.
    pub path: String,
    /// The raw file contents.
    pub text: String,
}

/// Reads the ownership file from the first configured location that exists.
///
/// Returns [`AssignError::NotFound`] when every location is absent. Host
/// errors abort the search immediately.
pub async fn load_ownership_text(
    source: &dyn OwnershipSource,
    config: &AssignConfig,
) -> Result<OwnershipText, AssignError> {
    let searched = config.search_locations();

    for path in &searched {
        trace!("Looking for ownership file at {}", path);
        if let Some(text) = source.read_file(path).await? {
            info!("Using ownership file {}", path);
            return Ok(OwnershipText {
                path: path.clone(),
                text,
            });
        }
        debug!("No ownership file at {}", path);
    }

    Err(AssignError::NotFound { searched })
}

/// Reads ownership files from a local checkout.
#[derive(Debug, Clone)]
pub struct FsOwnershipSource {
    root: PathBuf,
}

impl FsOwnershipSource {
    /// Creates a source rooted at the repository path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl OwnershipSource for FsOwnershipSource {
    async fn read_file(&self, path: &str) -> Result<Option<String>, HostError> {
        let full = self.root.join(path.trim_start_matches('/'));
        match tokio::fs::read_to_string(&full).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::IsADirectory) => Ok(None),
            Err(e) => Err(HostError::Io(e)),
        }
    }
}

/// A fixed list of changed files, e.g. supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct ChangedFileList(pub Vec<ChangedFile>);

impl ChangedFileList {
    /// Creates a list from file paths.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(paths.into_iter().map(ChangedFile::new).collect())
    }
}

#[async_trait]
impl ChangedFilesSource for ChangedFileList {
    async fn list_changed_files(&self) -> Result<Vec<ChangedFile>, HostError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn repo_with(path: &str, contents: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        let full = dir.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, contents).unwrap();
        dir
    }

    #[tokio::test]
    async fn finds_github_dir_first() {
        let dir = repo_with(".github/CODEOWNERS", "* @github-dir\n");
        fs::write(dir.path().join("CODEOWNERS"), "* @root\n").unwrap();

        let source = FsOwnershipSource::new(dir.path());
        let found = load_ownership_text(&source, &AssignConfig::new()).await.unwrap();
        assert_eq!(found.path, ".github/CODEOWNERS");
        assert_eq!(found.text, "* @github-dir\n");
    }

    #[tokio::test]
    async fn falls_back_to_root_and_docs() {
        let dir = repo_with("CODEOWNERS", "* @root\n");
        let source = FsOwnershipSource::new(dir.path());
        let found = load_ownership_text(&source, &AssignConfig::new()).await.unwrap();
        assert_eq!(found.path, "CODEOWNERS");

        let dir = repo_with("docs/CODEOWNERS", "* @docs\n");
        let source = FsOwnershipSource::new(dir.path());
        let found = load_ownership_text(&source, &AssignConfig::new()).await.unwrap();
        assert_eq!(found.path, "docs/CODEOWNERS");
    }

    #[tokio::test]
    async fn explicit_path() {
        let dir = repo_with("config/OWNERS", "*.go @go\n");
        let source = FsOwnershipSource::new(dir.path());
        let config = AssignConfig::new().with_codeowners_path("config/OWNERS");
        let found = load_ownership_text(&source, &config).await.unwrap();
        assert_eq!(found.text, "*.go @go\n");
    }

    #[tokio::test]
    async fn not_found_everywhere() {
        let dir = TempDir::new().unwrap();
        let source = FsOwnershipSource::new(dir.path());
        let err = load_ownership_text(&source, &AssignConfig::new())
            .await
            .unwrap_err();
        match err {
            AssignError::NotFound { searched } => assert_eq!(searched.len(), 3),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn explicit_path_missing_does_not_fall_back() {
        let dir = repo_with(".github/CODEOWNERS", "* @owner\n");
        let source = FsOwnershipSource::new(dir.path());
        let config = AssignConfig::new().with_codeowners_path("OWNERS");
        let err = load_ownership_text(&source, &config).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn directory_at_location_is_not_read_as_text() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("CODEOWNERS")).unwrap();
        let source = FsOwnershipSource::new(dir.path());
        let result = tokio_test::block_on(source.read_file("CODEOWNERS"));
        assert!(matches!(result, Ok(None) | Err(HostError::Io(_))));
    }

    #[test]
    fn changed_file_list_returns_paths() {
        let list = ChangedFileList::from_paths(["a.rs", "b/c.md"]);
        let files = tokio_test::block_on(list.list_changed_files()).unwrap();
        assert_eq!(files, vec![ChangedFile::new("a.rs"), ChangedFile::new("b/c.md")]);
    }
}
