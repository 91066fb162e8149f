//! Configuration handling for the CLI.
//!
//! This module converts CLI arguments into the library's configuration types
//! and handles GitHub authentication setup.

use crate::cli::{Args, DEFAULT_GITHUB_BASE_URL};
use codeowners_reviewers_core::{AssignConfig, AssignmentOutcome};
use jsonwebtoken::EncodingKey;
use octocrab::Octocrab;
use octocrab::models::{AppId, InstallationId};
use secrecy::{ExposeSecret, SecretString};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration.
    #[error("missing required configuration: {0}")]
    MissingRequired(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// GitHub authentication error.
    #[error("GitHub authentication error: {0}")]
    GitHubAuth(String),
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Reviewers were resolved successfully.
    Success = 0,
    /// Application startup failed (wrong configuration or internal error).
    StartupFailure = 1,
    /// Application terminated by signal (SIGINT/SIGTERM).
    Terminated = 2,
    /// No CODEOWNERS file was found.
    OwnershipNotFound = 3,
    /// The GitHub API failed while fetching or posting.
    HostFailure = 4,
}

impl ExitCode {
    /// Picks the exit code for a finished run.
    ///
    /// A missing CODEOWNERS file wins over a failed post.
    pub fn for_outcome(outcome: &AssignmentOutcome) -> Self {
        if outcome.is_not_found() {
            ExitCode::OwnershipNotFound
        } else if outcome.post_error.is_some() {
            ExitCode::HostFailure
        } else {
            ExitCode::Success
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// GitHub credentials.
#[derive(Debug)]
pub enum GithubAuth {
    /// Personal access or workflow token.
    Token(SecretString),
    /// GitHub App installation.
    App {
        app_id: u64,
        installation_id: u64,
        private_key: SecretString,
    },
}

/// The pull request a run targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestTarget {
    pub owner: String,
    pub repo: String,
    pub number: u64,
    /// Git ref the CODEOWNERS file is read at; the default branch when unset.
    pub git_ref: Option<String>,
}

/// Where changed files and the ownership file come from.
#[derive(Debug)]
pub enum RunMode {
    /// A local checkout and an explicit list of changed files.
    Local {
        repo_path: PathBuf,
        changed_files: Vec<String>,
    },
    /// A GitHub pull request.
    PullRequest {
        target: PullRequestTarget,
        auth: GithubAuth,
        base_url: String,
    },
}

/// Validated and processed configuration for running the assigner.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Where inputs come from.
    pub mode: RunMode,
    /// Configuration handed to the library.
    pub assign: AssignConfig,
    /// Whether to skip posting the report.
    pub dry_run: bool,
    /// File the `reviewers` output is appended to.
    pub github_output: Option<PathBuf>,
    /// Whether to output JSON.
    pub json_output: bool,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let mode = match args.pull_request {
            Some(number) => {
                if args.changed_files.is_some() {
                    return Err(ConfigError::Invalid(
                        "--changed-files cannot be combined with --pull-request".to_string(),
                    ));
                }
                let repository = args.repository.as_deref().ok_or_else(|| {
                    ConfigError::MissingRequired(
                        "GITHUB_REPOSITORY is required when a pull request number is given"
                            .to_string(),
                    )
                })?;
                let (owner, repo) = parse_repository(repository)?;
                RunMode::PullRequest {
                    target: PullRequestTarget {
                        owner,
                        repo,
                        number,
                        git_ref: args.git_ref.clone(),
                    },
                    auth: github_auth(args)?,
                    base_url: args.github_base_url.clone(),
                }
            }
            None => {
                let repo_path = args.repository_path.canonicalize().map_err(|e| {
                    ConfigError::Invalid(format!(
                        "repository path '{}' is invalid: {}",
                        args.repository_path.display(),
                        e
                    ))
                })?;
                let changed_files = args
                    .changed_files
                    .iter()
                    .flatten()
                    .map(|path| path.trim())
                    .filter(|path| !path.is_empty())
                    .map(str::to_string)
                    .collect();
                RunMode::Local {
                    repo_path,
                    changed_files,
                }
            }
        };

        let mut assign =
            AssignConfig::new().with_security_reviewers(args.security_reviewers.iter().flatten());

        if let Some(path) = args.codeowners_path.as_deref().map(str::trim) {
            if !path.is_empty() {
                assign = assign.with_codeowners_path(path);
            }
        }

        if let Some(ref message) = args.custom_message {
            assign = assign.with_custom_message(message.clone());
        }

        Ok(Self {
            mode,
            assign,
            dry_run: args.dry_run,
            github_output: args.github_output.clone(),
            json_output: args.json,
        })
    }

    /// Returns true if the report should be posted to a pull request.
    pub fn posts_report(&self) -> bool {
        !self.dry_run && matches!(self.mode, RunMode::PullRequest { .. })
    }
}

/// Splits an `owner/repo` string.
pub fn parse_repository(repository: &str) -> Result<(String, String), ConfigError> {
    match repository.trim().split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(ConfigError::Invalid(format!(
            "repository '{}' must be in 'owner/repo' format",
            repository
        ))),
    }
}

/// Picks GitHub credentials, preferring App authentication over a token.
fn github_auth(args: &Args) -> Result<GithubAuth, ConfigError> {
    if let (Some(app_id), Some(installation_id), Some(private_key)) = (
        args.github_app_id,
        args.github_app_installation_id,
        args.github_app_private_key.as_ref(),
    ) {
        return Ok(GithubAuth::App {
            app_id,
            installation_id,
            private_key: SecretString::from(private_key.clone()),
        });
    }

    match args.github_access_token.as_deref().map(str::trim) {
        Some(token) if !token.is_empty() => Ok(GithubAuth::Token(SecretString::from(
            token.to_string(),
        ))),
        _ => Err(ConfigError::MissingRequired(
            "GITHUB_TOKEN or GitHub App credentials are required when a pull request number is given"
                .to_string(),
        )),
    }
}

/// Creates an authenticated Octocrab client.
pub async fn create_octocrab(auth: &GithubAuth, base_url: &str) -> Result<Octocrab, ConfigError> {
    let base_url = (base_url != DEFAULT_GITHUB_BASE_URL).then_some(base_url);

    match auth {
        GithubAuth::App {
            app_id,
            installation_id,
            private_key,
        } => {
            // Create encoding key from PEM
            let key = EncodingKey::from_rsa_pem(private_key.expose_secret().as_bytes())
                .map_err(|e| ConfigError::GitHubAuth(format!("invalid private key: {}", e)))?;

            // Build app-authenticated client
            let mut app_builder = Octocrab::builder().app(AppId(*app_id), key);
            if let Some(url) = base_url {
                app_builder = app_builder
                    .base_uri(url)
                    .map_err(|e| ConfigError::GitHubAuth(format!("invalid base URL: {}", e)))?;
            }
            let app_client = app_builder.build().map_err(|e| {
                ConfigError::GitHubAuth(format!("failed to create app client: {}", e))
            })?;

            // Get installation-specific client
            app_client
                .installation(InstallationId(*installation_id))
                .map_err(|e| {
                    ConfigError::GitHubAuth(format!("failed to get installation client: {}", e))
                })
        }
        GithubAuth::Token(token) => {
            let mut builder = Octocrab::builder();
            if let Some(url) = base_url {
                builder = builder
                    .base_uri(url)
                    .map_err(|e| ConfigError::GitHubAuth(format!("invalid base URL: {}", e)))?;
            }
            builder
                .personal_token(token.expose_secret().to_owned())
                .build()
                .map_err(|e| ConfigError::GitHubAuth(format!("failed to build client: {}", e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use codeowners_reviewers_core::OutcomeStatus;
    use tempfile::TempDir;

    fn local_args(dir: &TempDir, extra: &[&str]) -> Args {
        let mut argv = vec![
            "codeowners-reviewers",
            "--repository-path",
            dir.path().to_str().unwrap(),
        ];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    fn pr_args(extra: &[&str]) -> Args {
        let mut argv = vec![
            "codeowners-reviewers",
            "--repository",
            "acme/widgets",
            "--pull-request",
            "7",
        ];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::StartupFailure), 1);
        assert_eq!(i32::from(ExitCode::Terminated), 2);
        assert_eq!(i32::from(ExitCode::OwnershipNotFound), 3);
        assert_eq!(i32::from(ExitCode::HostFailure), 4);
    }

    fn outcome(status: OutcomeStatus, post_error: Option<&str>) -> AssignmentOutcome {
        AssignmentOutcome {
            status,
            reviewers: String::new(),
            codeowners_path: None,
            searched: Vec::new(),
            assignment: None,
            report: String::new(),
            posted: false,
            post_error: post_error.map(str::to_string),
        }
    }

    #[test]
    fn test_exit_code_for_outcome() {
        let ok = outcome(OutcomeStatus::Assigned, None);
        assert_eq!(ExitCode::for_outcome(&ok), ExitCode::Success);

        let post_failed = outcome(OutcomeStatus::Assigned, Some("forbidden"));
        assert_eq!(ExitCode::for_outcome(&post_failed), ExitCode::HostFailure);

        let not_found = outcome(OutcomeStatus::OwnershipNotFound, Some("forbidden"));
        assert_eq!(ExitCode::for_outcome(&not_found), ExitCode::OwnershipNotFound);
    }

    #[test]
    fn test_parse_repository() {
        assert_eq!(
            parse_repository("acme/widgets").unwrap(),
            ("acme".to_string(), "widgets".to_string())
        );
        assert!(parse_repository("acme").is_err());
        assert!(parse_repository("/widgets").is_err());
        assert!(parse_repository("acme/").is_err());
        assert!(parse_repository("acme/widgets/extra").is_err());
    }

    #[test]
    fn test_local_mode() {
        let dir = TempDir::new().unwrap();
        let args = local_args(&dir, &["--changed-files", "src/main.rs, ,README.md "]);
        let config = ValidatedConfig::from_args(&args).unwrap();

        match &config.mode {
            RunMode::Local {
                repo_path,
                changed_files,
            } => {
                assert_eq!(*repo_path, dir.path().canonicalize().unwrap());
                assert_eq!(*changed_files, vec!["src/main.rs", "README.md"]);
            }
            other => panic!("expected local mode, got {:?}", other),
        }
        assert!(!config.posts_report());
    }

    #[test]
    fn test_invalid_repository_path() {
        let args = Args::parse_from([
            "codeowners-reviewers",
            "--repository-path",
            "/definitely/not/a/real/path",
        ]);
        let err = ValidatedConfig::from_args(&args).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_assign_config_from_args() {
        let dir = TempDir::new().unwrap();
        let args = local_args(
            &dir,
            &[
                "--security-reviewers",
                " @appsec,,@secops,@appsec",
                "--codeowners-path",
                "config/OWNERS",
                "--custom-message",
                "Please review",
            ],
        );
        let config = ValidatedConfig::from_args(&args).unwrap();

        assert_eq!(config.assign.security_reviewers, vec!["@appsec", "@secops"]);
        assert_eq!(config.assign.codeowners_path.as_deref(), Some("config/OWNERS"));
        assert_eq!(config.assign.custom_message, "Please review");
    }

    #[test]
    fn test_blank_codeowners_path_is_ignored() {
        let dir = TempDir::new().unwrap();
        let args = local_args(&dir, &["--codeowners-path", "  "]);
        let config = ValidatedConfig::from_args(&args).unwrap();
        assert!(config.assign.codeowners_path.is_none());
    }

    #[test]
    fn test_pull_request_mode_with_token() {
        let args = pr_args(&["--github-access-token", "ghp_test", "--ref", "main"]);
        let config = ValidatedConfig::from_args(&args).unwrap();

        match &config.mode {
            RunMode::PullRequest { target, auth, .. } => {
                assert_eq!(target.owner, "acme");
                assert_eq!(target.repo, "widgets");
                assert_eq!(target.number, 7);
                assert_eq!(target.git_ref.as_deref(), Some("main"));
                assert!(matches!(auth, GithubAuth::Token(t) if t.expose_secret() == "ghp_test"));
            }
            other => panic!("expected pull request mode, got {:?}", other),
        }
        assert!(config.posts_report());
    }

    #[test]
    fn test_dry_run_never_posts() {
        let args = pr_args(&["--github-access-token", "ghp_test", "--dry-run"]);
        let config = ValidatedConfig::from_args(&args).unwrap();
        assert!(!config.posts_report());
    }

    #[test]
    fn test_pull_request_mode_requires_auth() {
        let mut args = pr_args(&[]);
        args.github_access_token = None;
        let err = ValidatedConfig::from_args(&args).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired(_)));
        assert!(err.to_string().contains("GITHUB_TOKEN"));
    }

    #[test]
    fn test_pull_request_mode_requires_repository() {
        let mut args = pr_args(&["--github-access-token", "ghp_test"]);
        args.repository = None;
        let err = ValidatedConfig::from_args(&args).unwrap_err();
        assert!(err.to_string().contains("GITHUB_REPOSITORY"));
    }

    #[test]
    fn test_changed_files_rejected_in_pull_request_mode() {
        let args = pr_args(&["--github-access-token", "t", "--changed-files", "a.rs"]);
        let err = ValidatedConfig::from_args(&args).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_app_auth_preferred_over_token() {
        let args = pr_args(&[
            "--github-access-token",
            "ghp_test",
            "--github-app-id",
            "1",
            "--github-app-installation-id",
            "2",
            "--github-app-private-key",
            "pem",
        ]);
        let config = ValidatedConfig::from_args(&args).unwrap();
        match config.mode {
            RunMode::PullRequest { auth, .. } => assert!(matches!(
                auth,
                GithubAuth::App {
                    app_id: 1,
                    installation_id: 2,
                    ..
                }
            )),
            other => panic!("expected pull request mode, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_octocrab_rejects_invalid_private_key() {
        let auth = GithubAuth::App {
            app_id: 1,
            installation_id: 2,
            private_key: SecretString::from("not a pem key".to_string()),
        };
        let err = create_octocrab(&auth, DEFAULT_GITHUB_BASE_URL).await.unwrap_err();
        assert!(err.to_string().contains("invalid private key"));
    }

    #[tokio::test]
    async fn test_create_octocrab_with_token_and_base_url() {
        let auth = GithubAuth::Token(SecretString::from("ghp_test".to_string()));
        assert!(create_octocrab(&auth, "https://github.example.com/api/v3/").await.is_ok());
    }
}
