//! CLI module for the CODEOWNERS reviewer assigner.
//!
//! This module provides command-line argument parsing using Clap with
//! environment variable support, so the tool runs unchanged as a CI step
//! where inputs arrive through the environment.

pub mod config;
pub mod github;
pub mod output;

use clap::Parser;
use std::path::PathBuf;

/// Default GitHub API base URL.
pub const DEFAULT_GITHUB_BASE_URL: &str = "https://api.github.com/";

/// CODEOWNERS reviewer assigner - works out who must review a change.
///
/// Resolves the owners of every changed file from a CODEOWNERS file, splits
/// them into regular and security reviewers, and reports the result. Runs
/// against a local checkout, or against a GitHub pull request when
/// `--pull-request` is given.
#[derive(Parser, Debug)]
#[command(name = "codeowners-reviewers")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the repository root (local mode).
    #[arg(long, env = "REPOSITORY_PATH", default_value = ".")]
    pub repository_path: PathBuf,

    /// Explicit path of the CODEOWNERS file, relative to the repository root.
    /// When unset, .github/CODEOWNERS, CODEOWNERS and docs/CODEOWNERS are tried.
    #[arg(long, env = "CODEOWNERS_PATH")]
    pub codeowners_path: Option<String>,

    /// Comma-separated handles that require security approval.
    #[arg(long, env = "SECURITY_REVIEWERS", value_delimiter = ',')]
    pub security_reviewers: Option<Vec<String>>,

    /// Free text included at the top of the report.
    #[arg(long, env = "CUSTOM_MESSAGE")]
    pub custom_message: Option<String>,

    /// Comma-separated changed file paths (local mode).
    #[arg(long, env = "CHANGED_FILES", value_delimiter = ',')]
    pub changed_files: Option<Vec<String>>,

    /// Repository in 'owner/repo' format (pull request mode).
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// Pull request number. Selects pull request mode.
    #[arg(long, env = "PULL_REQUEST_NUMBER")]
    pub pull_request: Option<u64>,

    /// Git ref to read the CODEOWNERS file at (pull request mode).
    #[arg(long = "ref", env = "CODEOWNERS_REF")]
    pub git_ref: Option<String>,

    /// GitHub personal access token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_access_token: Option<String>,

    /// GitHub base URL for API requests (for GitHub Enterprise).
    #[arg(long, env = "GITHUB_BASE_URL", default_value = DEFAULT_GITHUB_BASE_URL)]
    pub github_base_url: String,

    /// GitHub App ID for authentication (alternative to access token).
    #[arg(long, env = "GITHUB_APP_ID")]
    pub github_app_id: Option<u64>,

    /// GitHub App Installation ID (required when using App authentication).
    #[arg(long, env = "GITHUB_APP_INSTALLATION_ID")]
    pub github_app_installation_id: Option<u64>,

    /// GitHub App private key in PEM format (required when using App authentication).
    #[arg(long, env = "GITHUB_APP_PRIVATE_KEY", hide_env_values = true)]
    pub github_app_private_key: Option<String>,

    /// Resolve and print reviewers without posting the report.
    #[arg(long, env = "DRY_RUN")]
    pub dry_run: bool,

    /// File to append `reviewers=<handles>` to, e.g. the Actions output file.
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub github_output: Option<PathBuf>,

    /// Output the result as JSON instead of human-readable format.
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Returns true if the run targets a GitHub pull request.
    pub fn is_pull_request_mode(&self) -> bool {
        self.pull_request.is_some()
    }

    /// Returns true if GitHub authentication is configured.
    pub fn has_github_auth(&self) -> bool {
        self.github_access_token.is_some() || self.has_github_app_auth()
    }

    /// Returns true if GitHub App authentication is configured.
    pub fn has_github_app_auth(&self) -> bool {
        self.github_app_id.is_some()
            && self.github_app_installation_id.is_some()
            && self.github_app_private_key.is_some()
    }
}
