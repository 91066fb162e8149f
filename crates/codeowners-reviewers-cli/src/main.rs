//! CODEOWNERS Reviewers CLI
//!
//! A command-line tool that assigns pull request reviewers from a CODEOWNERS
//! file.

use clap::Parser;
use codeowners_reviewers_core::source::{ChangedFileList, FsOwnershipSource};
use codeowners_reviewers_core::{
    AssignError, AssignmentOutcome, ChangedFilesSource, OwnershipSource, ReportPoster,
    run_assignment,
};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode as StdExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::signal;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Args;
use cli::config::{ExitCode, RunMode, ValidatedConfig, create_octocrab};
use cli::github::OctocrabHost;
use cli::output::{HumanOutput, JsonOutput, write_github_output};

#[tokio::main]
async fn main() -> StdExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose, args.json);

    // Set up signal handling for graceful shutdown
    let terminated = Arc::new(AtomicBool::new(false));
    let terminated_clone = terminated.clone();

    tokio::spawn(async move {
        let ctrl_c = signal::ctrl_c();
        #[cfg(unix)]
        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                }
                Err(e) => {
                    warn!("Failed to install SIGTERM handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };
        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                info!("Received SIGINT, shutting down...");
            }
            _ = terminate => {
                info!("Received SIGTERM, shutting down...");
            }
        }

        terminated_clone.store(true, Ordering::SeqCst);
    });

    // Run the assigner
    let exit_code = run(args, &terminated).await;

    // Check if we were terminated by signal
    if terminated.load(Ordering::SeqCst) {
        return StdExitCode::from(ExitCode::Terminated as u8);
    }

    StdExitCode::from(i32::from(exit_code) as u8)
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Don't output logs when using JSON output mode
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let mut filter = EnvFilter::from_default_env().add_directive(level.into());
    for directive in ["octocrab=warn", "hyper=warn", "reqwest=warn"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Run the assigner with the given arguments.
async fn run(args: Args, terminated: &AtomicBool) -> ExitCode {
    let mut stderr = io::stderr();

    // Validate configuration
    let config = match ValidatedConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            let use_colors = !args.json && io::stderr().is_terminal();
            write_error(&mut stderr, &e.to_string(), use_colors);
            return ExitCode::StartupFailure;
        }
    };

    let use_colors = !config.json_output && io::stdout().is_terminal();
    debug!("Validated configuration: {:?}", config);

    // Build the collaborators for the selected mode
    let outcome = match &config.mode {
        RunMode::Local {
            repo_path,
            changed_files,
        } => {
            info!("Repository path: {}", repo_path.display());
            if changed_files.is_empty() {
                warn!("No changed files given");
            }
            let changed = ChangedFileList::from_paths(changed_files.iter().cloned());
            let ownership = FsOwnershipSource::new(repo_path.clone());
            assign(&changed, &ownership, None, &config, terminated).await
        }
        RunMode::PullRequest {
            target,
            auth,
            base_url,
        } => {
            info!(
                "Pull request: {}/{}#{}",
                target.owner, target.repo, target.number
            );
            let client = match create_octocrab(auth, base_url).await {
                Ok(client) => client,
                Err(e) => {
                    write_error(&mut stderr, &e.to_string(), use_colors);
                    return ExitCode::StartupFailure;
                }
            };
            let host = OctocrabHost::new(client, target.clone());
            let poster: Option<&dyn ReportPoster> = if config.posts_report() {
                Some(&host)
            } else {
                info!("Dry run, the report will not be posted");
                None
            };
            assign(&host, &host, poster, &config, terminated).await
        }
    };

    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(RunError::Terminated) => return ExitCode::Terminated,
        Err(RunError::Assign(e)) => {
            write_error(&mut stderr, &e.to_string(), use_colors);
            return ExitCode::HostFailure;
        }
    };

    if let Some(ref path) = config.github_output {
        if let Err(e) = write_github_output(path, &outcome.reviewers) {
            write_error(
                &mut stderr,
                &format!("failed to write '{}': {}", path.display(), e),
                use_colors,
            );
            return ExitCode::StartupFailure;
        }
        debug!("Wrote reviewers output to {}", path.display());
    }

    // Output results
    let mut stdout = io::stdout().lock();
    let written = if config.json_output {
        JsonOutput::new(&outcome, config.dry_run).write(&mut stdout)
    } else {
        HumanOutput::new(&mut stdout, use_colors).write_outcome(&outcome)
    };
    if let Err(e) = written {
        error!("Failed to write output: {}", e);
        return ExitCode::StartupFailure;
    }

    if let Some(ref e) = outcome.post_error {
        write_error(
            &mut stderr,
            &format!("failed to post report: {}", e),
            use_colors,
        );
    }

    ExitCode::for_outcome(&outcome)
}

/// Why a run stopped before producing an outcome.
enum RunError {
    Terminated,
    Assign(AssignError),
}

/// Runs the assignment unless a shutdown signal has already arrived.
async fn assign(
    changed: &dyn ChangedFilesSource,
    ownership: &dyn OwnershipSource,
    poster: Option<&dyn ReportPoster>,
    config: &ValidatedConfig,
    terminated: &AtomicBool,
) -> Result<AssignmentOutcome, RunError> {
    if terminated.load(Ordering::SeqCst) {
        return Err(RunError::Terminated);
    }
    run_assignment(changed, ownership, poster, &config.assign)
        .await
        .map_err(RunError::Assign)
}

/// Write an error message to the writer.
fn write_error<W: Write>(writer: &mut W, message: &str, use_colors: bool) {
    let _ = HumanOutput::new(writer, use_colors).write_error(message);
}
