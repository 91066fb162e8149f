//! Output formatting for the CLI.
//!
//! This module provides human-readable and JSON output for an assignment
//! outcome, plus the `reviewers=` line written to the workflow output file.

use codeowners_reviewers_core::{AssignmentOutcome, OutcomeStatus};
use colored::Colorize;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// JSON output document.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    /// The outcome of the run.
    #[serde(flatten)]
    pub outcome: &'a AssignmentOutcome,
    /// Whether posting was skipped on request.
    pub dry_run: bool,
}

impl<'a> JsonOutput<'a> {
    /// Wraps an outcome for serialization.
    pub fn new(outcome: &'a AssignmentOutcome, dry_run: bool) -> Self {
        Self { outcome, dry_run }
    }

    /// Writes the JSON output to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes a section header.
    pub fn write_header(&mut self, title: &str) -> std::io::Result<()> {
        let header = format!("==> {}", title);
        if self.use_colors {
            writeln!(self.writer, "\n{}", header.cyan().bold())?;
        } else {
            writeln!(self.writer, "\n{}", header)?;
        }
        Ok(())
    }

    /// Writes the whole outcome: per-file owners, reviewers and the report.
    pub fn write_outcome(&mut self, outcome: &AssignmentOutcome) -> std::io::Result<()> {
        if let Some(ref assignment) = outcome.assignment {
            self.write_header("Files")?;
            for file in &assignment.resolution.files {
                match &file.rule {
                    Some(rule) => writeln!(
                        self.writer,
                        "  {} -> {} (line {}) {}",
                        file.filename,
                        rule.pattern,
                        rule.line,
                        rule.owners.join(" ")
                    )?,
                    None => self.write_unowned(&file.filename)?,
                }
            }

            for skipped in &assignment.resolution.skipped_rules {
                let message = format!(
                    "skipped rule '{}' on line {}: {}",
                    skipped.pattern, skipped.line, skipped.reason
                );
                self.write_warning(&message)?;
            }

            let classification = &assignment.classification;
            self.write_header("Reviewers")?;
            self.write_handles("regular", classification.regular.iter().map(String::as_str))?;
            self.write_handles("security", classification.security_reviewers())?;
        }

        if !outcome.posted {
            self.write_header("Report")?;
            writeln!(self.writer, "{}", outcome.report.trim_end())?;
        }

        self.write_summary(outcome)
    }

    fn write_unowned(&mut self, filename: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "  {} -> {}", filename, "(no owner)".dimmed())
        } else {
            writeln!(self.writer, "  {} -> (no owner)", filename)
        }
    }

    fn write_handles<'h>(
        &mut self,
        label: &str,
        handles: impl Iterator<Item = &'h str>,
    ) -> std::io::Result<()> {
        let handles: Vec<&str> = handles.collect();
        let list = if handles.is_empty() {
            "(none)".to_string()
        } else {
            handles.join(" ")
        };
        writeln!(self.writer, "  {:<10}{}", format!("{}:", label), list)
    }

    /// Writes a single warning line.
    pub fn write_warning(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "  {} {}", "[WARN]".yellow().bold(), message)
        } else {
            writeln!(self.writer, "  [WARN] {}", message)
        }
    }

    /// Writes a one-line summary of the outcome.
    pub fn write_summary(&mut self, outcome: &AssignmentOutcome) -> std::io::Result<()> {
        writeln!(self.writer)?;

        let (message, ok) = match outcome.status {
            OutcomeStatus::Assigned if outcome.reviewers.is_empty() => {
                ("✓ No code owners matched the changed files".to_string(), true)
            }
            OutcomeStatus::Assigned => (format!("✓ Reviewers: {}", outcome.reviewers), true),
            OutcomeStatus::OwnershipNotFound => (
                format!(
                    "✗ No CODEOWNERS file found (searched: {})",
                    outcome.searched.join(", ")
                ),
                false,
            ),
        };

        if self.use_colors {
            let styled = if ok {
                message.green().bold()
            } else {
                message.red().bold()
            };
            writeln!(self.writer, "{}", styled)
        } else {
            writeln!(self.writer, "{}", message)
        }
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)
        } else {
            writeln!(self.writer, "Error: {}", message)
        }
    }
}

/// Appends `reviewers=<value>` to a workflow output file, creating it if needed.
pub fn write_github_output(path: &Path, reviewers: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "reviewers={}", reviewers)
}
