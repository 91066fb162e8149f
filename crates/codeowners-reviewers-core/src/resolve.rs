//! Per-file rule resolution.
//!
//! For every changed file the ranked rules are scanned in order and the
//! first matching rule wins; its owners are added to the reviewer set and
//! no later rule is consulted for that file. A file that matches nothing
//! contributes no owners.

use crate::matching::CompiledPattern;
use crate::parse::OwnershipRule;
use crate::rank::RankedRuleSet;
use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Deduplicated reviewer handles, iterated in lexicographic order.
pub type ReviewerSet = BTreeSet<String>;

/// A file touched by the change under review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    /// Path of the file relative to the repository root.
    pub filename: String,
}

impl ChangedFile {
    /// Creates a changed file entry.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }
}

impl From<&str> for ChangedFile {
    fn from(filename: &str) -> Self {
        Self::new(filename)
    }
}

impl From<String> for ChangedFile {
    fn from(filename: String) -> Self {
        Self { filename }
    }
}

/// The rule that claimed a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedRule {
    /// The rule's pattern.
    pub pattern: String,
    /// The rule's source line.
    pub line: usize,
    /// The owners contributed by the rule.
    pub owners: Vec<String>,
}

impl From<&OwnershipRule> for MatchedRule {
    fn from(rule: &OwnershipRule) -> Self {
        Self {
            pattern: rule.pattern.clone(),
            line: rule.line,
            owners: rule.owners.clone(),
        }
    }
}

/// Resolution outcome for one changed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMatch {
    /// The changed file's path.
    pub filename: String,
    /// The winning rule, or `None` if no rule matched.
    pub rule: Option<MatchedRule>,
}

/// A rule left out of matching because its pattern did not compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRule {
    /// The rule's pattern.
    pub pattern: String,
    /// The rule's source line.
    pub line: usize,
    /// Why compilation failed.
    pub reason: String,
}

/// The result of resolving a set of changed files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Every owner contributed by a winning rule.
    pub reviewers: ReviewerSet,
    /// Per-file outcome, in input order.
    pub files: Vec<FileMatch>,
    /// Number of changed files processed.
    pub files_processed: usize,
    /// Number of rules parsed from the ownership text.
    pub rules_parsed: usize,
    /// Rules whose patterns could not be compiled.
    pub skipped_rules: Vec<SkippedRule>,
}

impl Resolution {
    /// Returns the files no rule matched.
    pub fn unowned_files(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .filter(|f| f.rule.is_none())
            .map(|f| f.filename.as_str())
    }
}

/// Matches changed files against a ranked rule set.
///
/// Patterns are compiled once when the resolver is built and reused for
/// every file in the pass.
#[derive(Debug)]
pub struct Resolver<'a> {
    compiled: Vec<(&'a OwnershipRule, CompiledPattern)>,
    skipped: Vec<SkippedRule>,
    rules_parsed: usize,
}

impl<'a> Resolver<'a> {
    /// Compiles every rule of the set, skipping rules whose patterns fail.
    pub fn new(rules: &'a RankedRuleSet) -> Self {
        let mut compiled = Vec::with_capacity(rules.len());
        let mut skipped = Vec::new();

        for rule in rules.iter() {
            match CompiledPattern::new(&rule.pattern) {
                Ok(pattern) => compiled.push((rule, pattern)),
                Err(e) => {
                    warn!("Skipping rule on line {}: {}", rule.line, e);
                    skipped.push(SkippedRule {
                        pattern: rule.pattern.clone(),
                        line: rule.line,
                        reason: e.source.to_string(),
                    });
                }
            }
        }

        Self {
            compiled,
            skipped,
            rules_parsed: rules.len(),
        }
    }

    /// Returns the highest-ranked rule matching the path.
    pub fn find_owner(&self, path: &str) -> Option<&'a OwnershipRule> {
        self.compiled
            .iter()
            .find(|(_, pattern)| pattern.matches(path))
            .map(|(rule, _)| *rule)
    }

    /// Resolves every changed file and accumulates the reviewer set.
    pub fn resolve(&self, files: &[ChangedFile]) -> Resolution {
        let mut reviewers = ReviewerSet::new();
        let mut matches = Vec::with_capacity(files.len());

        for file in files {
            let rule = self.find_owner(&file.filename);
            match rule {
                Some(rule) => {
                    trace!(
                        "{} matched '{}' (line {})",
                        file.filename, rule.pattern, rule.line
                    );
                    reviewers.extend(rule.owners.iter().cloned());
                }
                None => debug!("{} matched no rule", file.filename),
            }
            matches.push(FileMatch {
                filename: file.filename.clone(),
                rule: rule.map(MatchedRule::from),
            });
        }

        info!(
            "Processed {} file(s) against {} rule(s), {} reviewer(s) found",
            files.len(),
            self.rules_parsed,
            reviewers.len()
        );

        Resolution {
            reviewers,
            files: matches,
            files_processed: files.len(),
            rules_parsed: self.rules_parsed,
            skipped_rules: self.skipped.clone(),
        }
    }
}

/// Resolves changed files against a ranked rule set in one pass.
pub fn resolve(rules: &RankedRuleSet, files: &[ChangedFile]) -> Resolution {
    Resolver::new(rules).resolve(files)
}
