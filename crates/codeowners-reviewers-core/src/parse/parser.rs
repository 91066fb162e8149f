//! Line-oriented parser for ownership files.

use log::{debug, trace};

use super::lexer::{is_blank_line, is_comment_line, is_handle, tokens};
use super::rule::OwnershipRule;

/// Parses ownership file text into rules, in file order.
///
/// Blank lines and `#` comments are skipped. For every other line the first
/// token is the pattern and the remaining `@`-prefixed tokens are its owners;
/// any other token (emails, trailing comments) is discarded. A line left with
/// no owners produces no rule. Nothing here is an error.
///
/// # Example
///
/// ```rust
/// use codeowners_reviewers_core::parse::parse_rules;
///
/// let rules = parse_rules("# comment\n*.go @go-team\nsrc/api/*.go @api-team\n");
/// assert_eq!(rules.len(), 2);
/// assert_eq!(rules[1].pattern, "src/api/*.go");
/// assert_eq!(rules[1].owners, vec!["@api-team"]);
/// ```
pub fn parse_rules(input: &str) -> Vec<OwnershipRule> {
    let rules: Vec<OwnershipRule> = input
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| parse_rule_line(line, idx + 1))
        .collect();

    debug!("Parsed {} ownership rule(s)", rules.len());
    rules
}

/// Parses a single line, returning `None` for lines that yield no rule.
pub fn parse_rule_line(line: &str, line_number: usize) -> Option<OwnershipRule> {
    if is_blank_line(line) || is_comment_line(line) {
        return None;
    }

    let mut toks = tokens(line).into_iter();
    let pattern = toks.next()?;

    let mut owners: Vec<String> = Vec::new();
    for tok in toks.filter(|t| is_handle(t)) {
        if !owners.iter().any(|o| o == tok) {
            owners.push(tok.to_string());
        }
    }

    if owners.is_empty() {
        debug!("Line {}: pattern '{}' has no owners, skipping", line_number, pattern);
        return None;
    }

    trace!("Line {}: {} -> {:?}", line_number, pattern, owners);
    Some(OwnershipRule::new(pattern, owners, line_number))
}
