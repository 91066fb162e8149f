//! Markdown rendering of the reviewer report posted on the change.

use crate::assign::Assignment;
use std::fmt::Write;

/// Heading used on every report.
pub const REPORT_HEADING: &str = "### Code owners";

/// Renders the report for a completed assignment.
///
/// Regular reviewers and security reviewers get separate sections. When
/// there is nobody to list, a single sentence says so.
pub fn render_report(assignment: &Assignment, custom_message: &str) -> String {
    let classification = &assignment.classification;
    let mut out = String::new();

    push_header(&mut out, custom_message);

    if classification.is_empty() {
        out.push_str("No code owners matched the files changed in this pull request.\n");
        return out;
    }

    if !classification.regular.is_empty() {
        out.push_str("The following reviewers own files changed in this pull request:\n\n");
        push_list(&mut out, classification.regular.iter().map(String::as_str));
    }

    if classification.security_reviewers().next().is_some() {
        if !classification.regular.is_empty() {
            out.push('\n');
        }
        out.push_str("#### Security review required\n\n");
        out.push_str("The following security reviewers must approve this pull request:\n\n");
        push_list(&mut out, classification.security_reviewers());
    }

    out
}

/// Renders the notice posted when no ownership file could be found.
pub fn render_not_found(searched: &[String], custom_message: &str) -> String {
    let mut out = String::new();
    push_header(&mut out, custom_message);

    out.push_str("Reviewers could not be assigned: no CODEOWNERS file was found.\n\n");
    out.push_str("Searched locations:\n\n");
    push_list(&mut out, searched.iter().map(|s| s.as_str()).map(Code));
    out
}

fn push_header(out: &mut String, custom_message: &str) {
    out.push_str(REPORT_HEADING);
    out.push_str("\n\n");

    let message = custom_message.trim();
    if !message.is_empty() {
        out.push_str(message);
        out.push_str("\n\n");
    }
}

fn push_list<I, T>(out: &mut String, items: I)
where
    I: IntoIterator<Item = T>,
    T: std::fmt::Display,
{
    for item in items {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "- {}", item);
    }
}

/// Displays a value as inline code.
struct Code<'a>(&'a str);

impl std::fmt::Display for Code<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}`", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::assign_reviewers;
    use crate::resolve::ChangedFile;

    fn assignment(text: &str, paths: &[&str], security: &[&str]) -> Assignment {
        let files: Vec<ChangedFile> = paths.iter().copied().map(ChangedFile::from).collect();
        let security: Vec<String> = security.iter().map(|s| s.to_string()).collect();
        assign_reviewers(text, &files, &security)
    }

    #[test]
    fn regular_reviewers_only() {
        let a = assignment("*.go @go-team\nsrc/api/*.go @api-team\n", &["src/api/h.go", "u.go"], &[]);
        let report = render_report(&a, "");
        assert_eq!(
            report,
            "### Code owners\n\n\
             The following reviewers own files changed in this pull request:\n\n\
             - @api-team\n\
             - @go-team\n"
        );
    }

    #[test]
    fn security_section() {
        let a = assignment(
            "*.go @go-team\nsrc/api/*.go @api-team\n",
            &["src/api/h.go", "u.go"],
            &["@go-team", "@appsec"],
        );
        let report = render_report(&a, "");
        assert!(report.contains("- @api-team\n\n#### Security review required"));
        assert!(report.ends_with("- @go-team\n- @appsec\n"));
    }

    #[test]
    fn security_only() {
        let a = assignment("", &["x"], &["@appsec"]);
        let report = render_report(&a, "");
        assert!(!report.contains("own files changed"));
        assert!(report.contains("#### Security review required\n\n"));
        assert!(report.contains("- @appsec\n"));
    }

    #[test]
    fn nothing_matched() {
        let a = assignment("*.go @go\n", &["README.md"], &[]);
        let report = render_report(&a, "");
        assert!(report.contains("No code owners matched"));
        assert!(!report.contains("- @"));
    }

    #[test]
    fn custom_message_follows_heading() {
        let a = assignment("* @all\n", &["x"], &[]);
        let report = render_report(&a, "  Please review within 24h.  ");
        assert!(report.starts_with("### Code owners\n\nPlease review within 24h.\n\n"));
    }

    #[test]
    fn not_found_notice() {
        let searched = vec![".github/CODEOWNERS".to_string(), "CODEOWNERS".to_string()];
        let report = render_not_found(&searched, "Hi");
        assert!(report.starts_with("### Code owners\n\nHi\n\n"));
        assert!(report.contains("no CODEOWNERS file was found"));
        assert!(report.contains("- `.github/CODEOWNERS`\n- `CODEOWNERS`\n"));
    }
}
