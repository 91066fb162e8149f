//! Splits resolved reviewers into regular and security reviewers.

use crate::resolve::ReviewerSet;
use serde::Serialize;
use std::collections::BTreeSet;

/// Reviewers partitioned by the security reviewer list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Resolved reviewers that are not security reviewers.
    pub regular: BTreeSet<String>,
    /// Resolved reviewers that are also security reviewers.
    pub security_from_rules: BTreeSet<String>,
    /// Security reviewers that no rule produced, in list order.
    pub security_additional: Vec<String>,
}

impl Classification {
    /// Iterates over every security reviewer: rule-derived first, then the
    /// additional ones in list order.
    pub fn security_reviewers(&self) -> impl Iterator<Item = &str> {
        self.security_from_rules
            .iter()
            .chain(self.security_additional.iter())
            .map(String::as_str)
    }

    /// Returns true if there are no reviewers of either kind.
    pub fn is_empty(&self) -> bool {
        self.regular.is_empty()
            && self.security_from_rules.is_empty()
            && self.security_additional.is_empty()
    }
}

/// Partitions `reviewers` against the security reviewer list.
///
/// An empty list classifies every reviewer as regular.
pub fn classify(reviewers: &ReviewerSet, security_reviewers: &[String]) -> Classification {
    let (security_from_rules, regular): (BTreeSet<String>, BTreeSet<String>) = reviewers
        .iter()
        .cloned()
        .partition(|r| security_reviewers.contains(r));

    let security_additional = security_reviewers
        .iter()
        .filter(|s| !security_from_rules.contains(*s))
        .cloned()
        .collect();

    Classification {
        regular,
        security_from_rules,
        security_additional,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(handles: &[&str]) -> ReviewerSet {
        handles.iter().map(|h| h.to_string()).collect()
    }

    fn list(handles: &[&str]) -> Vec<String> {
        handles.iter().map(|h| h.to_string()).collect()
    }

    #[test]
    fn no_security_list() {
        let result = classify(&set(&["@api-team", "@go-team"]), &[]);
        assert_eq!(result.regular, set(&["@api-team", "@go-team"]));
        assert!(result.security_from_rules.is_empty());
        assert!(result.security_additional.is_empty());
    }

    #[test]
    fn security_reviewer_from_rules() {
        let result = classify(&set(&["@api-team", "@go-team"]), &list(&["@go-team"]));
        assert_eq!(result.regular, set(&["@api-team"]));
        assert_eq!(result.security_from_rules, set(&["@go-team"]));
        assert!(result.security_additional.is_empty());
    }

    #[test]
    fn additional_security_reviewers_keep_list_order() {
        let result = classify(
            &set(&["@api-team"]),
            &list(&["@zed-sec", "@api-team", "@appsec"]),
        );
        assert!(result.regular.is_empty());
        assert_eq!(result.security_from_rules, set(&["@api-team"]));
        assert_eq!(result.security_additional, list(&["@zed-sec", "@appsec"]));
    }

    #[test]
    fn security_only_when_nothing_resolved() {
        let result = classify(&ReviewerSet::new(), &list(&["@appsec"]));
        assert!(result.regular.is_empty());
        assert_eq!(result.security_additional, list(&["@appsec"]));
        assert!(!result.is_empty());
    }

    #[test]
    fn partition_laws() {
        let reviewers = set(&["@a", "@b", "@c", "@d"]);
        let result = classify(&reviewers, &list(&["@b", "@x", "@d"]));

        assert!(result.regular.is_disjoint(&result.security_from_rules));
        let union: ReviewerSet = result
            .regular
            .union(&result.security_from_rules)
            .cloned()
            .collect();
        assert_eq!(union, reviewers);
    }

    #[test]
    fn security_reviewers_iteration_order() {
        let result = classify(&set(&["@b-sec", "@a-sec"]), &list(&["@z", "@b-sec", "@a-sec", "@y"]));
        let all: Vec<_> = result.security_reviewers().collect();
        assert_eq!(all, vec!["@a-sec", "@b-sec", "@z", "@y"]);
    }

    #[test]
    fn empty_classification() {
        let result = classify(&ReviewerSet::new(), &[]);
        assert!(result.is_empty());
    }
}
