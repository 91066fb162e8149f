//! Specificity ranking for ownership rules.
//!
//! A rule's specificity is its depth: the number of `/`-delimited segments in
//! its pattern. Deeper patterns rank first, so `src/payments/*.go` beats
//! `*.go`. This approximates longest-prefix matching without replicating it;
//! an unrelated deep pattern can outrank a shallower one that reads as more
//! specific, and that ordering is kept as is.

use crate::parse::OwnershipRule;
use std::cmp::Reverse;

/// Returns the depth of a pattern: `count('/') + 1`.
///
/// Leading and trailing slashes count like any other.
pub fn depth(pattern: &str) -> usize {
    pattern.matches('/').count() + 1
}

/// Ownership rules ordered from most to least specific.
///
/// Equal-depth rules keep their file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedRuleSet {
    rules: Vec<OwnershipRule>,
}

impl RankedRuleSet {
    /// Ranks the given rules by descending depth with a stable sort.
    pub fn new(mut rules: Vec<OwnershipRule>) -> Self {
        rules.sort_by_key(|rule| Reverse(depth(&rule.pattern)));
        Self { rules }
    }

    /// Iterates over rules in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &OwnershipRule> {
        self.rules.iter()
    }

    /// Consumes the set, returning the rules in rank order.
    pub fn into_rules(self) -> Vec<OwnershipRule> {
        self.rules
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set contains no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl From<Vec<OwnershipRule>> for RankedRuleSet {
    fn from(rules: Vec<OwnershipRule>) -> Self {
        Self::new(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_rules;

    fn patterns(set: &RankedRuleSet) -> Vec<&str> {
        set.iter().map(|r| r.pattern.as_str()).collect()
    }

    #[test]
    fn depth_counts_segments() {
        assert_eq!(depth("*"), 1);
        assert_eq!(depth("*.go"), 1);
        assert_eq!(depth("docs/*"), 2);
        assert_eq!(depth("src/api/*.go"), 3);
        assert_eq!(depth("/docs/"), 3);
    }

    #[test]
    fn deeper_rules_rank_first() {
        let rules = parse_rules("*.go @go-team\nsrc/api/*.go @api-team\n");
        let ranked = RankedRuleSet::new(rules);
        assert_eq!(patterns(&ranked), vec!["src/api/*.go", "*.go"]);
    }

    #[test]
    fn ties_keep_file_order() {
        let rules = parse_rules("a/* @a\n* @star\nb/* @b\n*.md @md\nc/d/* @cd\n");
        let ranked = RankedRuleSet::new(rules);
        assert_eq!(patterns(&ranked), vec!["c/d/*", "a/*", "b/*", "*", "*.md"]);
    }

    #[test]
    fn ranking_is_idempotent() {
        let rules = parse_rules(
            "* @all\ndocs/ @docs\nsrc/*.rs @rust\n/src/core/ @core\n*.md @md\nsrc/api/v1/*.go @v1\n",
        );
        let once = RankedRuleSet::new(rules);
        let twice = RankedRuleSet::new(once.clone().into_rules());
        assert_eq!(once, twice);
    }

    #[test]
    fn deep_unrelated_pattern_outranks_shallow_one() {
        // Segment count decides, not textual specificity.
        let rules = parse_rules("src/payments/handler.go @payments\na/b/c/* @deep\n");
        let ranked = RankedRuleSet::new(rules);
        assert_eq!(patterns(&ranked), vec!["a/b/c/*", "src/payments/handler.go"]);
    }

    #[test]
    fn empty_set() {
        let ranked = RankedRuleSet::new(Vec::new());
        assert!(ranked.is_empty());
        assert_eq!(ranked.len(), 0);
    }
}
