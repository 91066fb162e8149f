//! Random ownership files and changed-file lists for benchmarking and testing.
//!
//! Generation is deterministic for a given seed.

use crate::parse::OwnershipRule;
use crate::resolve::ChangedFile;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::fmt::Write;

/// Configuration for generating ownership files.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of rule lines to generate.
    pub num_rules: usize,
    /// Number of comment lines to generate.
    pub num_comments: usize,
    /// Maximum owners per rule (1-4 typical).
    pub max_owners_per_rule: usize,
    /// Number of changed files to generate.
    pub num_files: usize,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_rules: 100,
            num_comments: 20,
            max_owners_per_rule: 4,
            num_files: 50,
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with specified rules and proportional comments and files.
    ///
    /// Comments are set to ~20% of rules, changed files to ~50%.
    pub fn new(num_rules: usize) -> Self {
        Self {
            num_rules,
            num_comments: num_rules / 5,
            num_files: (num_rules / 2).max(1),
            ..Default::default()
        }
    }

    /// Small fixture (~10 rules).
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Medium fixture (~100 rules).
    pub fn medium() -> Self {
        Self::new(100)
    }

    /// Large fixture (~1000 rules).
    pub fn large() -> Self {
        Self::new(1_000)
    }

    /// Extra large fixture (~10k rules).
    pub fn xlarge() -> Self {
        Self::new(10_000)
    }

    /// Set the random seed for deterministic generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of comments explicitly.
    pub fn with_comments(mut self, num_comments: usize) -> Self {
        self.num_comments = num_comments;
        self
    }

    /// Set the maximum owners per rule.
    pub fn with_max_owners(mut self, max: usize) -> Self {
        self.max_owners_per_rule = max.max(1);
        self
    }

    /// Set the number of changed files.
    pub fn with_files(mut self, num_files: usize) -> Self {
        self.num_files = num_files;
        self
    }
}

/// Vocabulary for generating realistic patterns, paths and owners.
mod vocabulary {
    pub const PATTERN_TEMPLATES: &[&str] = &[
        "*",
        "*.{ext}",
        "{dir}/*",
        "{dir}/*.{ext}",
        "src/{dir}/*",
        "src/{dir}/*.{ext}",
        "src/{dir}/{sub}/*.{ext}",
        "docs/*.md",
        "{dir}/{sub}/file?.{ext}",
    ];

    pub const EXTENSIONS: &[&str] = &["rs", "py", "js", "ts", "go", "md", "yaml", "json", "toml"];
    pub const DIRECTORIES: &[&str] = &[
        "src", "lib", "tests", "docs", "config", "scripts", "api", "core",
    ];
    pub const SUBDIRECTORIES: &[&str] = &["v1", "v2", "internal", "util", "handlers"];
    pub const FILE_STEMS: &[&str] = &["main", "lib", "mod", "handler", "util", "file1", "index"];
    pub const USERNAMES: &[&str] = &["alice", "bob", "charlie", "dev", "maintainer", "reviewer"];
    pub const ORGS: &[&str] = &["acme", "github", "myorg"];
    pub const TEAMS: &[&str] = &["core", "platform", "frontend", "backend", "infra", "docs"];
    pub const SECTION_NAMES: &[&str] = &["Frontend", "Backend", "Infrastructure", "Documentation"];
}

/// Percentage of owners that are users; the rest are teams.
const WEIGHT_USER: u32 = 60;

/// Probability of appending an email owner, which the parser drops (percentage).
const EMAIL_PROBABILITY: u32 = 15;

/// Probability of inserting a comment section header (percentage).
const COMMENT_PROBABILITY: u32 = 20;

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// Generates random rules. Every rule has at least one handle owner.
pub fn generate_rules(config: &GeneratorConfig) -> Vec<OwnershipRule> {
    use vocabulary::*;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut rules = Vec::with_capacity(config.num_rules);

    for line in 0..config.num_rules {
        let template = pick(&mut rng, PATTERN_TEMPLATES);
        let pattern = template
            .replace("{ext}", pick(&mut rng, EXTENSIONS))
            .replace("{dir}", pick(&mut rng, DIRECTORIES))
            .replace("{sub}", pick(&mut rng, SUBDIRECTORIES));

        let num_owners = rng.random_range(1..=config.max_owners_per_rule.max(1));
        let mut owners: Vec<String> = Vec::with_capacity(num_owners);
        for _ in 0..num_owners {
            let owner = generate_owner(&mut rng);
            if !owners.contains(&owner) {
                owners.push(owner);
            }
        }

        rules.push(OwnershipRule::new(pattern, owners, line + 1));
    }

    rules
}

/// Generate a random owner based on weighted distribution.
fn generate_owner(rng: &mut StdRng) -> String {
    use vocabulary::*;

    if rng.random_ratio(WEIGHT_USER, 100) {
        format!("@{}", pick(rng, USERNAMES))
    } else {
        format!("@{}/{}", pick(rng, ORGS), pick(rng, TEAMS))
    }
}

/// Generates an ownership file as a string.
///
/// Rules are interleaved with section comments, blank lines and the odd
/// email owner, all of which the parser discards.
pub fn generate(config: &GeneratorConfig) -> String {
    use vocabulary::*;

    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(1));
    let mut out = String::from("# Auto-generated CODEOWNERS for benchmarking\n\n");
    let mut comments_added = 0;

    for (i, rule) in generate_rules(config).iter().enumerate() {
        if comments_added < config.num_comments
            && i > 0
            && rng.random_ratio(COMMENT_PROBABILITY, 100)
        {
            let _ = write!(out, "\n# {} section\n", pick(&mut rng, SECTION_NAMES));
            comments_added += 1;
        }

        out.push_str(&rule.to_string());
        if rng.random_ratio(EMAIL_PROBABILITY, 100) {
            let _ = write!(out, " {}@example.com", pick(&mut rng, USERNAMES));
        }
        out.push('\n');
    }

    out
}

/// Generates changed file paths drawn from the same vocabulary as the rules.
pub fn generate_changed_files(config: &GeneratorConfig) -> Vec<ChangedFile> {
    use vocabulary::*;

    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(2));
    (0..config.num_files)
        .map(|_| {
            let depth = rng.random_range(0..3);
            let mut path = String::new();
            if depth >= 1 {
                path.push_str(pick(&mut rng, DIRECTORIES));
                path.push('/');
            }
            if depth >= 2 {
                path.push_str(pick(&mut rng, SUBDIRECTORIES));
                path.push('/');
            }
            let _ = write!(
                path,
                "{}.{}",
                pick(&mut rng, FILE_STEMS),
                pick(&mut rng, EXTENSIONS)
            );
            ChangedFile::new(path)
        })
        .collect()
}
