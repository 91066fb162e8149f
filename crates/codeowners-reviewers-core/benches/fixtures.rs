//! Benchmark fixtures - generated at runtime.
//!
//! Fixtures are generated lazily on first access and cached for the
//! duration of the benchmark run. All generation is deterministic.

use codeowners_reviewers_core::ChangedFile;
use codeowners_reviewers_core::generate::{GeneratorConfig, generate, generate_changed_files};
use std::sync::LazyLock;

/// An ownership file together with the changed files resolved against it.
pub struct Fixture {
    pub text: String,
    pub files: Vec<ChangedFile>,
}

impl Fixture {
    fn new(config: GeneratorConfig) -> Self {
        Self {
            text: generate(&config),
            files: generate_changed_files(&config),
        }
    }
}

// Lazily generated fixtures (deterministic via default seed)
static SMALL: LazyLock<Fixture> = LazyLock::new(|| Fixture::new(GeneratorConfig::small()));
static MEDIUM: LazyLock<Fixture> = LazyLock::new(|| Fixture::new(GeneratorConfig::medium()));
static LARGE: LazyLock<Fixture> = LazyLock::new(|| Fixture::new(GeneratorConfig::large()));
static XLARGE: LazyLock<Fixture> = LazyLock::new(|| Fixture::new(GeneratorConfig::xlarge()));

/// Standard fixtures for regular benchmarks.
pub fn fixtures() -> [(&'static str, &'static Fixture); 3] {
    [("small", &SMALL), ("medium", &MEDIUM), ("large", &LARGE)]
}

/// Extended fixtures including a 10k-rule stress case.
pub fn fixtures_extended() -> [(&'static str, &'static Fixture); 4] {
    [
        ("small", &SMALL),
        ("medium", &MEDIUM),
        ("large", &LARGE),
        ("xlarge", &XLARGE),
    ]
}
