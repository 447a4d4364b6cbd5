//! Per-language capability table.
//!
//! Every stage of the pipeline that branches on language does so through
//! this table: flaw rules for the scanner, the structural refactor and
//! substitution table for the rewriter, the scaffold generator, and the
//! simulator's tuning. Adding a language means adding one row here.

use crate::core::{Language, RefactorResult};
use crate::rewrite::refactor;
use crate::rewrite::replace::{self, ImportBlock, ReplacementRule};
use crate::rules::{self, FlawRule};
use crate::scaffold;
use once_cell::sync::Lazy;
use regex::Regex;

/// Simulator tuning for one language. Ranges are half-open `[min, max)`.
pub struct SimulationParams {
    pub pass_probability: f64,
    pub duration_ms: (f64, f64),
    pub coverage: (f64, f64),
    pub failure_message: fn(&str) -> String,
}

pub struct LanguageProfile {
    pub language: Language,
    pub flaw_rules: &'static [FlawRule],
    pub refactor: fn(&str) -> RefactorResult,
    pub replacements: &'static [ReplacementRule],
    pub imports: &'static ImportBlock,
    pub scaffold: fn(&str) -> String,
    pub test_name: &'static Lazy<Regex>,
    pub simulation: SimulationParams,
}

static SOLIDITY_TEST_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"function\s+(test\w+)\s*\(").unwrap());
static PYTHON_TEST_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"def\s+(test_\w+)\s*\(").unwrap());
static RUST_TEST_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#\[test\]\s*fn\s+(\w+)\s*\(").unwrap());

fn solidity_failure(name: &str) -> String {
    format!("Simulated revert in {name}: assertion failed")
}

fn python_failure(name: &str) -> String {
    format!("AssertionError in {name}: expected value did not match actual")
}

fn rust_failure(name: &str) -> String {
    format!("panic in {name}: assertion failed")
}

static SOLIDITY_PROFILE: LanguageProfile = LanguageProfile {
    language: Language::Solidity,
    flaw_rules: &rules::SOLIDITY_FLAWS,
    refactor: refactor::refactor_solidity,
    replacements: &replace::SOLIDITY_REPLACEMENTS,
    imports: &replace::SOLIDITY_IMPORTS,
    scaffold: scaffold::solidity::generate,
    test_name: &SOLIDITY_TEST_NAME,
    simulation: SimulationParams {
        pass_probability: 0.90,
        duration_ms: (10.0, 110.0),
        coverage: (80.0, 100.0),
        failure_message: solidity_failure,
    },
};

static PYTHON_PROFILE: LanguageProfile = LanguageProfile {
    language: Language::Python,
    flaw_rules: &rules::PYTHON_FLAWS,
    refactor: refactor::refactor_python,
    replacements: &replace::PYTHON_REPLACEMENTS,
    imports: &replace::PYTHON_IMPORTS,
    scaffold: scaffold::python::generate,
    test_name: &PYTHON_TEST_NAME,
    simulation: SimulationParams {
        pass_probability: 0.95,
        duration_ms: (5.0, 55.0),
        coverage: (85.0, 100.0),
        failure_message: python_failure,
    },
};

static RUST_PROFILE: LanguageProfile = LanguageProfile {
    language: Language::Rust,
    flaw_rules: &rules::RUST_FLAWS,
    refactor: refactor::refactor_rust,
    replacements: &replace::RUST_REPLACEMENTS,
    imports: &replace::RUST_IMPORTS,
    scaffold: scaffold::rust_lang::generate,
    test_name: &RUST_TEST_NAME,
    simulation: SimulationParams {
        pass_probability: 0.98,
        duration_ms: (2.0, 32.0),
        coverage: (90.0, 100.0),
        failure_message: rust_failure,
    },
};

pub fn for_language(language: Language) -> &'static LanguageProfile {
    match language {
        Language::Solidity => &SOLIDITY_PROFILE,
        Language::Python => &PYTHON_PROFILE,
        Language::Rust => &RUST_PROFILE,
    }
}
