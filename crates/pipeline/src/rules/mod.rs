//! Static, process-wide pattern rule registry.
//!
//! Rules are tagged values in flat tables rather than a trait hierarchy:
//! each carries its pattern, algorithm class, fixed severity, and
//! recommendation text. Tables are built once behind `Lazy` statics and
//! never mutated. The scanner walks them in declaration order, which is
//! severity-descending within each category.

pub mod deprecated;
pub mod flaws;
pub mod quantum;

use crate::core::{Severity, VulnerabilityKind};
use once_cell::sync::Lazy;
use regex::Regex;

pub use deprecated::DEPRECATED_RULES;
pub use flaws::{FlawRule, PYTHON_FLAWS, RUST_FLAWS, SOLIDITY_FLAWS};
pub use quantum::QUANTUM_RULES;

/// Lexical matcher plus metadata flagging one vulnerability class.
pub struct PatternRule {
    pub pattern: &'static Lazy<Regex>,
    pub kind: VulnerabilityKind,
    pub severity: Severity,
    pub description: &'static str,
    pub recommendation: &'static str,
    /// Stand-in for negative lookahead, which the regex crate does not
    /// support: reject a match when the matched text equals
    /// `guard.matched` (case-insensitive) and the rest of the line after
    /// the match contains `guard.absent_after`.
    pub guard: Option<MatchGuard>,
}

pub struct MatchGuard {
    pub matched: &'static str,
    pub absent_after: &'static str,
}

impl PatternRule {
    /// All accepted matches on `line` as (byte column offset, matched text).
    pub fn matches<'a>(&self, line: &'a str) -> Vec<(usize, &'a str)> {
        self.pattern
            .find_iter(line)
            .filter(|m| match &self.guard {
                Some(guard) => {
                    !(m.as_str().eq_ignore_ascii_case(guard.matched)
                        && line[m.end()..].contains(guard.absent_after))
                }
                None => true,
            })
            .map(|m| (m.start(), m.as_str()))
            .collect()
    }
}
