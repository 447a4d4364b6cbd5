//! Line-oriented vulnerability scanner.
//!
//! Applies the static rule registry to a snippet, line by line. Output is
//! category-major: every quantum-vulnerable match for the whole file
//! first, then every deprecated match, then the language's
//! implementation-flaw matches. Within a category, rules run in their
//! declaration order (severity-descending), each sweeping the whole file
//! in line order, so each category slice is ordered Critical ≥ High ≥
//! Medium ≥ Low. There is no early exit: several matches on one line each
//! produce their own finding, ordered by column.

use crate::core::{Language, Location, Severity, Vulnerability, VulnerabilityKind};
use crate::profile;
use crate::rules::{FlawRule, PatternRule, DEPRECATED_RULES, QUANTUM_RULES};
use tracing::debug;

pub struct VulnerabilityScanner;

impl VulnerabilityScanner {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, code: &str, language: Language) -> Vec<Vulnerability> {
        let lines: Vec<&str> = code.split('\n').collect();
        let mut findings = Vec::new();

        for rule in &QUANTUM_RULES {
            scan_pattern_rule(rule, &lines, &mut findings);
        }
        for rule in &DEPRECATED_RULES {
            scan_pattern_rule(rule, &lines, &mut findings);
        }
        for rule in profile::for_language(language).flaw_rules {
            scan_flaw_rule(rule, &lines, &mut findings);
        }

        debug!(
            language = %language,
            findings = findings.len(),
            "vulnerability scan complete"
        );
        findings
    }
}

impl Default for VulnerabilityScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn scan_pattern_rule(rule: &PatternRule, lines: &[&str], findings: &mut Vec<Vulnerability>) {
    for (line_idx, line) in lines.iter().enumerate() {
        for (offset, _) in rule.matches(line) {
            findings.push(Vulnerability::new(
                rule.kind,
                rule.severity,
                rule.description,
                rule.recommendation,
                Location::new(line_idx + 1, offset + 1),
            ));
        }
    }
}

fn scan_flaw_rule(rule: &FlawRule, lines: &[&str], findings: &mut Vec<Vulnerability>) {
    for (line_idx, line) in lines.iter().enumerate() {
        if (rule.applies)(line) {
            findings.push(Vulnerability::new(
                VulnerabilityKind::ImplementationFlaw,
                rule.severity,
                rule.description,
                rule.recommendation,
                Location::new(line_idx + 1, 1),
            ));
        }
    }
}

/// Severity tally over a scan result.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SeverityCount {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCount {
    pub fn tally(vulnerabilities: &[Vulnerability]) -> Self {
        let mut count = Self::default();
        for vuln in vulnerabilities {
            match vuln.severity {
                Severity::Critical => count.critical += 1,
                Severity::High => count.high += 1,
                Severity::Medium => count.medium += 1,
                Severity::Low => count.low += 1,
            }
        }
        count
    }
}
