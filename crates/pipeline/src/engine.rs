//! Pipeline entry points.
//!
//! Three operations, one per subcommand: `analyze`, `refactor`, and
//! `generate_tests`. Language is always inferred from the snippet.
//! Blank input fails up front; stage failures surface as internal errors
//! with no partial results.

use crate::core::{Change, Language, PipelineError, Result, Vulnerability};
use crate::exec::{TestExecutionSimulator, TestSuite};
use crate::profile;
use crate::report::{AnalysisSummary, SecurityReportBuilder, TestReportBuilder};
use crate::rewrite::RewriteEngine;
use crate::scanner::{SeverityCount, VulnerabilityScanner};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub language: Language,
    pub vulnerabilities: Vec<Vulnerability>,
    pub security_report: String,
    pub summary: AnalysisSummary,
    pub recommendations: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RefactorOptions {
    pub execute_tests: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefactorMetadata {
    pub original_lines: usize,
    pub refactored_lines: usize,
    pub security_issues: usize,
    pub critical_issues: usize,
    pub post_quantum_upgrades: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefactorReport {
    pub language: Language,
    pub refactored_code: String,
    pub changes: Vec<Change>,
    pub summary: String,
    pub test_suite: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_results: Option<TestSuite>,
    pub security_report: String,
    pub vulnerabilities: Vec<Vulnerability>,
    pub metadata: RefactorMetadata,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestGenMetadata {
    pub test_count: usize,
    pub coverage: f64,
    pub success_rate: f64,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestGenReport {
    pub language: Language,
    pub test_suite: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_results: Option<TestSuite>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_report: Option<String>,
    pub metadata: TestGenMetadata,
    pub generated_at: DateTime<Utc>,
}

pub struct PipelineEngine {
    scanner: VulnerabilityScanner,
    rewriter: RewriteEngine,
    simulator: TestExecutionSimulator,
    security_reports: SecurityReportBuilder,
    test_reports: TestReportBuilder,
}

impl PipelineEngine {
    pub fn new() -> Self {
        Self {
            scanner: VulnerabilityScanner::new(),
            rewriter: RewriteEngine::new(),
            simulator: TestExecutionSimulator::new(),
            security_reports: SecurityReportBuilder::new(),
            test_reports: TestReportBuilder::new(),
        }
    }

    /// Deterministic simulator draws, for reproducible runs.
    pub fn with_rng_seed(seed: u64) -> Self {
        Self {
            simulator: TestExecutionSimulator::with_rng_seed(seed),
            ..Self::new()
        }
    }

    pub fn analyze(&self, code: &str) -> Result<AnalysisReport> {
        let code = validate(code)?;
        let language = Language::detect(code);
        let vulnerabilities = self.scanner.analyze(code, language);
        let summary = AnalysisSummary::from_vulnerabilities(&vulnerabilities);
        let recommendations = summary.recommendations();
        let security_report = self.security_reports.generate(&vulnerabilities);

        info!(
            language = %language,
            issues = summary.total_issues,
            "analysis complete"
        );
        Ok(AnalysisReport {
            language,
            vulnerabilities,
            security_report,
            summary,
            recommendations,
            generated_at: Utc::now(),
        })
    }

    pub fn refactor(&self, code: &str, options: RefactorOptions) -> Result<RefactorReport> {
        let code = validate(code)?;
        let language = Language::detect(code);

        let vulnerabilities = self.scanner.analyze(code, language);
        let severities = SeverityCount::tally(&vulnerabilities);
        let security_report = self.security_reports.generate(&vulnerabilities);

        let rewritten = self.rewriter.rewrite(code, language);
        let test_suite = (profile::for_language(language).scaffold)(&rewritten.code);
        let test_results = options
            .execute_tests
            .then(|| self.simulator.execute(&test_suite, language));

        let post_quantum_upgrades = rewritten
            .changes
            .iter()
            .filter(|c| is_post_quantum_upgrade(c))
            .count();
        let metadata = RefactorMetadata {
            original_lines: code.lines().count(),
            refactored_lines: rewritten.code.lines().count(),
            security_issues: vulnerabilities.len(),
            critical_issues: severities.critical,
            post_quantum_upgrades,
        };
        let summary = format!(
            "Refactored {} code with {} improvements",
            language.display_name(),
            rewritten.changes.len()
        );

        info!(
            language = %language,
            changes = rewritten.changes.len(),
            "refactor complete"
        );
        Ok(RefactorReport {
            language,
            refactored_code: rewritten.code,
            changes: rewritten.changes,
            summary,
            test_suite,
            test_results,
            security_report,
            vulnerabilities,
            metadata,
            generated_at: Utc::now(),
        })
    }

    pub fn generate_tests(&self, code: &str, execute: bool) -> Result<TestGenReport> {
        let code = validate(code)?;
        let language = Language::detect(code);
        let profile = profile::for_language(language);

        let test_suite = (profile.scaffold)(code);
        let test_results = execute.then(|| self.simulator.execute(&test_suite, language));
        let test_report = test_results
            .as_ref()
            .map(|suite| self.test_reports.generate(suite));

        let metadata = match &test_results {
            Some(suite) => TestGenMetadata {
                test_count: suite.total_tests,
                coverage: suite.coverage,
                success_rate: suite.success_rate(),
                duration_ms: suite.duration,
            },
            None => TestGenMetadata {
                test_count: profile.test_name.captures_iter(&test_suite).count(),
                coverage: 0.0,
                success_rate: 0.0,
                duration_ms: 0.0,
            },
        };

        info!(
            language = %language,
            tests = metadata.test_count,
            executed = execute,
            "test generation complete"
        );
        Ok(TestGenReport {
            language,
            test_suite,
            test_results,
            test_report,
            metadata,
            generated_at: Utc::now(),
        })
    }
}

impl Default for PipelineEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(code: &str) -> Result<&str> {
    if code.trim().is_empty() {
        return Err(PipelineError::Input);
    }
    Ok(code)
}

fn is_post_quantum_upgrade(change: &Change) -> bool {
    let reason = change.reason.to_lowercase();
    ["quantum", "dilithium", "kyber", "sphincs"]
        .iter()
        .any(|marker| reason.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;

    #[test]
    fn test_blank_input_is_rejected_up_front() {
        let engine = PipelineEngine::new();
        assert!(matches!(engine.analyze("   \n"), Err(PipelineError::Input)));
        assert!(matches!(
            engine.refactor("", RefactorOptions::default()),
            Err(PipelineError::Input)
        ));
        assert!(matches!(
            engine.generate_tests("\t", false),
            Err(PipelineError::Input)
        ));
    }

    #[test]
    fn test_analyze_summary_matches_findings() {
        let engine = PipelineEngine::new();
        let report = engine
            .analyze("pragma solidity ^0.8.0;\nbytes32 h = sha256(data);")
            .unwrap();

        assert_eq!(report.language, Language::Solidity);
        assert!(report
            .vulnerabilities
            .iter()
            .any(|v| v.severity == Severity::High));
        assert!(!report.summary.quantum_ready);
        assert!(report.security_report.contains("Migration Priority"));
        assert!(!report.recommendations.is_empty());
    }

    #[test]
    fn test_refactor_counts_post_quantum_upgrades() {
        let engine = PipelineEngine::new();
        let report = engine
            .refactor(
                "pragma solidity ^0.8.0;\ncontract C { function f() public { sha256(x); } }",
                RefactorOptions::default(),
            )
            .unwrap();

        assert!(report.refactored_code.contains("sphincsHash(x)"));
        assert!(report.metadata.post_quantum_upgrades >= 1);
        assert!(report.test_results.is_none());
        assert!(report.test_suite.contains("forge-std/Test.sol"));
    }

    #[test]
    fn test_generate_tests_with_execution() {
        let engine = PipelineEngine::with_rng_seed(11);
        let report = engine
            .generate_tests("fn sign(msg: &[u8]) {}\nstruct Keys;", true)
            .unwrap();

        assert_eq!(report.language, Language::Rust);
        let suite = report.test_results.as_ref().unwrap();
        assert_eq!(suite.total_tests, report.metadata.test_count);
        assert!(report.test_report.as_ref().unwrap().contains("# Test Execution Report"));
    }

    #[test]
    fn test_generate_tests_without_execution_counts_names() {
        let engine = PipelineEngine::new();
        let report = engine.generate_tests("def encrypt(data):\n    pass", false).unwrap();

        assert!(report.test_results.is_none());
        assert!(report.test_report.is_none());
        assert!(report.metadata.test_count >= 2);
        assert_eq!(report.metadata.coverage, 0.0);
    }
}
