//! Synthetic test execution.
//!
//! No code is ever run. Test names are lifted from the suite text with the
//! language's naming-convention regex and each one gets independent random
//! draws for outcome, duration, and coverage from the language profile.

use crate::core::Language;
use crate::profile;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub test_name: String,
    pub status: TestStatus,
    pub duration_ms: f64,
    pub coverage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuite {
    pub name: String,
    pub language: Language,
    pub total_tests: usize,
    pub passed_tests: usize,
    pub failed_tests: usize,
    pub skipped_tests: usize,
    /// Rounded mean over the results, 0 when the suite is empty.
    pub coverage: f64,
    /// Rounded sum of per-test durations in milliseconds.
    pub duration: f64,
    pub results: Vec<TestResult>,
}

impl TestSuite {
    pub fn success_rate(&self) -> f64 {
        if self.total_tests == 0 {
            return 0.0;
        }
        self.passed_tests as f64 / self.total_tests as f64 * 100.0
    }
}

/// Simulates a run of a generated suite. Unseeded by default; tests that
/// need reproducible draws construct it with a fixed seed.
pub struct TestExecutionSimulator {
    seed: Option<u64>,
}

impl TestExecutionSimulator {
    pub fn new() -> Self {
        Self { seed: None }
    }

    pub fn with_rng_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn execute(&self, suite_text: &str, language: Language) -> TestSuite {
        match self.try_execute(suite_text, language) {
            Ok(suite) => suite,
            Err(err) => error_suite(language, &err.to_string()),
        }
    }

    fn try_execute(&self, suite_text: &str, language: Language) -> anyhow::Result<TestSuite> {
        let profile = profile::for_language(language);
        let params = &profile.simulation;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let names: Vec<String> = profile
            .test_name
            .captures_iter(suite_text)
            .map(|caps| caps[1].to_string())
            .collect();

        let mut results = Vec::with_capacity(names.len());
        for name in names {
            let passed = rng.random_bool(params.pass_probability);
            let duration_ms = rng.random_range(params.duration_ms.0..params.duration_ms.1);
            let coverage = rng.random_range(params.coverage.0..params.coverage.1);
            results.push(TestResult {
                status: if passed { TestStatus::Passed } else { TestStatus::Failed },
                duration_ms,
                coverage,
                error: if passed {
                    None
                } else {
                    Some((params.failure_message)(&name))
                },
                test_name: name,
            });
        }

        let suite = aggregate(language, results);
        debug!(
            language = %language,
            total = suite.total_tests,
            passed = suite.passed_tests,
            "simulated test run complete"
        );
        Ok(suite)
    }
}

impl Default for TestExecutionSimulator {
    fn default() -> Self {
        Self::new()
    }
}

fn aggregate(language: Language, results: Vec<TestResult>) -> TestSuite {
    let total = results.len();
    let passed = results.iter().filter(|r| r.status == TestStatus::Passed).count();
    let failed = results.iter().filter(|r| r.status == TestStatus::Failed).count();
    let skipped = results.iter().filter(|r| r.status == TestStatus::Skipped).count();
    let coverage = if total == 0 {
        0.0
    } else {
        (results.iter().map(|r| r.coverage).sum::<f64>() / total as f64).round()
    };
    let duration = results.iter().map(|r| r.duration_ms).sum::<f64>().round();

    TestSuite {
        name: language.display_name().to_string(),
        language,
        total_tests: total,
        passed_tests: passed,
        failed_tests: failed,
        skipped_tests: skipped,
        coverage,
        duration,
        results,
    }
}

fn error_suite(language: Language, message: &str) -> TestSuite {
    TestSuite {
        name: format!("{} Test Suite (Error)", language.display_name()),
        language,
        total_tests: 0,
        passed_tests: 0,
        failed_tests: 1,
        skipped_tests: 0,
        coverage: 0.0,
        duration: 0.0,
        results: vec![TestResult {
            test_name: "Test Execution".to_string(),
            status: TestStatus::Failed,
            duration_ms: 0.0,
            coverage: 0.0,
            error: Some(message.to_string()),
        }],
    }
}
