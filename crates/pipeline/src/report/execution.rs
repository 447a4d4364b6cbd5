//! Markdown report over a simulated test run.

use crate::exec::{TestStatus, TestSuite};
use std::fmt::Write;

pub struct TestReportBuilder;

impl TestReportBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, suite: &TestSuite) -> String {
        let success_rate = suite.success_rate();
        let mut report = String::new();

        let _ = writeln!(report, "# Test Execution Report\n");
        let _ = writeln!(report, "## {} Suite\n", suite.name);
        let _ = writeln!(report, "- **Total tests**: {}", suite.total_tests);
        let _ = writeln!(report, "- **Passed**: {}", suite.passed_tests);
        let _ = writeln!(report, "- **Failed**: {}", suite.failed_tests);
        let _ = writeln!(report, "- **Skipped**: {}", suite.skipped_tests);
        let _ = writeln!(report, "- **Success rate**: {success_rate:.1}%");
        let _ = writeln!(report, "- **Coverage**: {:.0}%", suite.coverage);
        let _ = writeln!(report, "- **Duration**: {:.0}ms", suite.duration);
        let _ = writeln!(report);

        if !suite.results.is_empty() {
            let _ = writeln!(report, "## Results\n");
            for result in &suite.results {
                let marker = match result.status {
                    TestStatus::Passed => "✅",
                    TestStatus::Failed => "❌",
                    TestStatus::Skipped => "⏭️",
                };
                let _ = writeln!(
                    report,
                    "- {} `{}` ({:.1}ms, {:.0}% coverage)",
                    marker, result.test_name, result.duration_ms, result.coverage
                );
                if let Some(error) = &result.error {
                    let _ = writeln!(report, "  - {error}");
                }
            }
            let _ = writeln!(report);
        }

        let _ = writeln!(report, "## Recommendations\n");
        if suite.failed_tests > 0 {
            let _ = writeln!(report, "- Fix the failing tests before deployment");
        }
        if suite.coverage < 80.0 {
            let _ = writeln!(report, "- Improve test coverage above 80%");
        }
        if success_rate < 95.0 {
            let _ = writeln!(report, "- Enhance test quality to reach a 95% success rate");
        }
        if suite.coverage >= 90.0 && success_rate >= 95.0 {
            let _ = writeln!(report, "- Excellent test health, keep it up");
        }
        let _ = writeln!(report);

        let has_quantum = suite
            .results
            .iter()
            .any(|r| r.test_name.to_lowercase().contains("quantum"));
        let has_security = suite
            .results
            .iter()
            .any(|r| r.test_name.to_lowercase().contains("security"));

        let _ = writeln!(report, "## Assessment\n");
        if has_quantum {
            let _ = writeln!(
                report,
                "- Post-quantum behavior is exercised by dedicated tests"
            );
        } else {
            let _ = writeln!(report, "- No tests target post-quantum behavior yet");
        }
        if has_security {
            let _ = writeln!(report, "- Security properties are exercised by dedicated tests");
        } else {
            let _ = writeln!(report, "- No tests target security properties yet");
        }

        report
    }
}

impl Default for TestReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}
