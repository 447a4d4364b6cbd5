//! Markdown security report and machine-readable analysis summary.

use crate::core::{Severity, Vulnerability, VulnerabilityKind};
use crate::scanner::SeverityCount;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub total_issues: usize,
    pub critical_count: usize,
    pub high_count: usize,
    pub medium_count: usize,
    pub low_count: usize,
    pub quantum_vulnerable: usize,
    pub deprecated: usize,
    pub implementation_flaws: usize,
    pub quantum_ready: bool,
    pub risk_level: Severity,
}

impl AnalysisSummary {
    pub fn from_vulnerabilities(vulnerabilities: &[Vulnerability]) -> Self {
        let severities = SeverityCount::tally(vulnerabilities);
        let mut quantum = 0;
        let mut deprecated = 0;
        let mut flaws = 0;
        for vuln in vulnerabilities {
            match vuln.kind {
                VulnerabilityKind::QuantumVulnerable | VulnerabilityKind::WeakParameters => {
                    quantum += 1
                }
                VulnerabilityKind::Deprecated => deprecated += 1,
                VulnerabilityKind::ImplementationFlaw => flaws += 1,
            }
        }

        let risk_level = if severities.critical > 0 {
            Severity::Critical
        } else if severities.high > 0 {
            Severity::High
        } else if severities.medium > 0 {
            Severity::Medium
        } else {
            Severity::Low
        };

        Self {
            total_issues: vulnerabilities.len(),
            critical_count: severities.critical,
            high_count: severities.high,
            medium_count: severities.medium,
            low_count: severities.low,
            quantum_vulnerable: quantum,
            deprecated,
            implementation_flaws: flaws,
            quantum_ready: severities.critical == 0 && severities.high == 0,
            risk_level,
        }
    }

    pub fn recommendations(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.quantum_vulnerable > 0 {
            out.push(
                "Begin migration to post-quantum algorithms (Dilithium, Kyber, SPHINCS+)"
                    .to_string(),
            );
        }
        if self.deprecated > 0 {
            out.push("Remove deprecated cryptographic functions immediately".to_string());
        }
        if self.implementation_flaws > 0 {
            out.push("Address implementation flaws before deployment".to_string());
        }
        if self.quantum_ready {
            out.push("Codebase shows good quantum readiness".to_string());
        }
        out
    }
}

pub struct SecurityReportBuilder;

impl SecurityReportBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, vulnerabilities: &[Vulnerability]) -> String {
        let summary = AnalysisSummary::from_vulnerabilities(vulnerabilities);
        let mut report = String::new();

        let _ = writeln!(report, "# Quantum Security Analysis Report\n");
        let _ = writeln!(report, "## Summary\n");
        let _ = writeln!(report, "- **Total issues**: {}", summary.total_issues);
        let _ = writeln!(report, "- **Critical**: {}", summary.critical_count);
        let _ = writeln!(report, "- **High**: {}", summary.high_count);
        let _ = writeln!(report, "- **Medium**: {}", summary.medium_count);
        let _ = writeln!(report, "- **Low**: {}", summary.low_count);
        let _ = writeln!(report);

        if summary.quantum_ready {
            let _ = writeln!(
                report,
                "✅ **Quantum readiness**: no critical or high severity findings.\n"
            );
        } else {
            let _ = writeln!(
                report,
                "⚠️ **Quantum readiness**: critical or high severity findings require migration.\n"
            );
        }

        let _ = writeln!(report, "## Migration Priority\n");
        let _ = writeln!(
            report,
            "1. Replace ECDSA signatures with Dilithium or Falcon"
        );
        let _ = writeln!(
            report,
            "2. Replace RSA/DH key exchange with Kyber key encapsulation"
        );
        let _ = writeln!(
            report,
            "3. Replace vulnerable hash functions with SPHINCS+ or SHAKE-256"
        );
        let _ = writeln!(report, "4. Upgrade symmetric keys to 256-bit strength");
        let _ = writeln!(report);

        if !vulnerabilities.is_empty() {
            let _ = writeln!(report, "## Findings\n");
            for vuln in vulnerabilities {
                let _ = writeln!(
                    report,
                    "### {} {} [{}]\n",
                    vuln.severity.emoji(),
                    vuln.kind.label(),
                    vuln.severity
                );
                let _ = writeln!(
                    report,
                    "- **Location**: line {}, column {}",
                    vuln.location.line, vuln.location.column
                );
                let _ = writeln!(report, "- **Issue**: {}", vuln.description);
                let _ = writeln!(report, "- **Recommendation**: {}", vuln.recommendation);
                let _ = writeln!(report);
            }
        }

        report
    }
}

impl Default for SecurityReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Location, Severity, Vulnerability, VulnerabilityKind};

    fn vuln(kind: VulnerabilityKind, severity: Severity) -> Vulnerability {
        Vulnerability::new(kind, severity, "desc", "rec", Location::new(1, 1))
    }

    #[test]
    fn test_quantum_ready_requires_no_critical_or_high() {
        let clean = AnalysisSummary::from_vulnerabilities(&[vuln(
            VulnerabilityKind::QuantumVulnerable,
            Severity::Medium,
        )]);
        assert!(clean.quantum_ready);
        assert_eq!(clean.risk_level, Severity::Medium);

        let risky = AnalysisSummary::from_vulnerabilities(&[vuln(
            VulnerabilityKind::Deprecated,
            Severity::High,
        )]);
        assert!(!risky.quantum_ready);
        assert_eq!(risky.risk_level, Severity::High);
    }

    #[test]
    fn test_risk_level_ladder_prefers_critical() {
        let summary = AnalysisSummary::from_vulnerabilities(&[
            vuln(VulnerabilityKind::ImplementationFlaw, Severity::Medium),
            vuln(VulnerabilityKind::QuantumVulnerable, Severity::Critical),
        ]);
        assert_eq!(summary.risk_level, Severity::Critical);
    }

    #[test]
    fn test_migration_priority_always_present() {
        let report = SecurityReportBuilder::new().generate(&[]);
        assert!(report.contains("## Migration Priority"));
        assert!(report.contains("1. Replace ECDSA signatures"));
        assert!(!report.contains("## Findings"));
    }

    #[test]
    fn test_findings_rendered_in_input_order() {
        let vulns = vec![
            vuln(VulnerabilityKind::Deprecated, Severity::High),
            vuln(VulnerabilityKind::QuantumVulnerable, Severity::Critical),
        ];
        let report = SecurityReportBuilder::new().generate(&vulns);
        let deprecated = report.find("DEPRECATED").unwrap();
        let quantum = report.find("QUANTUM VULNERABLE").unwrap();
        assert!(deprecated < quantum);
    }

    #[test]
    fn test_recommendations_are_conditional() {
        let summary = AnalysisSummary::from_vulnerabilities(&[vuln(
            VulnerabilityKind::Deprecated,
            Severity::High,
        )]);
        let recs = summary.recommendations();
        assert!(recs.iter().any(|r| r.contains("deprecated")));
        assert!(!recs.iter().any(|r| r.contains("quantum readiness")));
    }
}
