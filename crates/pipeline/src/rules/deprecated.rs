//! Deprecated and broken algorithm rules. All high severity.

use super::{MatchGuard, PatternRule};
use crate::core::{Severity, VulnerabilityKind};
use once_cell::sync::Lazy;
use regex::Regex;

static BROKEN_HASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)md5|sha1").unwrap());
static DEPRECATED_CIPHERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)rc4|des").unwrap());
static DEPRECATED_PROTOCOLS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)ssl|tls.*1\.[01]").unwrap());

const RECOMMENDATION: &str = "Replace with modern, quantum-resistant alternatives";

pub static DEPRECATED_RULES: [PatternRule; 3] = [
    PatternRule {
        pattern: &BROKEN_HASHES,
        kind: VulnerabilityKind::Deprecated,
        severity: Severity::High,
        description:
            "Deprecated cryptographic function detected: Cryptographically broken hash functions",
        recommendation: RECOMMENDATION,
        guard: None,
    },
    PatternRule {
        pattern: &DEPRECATED_CIPHERS,
        kind: VulnerabilityKind::Deprecated,
        severity: Severity::High,
        description:
            "Deprecated cryptographic function detected: Deprecated symmetric encryption algorithms",
        recommendation: RECOMMENDATION,
        // Plain DES only: triple-DES lines carry a "3" after the match.
        guard: Some(MatchGuard {
            matched: "des",
            absent_after: "3",
        }),
    },
    PatternRule {
        pattern: &DEPRECATED_PROTOCOLS,
        kind: VulnerabilityKind::Deprecated,
        severity: Severity::High,
        description: "Deprecated cryptographic function detected: Deprecated protocol versions",
        recommendation: RECOMMENDATION,
        // SSLv3 mentions are excluded from the bare-ssl alternative.
        guard: Some(MatchGuard {
            matched: "ssl",
            absent_after: "3",
        }),
    },
];
