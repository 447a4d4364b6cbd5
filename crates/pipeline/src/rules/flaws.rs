//! Per-language implementation-flaw rules.
//!
//! Unlike the algorithm rules these are whole-line predicates, so a match
//! is reported at column 1. Each language bundle is declared in
//! severity-descending order.

use crate::core::Severity;
use once_cell::sync::Lazy;
use regex::Regex;

/// One implementation-flaw check: a predicate over a single source line.
pub struct FlawRule {
    pub severity: Severity,
    pub description: &'static str,
    pub recommendation: &'static str,
    pub applies: fn(&str) -> bool,
}

static CRYPTO_CONTEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)crypto|hash|sign").unwrap());
static CRYPTO_FUNCTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)keccak|sha|sign").unwrap());
static HARDCODED_SECRET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)(secret|key|password)\w*\s*=\s*["'][^"']+["']"#).unwrap());

pub static SOLIDITY_FLAWS: [FlawRule; 2] = [
    FlawRule {
        severity: Severity::Critical,
        description: "Weak randomness source detected - blockchain parameters are predictable",
        recommendation:
            "Use commit-reveal schemes or oracle-based randomness with post-quantum signatures",
        applies: |line| line.contains("block.timestamp") || line.contains("block.difficulty"),
    },
    FlawRule {
        severity: Severity::Medium,
        description: "Public cryptographic function without access controls",
        recommendation: "Add proper access modifiers and consider post-quantum alternatives",
        applies: |line| {
            line.contains("function") && line.contains("public") && CRYPTO_FUNCTION.is_match(line)
        },
    },
];

pub static PYTHON_FLAWS: [FlawRule; 2] = [
    FlawRule {
        severity: Severity::Critical,
        description: "Hardcoded cryptographic secret detected",
        recommendation: "Use environment variables or secure key management systems",
        applies: |line| HARDCODED_SECRET.is_match(line),
    },
    FlawRule {
        severity: Severity::High,
        description: "Weak random number generator for cryptographic use",
        recommendation: "Use secrets module or post-quantum secure random number generation",
        applies: |line| line.contains("random.random()") || line.contains("random.randint"),
    },
];

pub static RUST_FLAWS: [FlawRule; 2] = [
    FlawRule {
        severity: Severity::High,
        description: "Unsafe block in cryptographic code",
        recommendation:
            "Avoid unsafe operations in cryptographic contexts, use safe post-quantum libraries",
        applies: |line| line.contains("unsafe") && CRYPTO_CONTEXT.is_match(line),
    },
    FlawRule {
        severity: Severity::Medium,
        description: "Panic-prone error handling in cryptographic code",
        recommendation: "Use proper error handling with Result types for cryptographic operations",
        applies: |line| line.contains(".unwrap()") && CRYPTO_CONTEXT.is_match(line),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weak_randomness_is_critical() {
        let rule = &SOLIDITY_FLAWS[0];
        assert!((rule.applies)("uint256 seed = uint256(block.timestamp);"));
        assert_eq!(rule.severity, Severity::Critical);
    }

    #[test]
    fn test_hardcoded_secret_detected() {
        let rule = &PYTHON_FLAWS[0];
        assert!((rule.applies)(r#"api_key = "sk-123456""#));
        assert!(!(rule.applies)("api_key = os.environ['KEY']"));
    }

    #[test]
    fn test_unwrap_near_crypto_only() {
        let rule = &RUST_FLAWS[1];
        assert!((rule.applies)("let digest = hash(data).unwrap();"));
        assert!(!(rule.applies)("let n = parse(input).unwrap();"));
    }
}
