//! Quantum-vulnerable algorithm rules.
//!
//! Declaration order is the scan order and runs severity-descending:
//! signatures and key exchange (broken outright by Shor's algorithm) are
//! critical, hashes (weakened by Grover's algorithm) high, and symmetric
//! ciphers with short keys medium.

use super::{MatchGuard, PatternRule};
use crate::core::{Severity, VulnerabilityKind};
use once_cell::sync::Lazy;
use regex::Regex;

static SIGNATURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)ecrecover|ecdsa|secp256k1").unwrap());
static KEY_EXCHANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)rsa|dh|ecdh").unwrap());
static HASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)keccak256|sha256|sha3").unwrap());
static SYMMETRIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)aes|des|3des").unwrap());

pub static QUANTUM_RULES: [PatternRule; 4] = [
    PatternRule {
        pattern: &SIGNATURE,
        kind: VulnerabilityKind::QuantumVulnerable,
        severity: Severity::Critical,
        description: "SIGNATURE algorithm detected: Shor's algorithm breaks ECDSA",
        recommendation: "Migrate to Dilithium or Falcon post-quantum signature schemes",
        guard: None,
    },
    PatternRule {
        pattern: &KEY_EXCHANGE,
        kind: VulnerabilityKind::QuantumVulnerable,
        severity: Severity::Critical,
        description: "KEY_EXCHANGE algorithm detected: Shor's algorithm breaks RSA/DH",
        recommendation: "Implement Kyber key encapsulation mechanism for quantum-safe key exchange",
        guard: None,
    },
    PatternRule {
        pattern: &HASH,
        kind: VulnerabilityKind::QuantumVulnerable,
        severity: Severity::High,
        description: "HASH algorithm detected: Grover's algorithm reduces security",
        recommendation: "Replace with SPHINCS+ hash functions or SHAKE-256 for quantum resistance",
        guard: None,
    },
    PatternRule {
        pattern: &SYMMETRIC,
        kind: VulnerabilityKind::QuantumVulnerable,
        severity: Severity::Medium,
        description: "SYMMETRIC algorithm detected: Insufficient key length for quantum era",
        recommendation: "Use AES-256 with post-quantum key derivation functions",
        guard: Some(MatchGuard {
            matched: "aes",
            absent_after: "256",
        }),
    },
];
