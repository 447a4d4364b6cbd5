//! Stubbed post-quantum primitives.
//!
//! Nothing here is cryptography. `MockProvider` produces deterministic
//! tagged digests so rewritten snippets and scaffolds have something
//! stable to assert against; a real implementation can satisfy
//! `PostQuantumProvider` later without touching the scan or rewrite
//! stages.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// NIST security category of a post-quantum scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityLevel {
    Level1,
    Level3,
    Level5,
}

impl SecurityLevel {
    /// Classical bit strength the level is calibrated against.
    pub fn classical_bits(&self) -> u32 {
        match self {
            SecurityLevel::Level1 => 128,
            SecurityLevel::Level3 => 192,
            SecurityLevel::Level5 => 256,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encapsulation {
    pub ciphertext: Vec<u8>,
    pub shared_secret: Vec<u8>,
}

pub trait PostQuantumProvider {
    /// Tagged hex digest of `data`.
    fn hash(&self, data: &[u8]) -> String;
    fn sign(&self, message: &[u8], secret_key: &[u8]) -> Vec<u8>;
    fn verify(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> bool;
    fn encapsulate(&self, public_key: &[u8]) -> Encapsulation;
    fn secure_random(&self, len: usize) -> Vec<u8>;
    fn security_level(&self) -> SecurityLevel;
}

/// Deterministic stand-in provider. Signatures verify only against the
/// same key bytes they were produced with.
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }
}

fn fold(data: &[u8], seed: u64) -> u64 {
    // FNV-1a, good enough for a stable mock digest.
    let mut acc = seed ^ 0xcbf29ce484222325;
    for byte in data {
        acc ^= u64::from(*byte);
        acc = acc.wrapping_mul(0x100000001b3);
    }
    acc
}

impl PostQuantumProvider for MockProvider {
    fn hash(&self, data: &[u8]) -> String {
        format!("sphincs+:{:016x}", fold(data, 0))
    }

    fn sign(&self, message: &[u8], secret_key: &[u8]) -> Vec<u8> {
        let tag = fold(message, fold(secret_key, 1));
        let mut signature = b"dilithium:".to_vec();
        signature.extend_from_slice(&tag.to_be_bytes());
        signature
    }

    fn verify(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> bool {
        self.sign(message, public_key) == signature
    }

    fn encapsulate(&self, public_key: &[u8]) -> Encapsulation {
        let tag = fold(public_key, 2);
        Encapsulation {
            ciphertext: tag.to_be_bytes().to_vec(),
            shared_secret: tag.wrapping_mul(31).to_be_bytes().to_vec(),
        }
    }

    fn secure_random(&self, len: usize) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..len).map(|_| rng.random()).collect()
    }

    fn security_level(&self) -> SecurityLevel {
        SecurityLevel::Level3
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Recommended post-quantum scheme for a classical algorithm class.
pub fn recommend_algorithm(class: &str) -> &'static str {
    match class.to_lowercase().as_str() {
        "signature" => "CRYSTALS-Dilithium",
        "key_exchange" | "kem" => "CRYSTALS-Kyber",
        "hash" => "SPHINCS+",
        "symmetric" => "AES-256",
        _ => "SHAKE-256",
    }
}
