//! Stage B: post-quantum substitution tables.
//!
//! Each rule swaps a classical primitive for a post-quantum counterpart
//! across the whole snippet. The change ledger records one entry per rule
//! that fired, carrying a canonical before/after example rather than one
//! entry per occurrence. When any rule fires, the language's import block
//! is injected once so the substituted names resolve.

use crate::core::{Change, RefactorResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// One substitution: a pattern, its replacement text, and the ledger entry
/// to record when it fires.
pub struct ReplacementRule {
    pub pattern: &'static Lazy<Regex>,
    pub replacement: &'static str,
    pub example_before: &'static str,
    pub example_after: &'static str,
    pub reason: &'static str,
}

/// Import text injected once per rewritten snippet. `marker` is a line the
/// block contains; if the code already carries it the injection is skipped,
/// which keeps the rewrite idempotent. `anchor` is a prefix of the line the
/// block should follow (falls back to the top of the file).
pub struct ImportBlock {
    pub marker: &'static str,
    pub block: &'static str,
    pub anchor: Option<&'static str>,
}

static SOLIDITY_KECCAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"keccak256\s*\(").unwrap());
static SOLIDITY_ECRECOVER: Lazy<Regex> = Lazy::new(|| Regex::new(r"ecrecover\s*\(").unwrap());
static SOLIDITY_SHA256: Lazy<Regex> = Lazy::new(|| Regex::new(r"sha256\s*\(").unwrap());
static SOLIDITY_RIPEMD: Lazy<Regex> = Lazy::new(|| Regex::new(r"ripemd160\s*\(").unwrap());

pub static SOLIDITY_REPLACEMENTS: [ReplacementRule; 4] = [
    ReplacementRule {
        pattern: &SOLIDITY_KECCAK,
        replacement: "postQuantumHash(",
        example_before: "keccak256(abi.encodePacked(data))",
        example_after: "postQuantumHash(abi.encodePacked(data))",
        reason: "Replaced Keccak-256 with a quantum-resistant hash function",
    },
    ReplacementRule {
        pattern: &SOLIDITY_ECRECOVER,
        replacement: "dilithiumVerify(",
        example_before: "ecrecover(hash, v, r, s)",
        example_after: "dilithiumVerify(hash, v, r, s)",
        reason: "Replaced ECDSA signature recovery with Dilithium verification",
    },
    ReplacementRule {
        pattern: &SOLIDITY_SHA256,
        replacement: "sphincsHash(",
        example_before: "sha256(data)",
        example_after: "sphincsHash(data)",
        reason: "Replaced SHA-256 with SPHINCS+ post-quantum hash function",
    },
    ReplacementRule {
        pattern: &SOLIDITY_RIPEMD,
        replacement: "postQuantumRipemd(",
        example_before: "ripemd160(data)",
        example_after: "postQuantumRipemd(data)",
        reason: "Replaced RIPEMD-160 with a quantum-resistant hash function",
    },
];

pub static SOLIDITY_IMPORTS: ImportBlock = ImportBlock {
    marker: "import \"./PostQuantumCrypto.sol\";",
    block: "// Post-quantum primitive library\nimport \"./PostQuantumCrypto.sol\";\n",
    anchor: Some("pragma solidity"),
};

static PYTHON_HASHLIB_IMPORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"import hashlib").unwrap());
static PYTHON_SHA256_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"hashlib\.sha256\s*\(").unwrap());
static PYTHON_MD5_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"hashlib\.md5\s*\(").unwrap());
static PYTHON_EC_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"from cryptography\.hazmat\.primitives\.asymmetric import ec").unwrap());
static PYTHON_RSA_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"from cryptography\.hazmat\.primitives\.asymmetric import rsa").unwrap());
static PYTHON_FERNET_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"from cryptography\.fernet import Fernet").unwrap());

pub static PYTHON_REPLACEMENTS: [ReplacementRule; 6] = [
    ReplacementRule {
        pattern: &PYTHON_HASHLIB_IMPORT,
        replacement: "import pqcrypto.hash.sphincsplus as pq_hash",
        example_before: "import hashlib",
        example_after: "import pqcrypto.hash.sphincsplus as pq_hash",
        reason: "Replaced hashlib with the SPHINCS+ post-quantum hash module",
    },
    ReplacementRule {
        pattern: &PYTHON_SHA256_CALL,
        replacement: "pq_hash.hash(",
        example_before: "hashlib.sha256(data)",
        example_after: "pq_hash.hash(data)",
        reason: "Replaced SHA-256 with SPHINCS+ post-quantum hash function",
    },
    ReplacementRule {
        pattern: &PYTHON_MD5_CALL,
        replacement: "pq_hash.hash(",
        example_before: "hashlib.md5(data)",
        example_after: "pq_hash.hash(data)",
        reason: "Replaced broken MD5 with a quantum-resistant hash function",
    },
    ReplacementRule {
        pattern: &PYTHON_EC_IMPORT,
        replacement: "import pqcrypto.sign.dilithium2 as dilithium",
        example_before: "from cryptography.hazmat.primitives.asymmetric import ec",
        example_after: "import pqcrypto.sign.dilithium2 as dilithium",
        reason: "Replaced elliptic curve signatures with Dilithium",
    },
    ReplacementRule {
        pattern: &PYTHON_RSA_IMPORT,
        replacement: "import pqcrypto.kem.kyber512 as kyber",
        example_before: "from cryptography.hazmat.primitives.asymmetric import rsa",
        example_after: "import pqcrypto.kem.kyber512 as kyber",
        reason: "Replaced RSA with the Kyber key encapsulation mechanism",
    },
    ReplacementRule {
        pattern: &PYTHON_FERNET_IMPORT,
        replacement: "from pqcrypto.cipher import aes256_pq",
        example_before: "from cryptography.fernet import Fernet",
        example_after: "from pqcrypto.cipher import aes256_pq",
        reason: "Replaced Fernet with AES-256 wrapped in a post-quantum KEM",
    },
];

pub static PYTHON_IMPORTS: ImportBlock = ImportBlock {
    marker: "import pqcrypto.hash.sphincsplus as pq_hash",
    block: "# Post-quantum primitive library\nimport pqcrypto.hash.sphincsplus as pq_hash\n",
    anchor: None,
};

static RUST_SHA2_USE: Lazy<Regex> = Lazy::new(|| Regex::new(r"use sha2::").unwrap());
static RUST_SECP_USE: Lazy<Regex> = Lazy::new(|| Regex::new(r"use secp256k1::").unwrap());
static RUST_AES_USE: Lazy<Regex> = Lazy::new(|| Regex::new(r"use aes::").unwrap());
static RUST_RING_USE: Lazy<Regex> = Lazy::new(|| Regex::new(r"use ring::").unwrap());

pub static RUST_REPLACEMENTS: [ReplacementRule; 4] = [
    ReplacementRule {
        pattern: &RUST_SHA2_USE,
        replacement: "use pqcrypto_sphincsplus::sphincsplus128frobust::",
        example_before: "use sha2::Sha256;",
        example_after: "use pqcrypto_sphincsplus::sphincsplus128frobust::Sha256;",
        reason: "Replaced SHA-2 with SPHINCS+ post-quantum hash primitives",
    },
    ReplacementRule {
        pattern: &RUST_SECP_USE,
        replacement: "use pqcrypto_dilithium::dilithium2::",
        example_before: "use secp256k1::Secp256k1;",
        example_after: "use pqcrypto_dilithium::dilithium2::Secp256k1;",
        reason: "Replaced secp256k1 signatures with Dilithium",
    },
    ReplacementRule {
        pattern: &RUST_AES_USE,
        replacement: "use pqcrypto_kyber::kyber512::",
        example_before: "use aes::Aes128;",
        example_after: "use pqcrypto_kyber::kyber512::Aes128;",
        reason: "Replaced bare AES key setup with Kyber key encapsulation",
    },
    ReplacementRule {
        pattern: &RUST_RING_USE,
        replacement: "use pqcrypto::prelude::",
        example_before: "use ring::digest;",
        example_after: "use pqcrypto::prelude::digest;",
        reason: "Replaced ring primitives with the pqcrypto prelude",
    },
];

pub static RUST_IMPORTS: ImportBlock = ImportBlock {
    marker: "use pqcrypto_traits::sign::PublicKey as _;",
    block: "// Post-quantum primitive library\nuse pqcrypto_traits::sign::PublicKey as _;\n",
    anchor: None,
};

/// Runs every rule in the table over `code`, recording one ledger entry
/// per rule that fired, then injects the import block when anything did.
pub fn apply(code: &str, rules: &[ReplacementRule], imports: &ImportBlock) -> RefactorResult {
    let mut rewritten = code.to_string();
    let mut changes = Vec::new();

    for rule in rules {
        if rule.pattern.is_match(&rewritten) {
            rewritten = rule.pattern.replace_all(&rewritten, rule.replacement).into_owned();
            changes.push(Change::new(rule.example_before, rule.example_after, rule.reason));
        }
    }

    if !changes.is_empty() && !rewritten.contains(imports.marker) {
        rewritten = inject_imports(&rewritten, imports);
        changes.push(Change::new(
            "no post-quantum imports",
            "post-quantum library import block",
            "Added the library imports the substituted primitives resolve against",
        ));
    }

    RefactorResult {
        code: rewritten,
        changes,
    }
}

fn inject_imports(code: &str, imports: &ImportBlock) -> String {
    if let Some(anchor) = imports.anchor {
        if let Some(line) = code.lines().find(|l| l.trim_start().starts_with(anchor)) {
            let line_start = line.as_ptr() as usize - code.as_ptr() as usize;
            let line_end = line_start + line.len();
            let after = code[line_end..].strip_prefix('\n').map(|_| line_end + 1).unwrap_or(line_end);
            let mut out = String::with_capacity(code.len() + imports.block.len());
            out.push_str(&code[..after]);
            if !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(imports.block);
            out.push_str(&code[after..]);
            return out;
        }
    }
    format!("{}{}", imports.block, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_change_per_rule_not_per_occurrence() {
        let code = "bytes32 a = sha256(x);\nbytes32 b = sha256(y);";
        let result = apply(code, &SOLIDITY_REPLACEMENTS, &SOLIDITY_IMPORTS);

        assert!(result.code.contains("sphincsHash(x)"));
        assert!(result.code.contains("sphincsHash(y)"));
        // One entry for the rule, one for the import injection.
        assert_eq!(result.changes.len(), 2);
        let sphincs: Vec<_> = result
            .changes
            .iter()
            .filter(|c| c.reason.contains("SPHINCS+"))
            .collect();
        assert_eq!(sphincs.len(), 1);
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let code = "sha256(data)";
        let first = apply(code, &SOLIDITY_REPLACEMENTS, &SOLIDITY_IMPORTS);
        let second = apply(&first.code, &SOLIDITY_REPLACEMENTS, &SOLIDITY_IMPORTS);

        assert_eq!(first.code, second.code);
        assert!(second.changes.is_empty());
    }

    #[test]
    fn test_imports_injected_after_pragma() {
        let code = "pragma solidity ^0.8.0;\ncontract C { function f() public { keccak256(x); } }";
        let result = apply(code, &SOLIDITY_REPLACEMENTS, &SOLIDITY_IMPORTS);
        let pragma_pos = result.code.find("pragma solidity").unwrap();
        let import_pos = result.code.find("PostQuantumCrypto.sol").unwrap();
        assert!(pragma_pos < import_pos);
        assert!(result.code.contains("postQuantumHash(x)"));
    }

    #[test]
    fn test_python_import_swap_satisfies_marker() {
        let code = "import hashlib\ndigest = hashlib.sha256(data)";
        let result = apply(code, &PYTHON_REPLACEMENTS, &PYTHON_IMPORTS);

        assert!(result.code.contains("import pqcrypto.hash.sphincsplus as pq_hash"));
        assert!(result.code.contains("pq_hash.hash(data)"));
        // The rewritten import already carries the marker line.
        assert_eq!(
            result.code.matches("import pqcrypto.hash.sphincsplus").count(),
            1
        );
    }

    #[test]
    fn test_rust_use_swap() {
        let code = "use sha2::{Digest, Sha256};\nuse ring::digest;";
        let result = apply(code, &RUST_REPLACEMENTS, &RUST_IMPORTS);

        assert!(result
            .code
            .contains("use pqcrypto_sphincsplus::sphincsplus128frobust::{Digest, Sha256};"));
        assert!(result.code.contains("use pqcrypto::prelude::digest;"));
        assert!(result.code.starts_with("// Post-quantum primitive library"));
    }

    #[test]
    fn test_untouched_code_reports_no_changes() {
        let result = apply("let x = 1;", &RUST_REPLACEMENTS, &RUST_IMPORTS);
        assert_eq!(result.code, "let x = 1;");
        assert!(result.changes.is_empty());
    }
}
