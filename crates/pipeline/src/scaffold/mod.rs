//! Synthetic test-suite scaffolding.
//!
//! Symbols are pulled out of the snippet with naming-convention regexes,
//! never a parser. Each language module renders one fixed template around
//! them: setup boilerplate, a functionality and an access-control block
//! per extracted function, a construction block per extracted type, and
//! conditional blocks gated on the capability flags below. A snippet with
//! no recognizable symbols still yields a well-formed placeholder suite.

pub mod python;
pub mod rust_lang;
pub mod solidity;

use once_cell::sync::Lazy;
use regex::Regex;

static SOLIDITY_CONTRACT: Lazy<Regex> = Lazy::new(|| Regex::new(r"contract\s+(\w+)").unwrap());
static SOLIDITY_FUNCTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"function\s+(\w+)\s*\(").unwrap());
static PYTHON_FUNCTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"def\s+(\w+)\s*\(").unwrap());
static PYTHON_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"class\s+(\w+)").unwrap());
static RUST_FUNCTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"fn\s+(\w+)\s*\(").unwrap());
static RUST_STRUCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"struct\s+(\w+)").unwrap());

const PQ_MARKERS: [&str; 6] = [
    "postquantumhash",
    "sphincs",
    "dilithium",
    "kyber",
    "pq_hash",
    "pqcrypto",
];

/// Substring capability flags steering the conditional template blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Capabilities {
    pub post_quantum: bool,
    pub reentrancy_guard: bool,
    pub uses_async: bool,
}

impl Capabilities {
    pub fn detect(code: &str) -> Self {
        let lowered = code.to_lowercase();
        Self {
            post_quantum: PQ_MARKERS.iter().any(|m| lowered.contains(m)),
            reentrancy_guard: code.contains("nonReentrant") || code.contains("ReentrancyGuard"),
            uses_async: lowered.contains("async ") || lowered.contains("await"),
        }
    }
}

/// Symbols extracted from one snippet. `container` is the contract name
/// for Solidity; the other languages leave it empty.
#[derive(Debug, Clone, Default)]
pub struct Symbols {
    pub container: Option<String>,
    pub functions: Vec<String>,
    pub types: Vec<String>,
}

fn capture_all(pattern: &Regex, code: &str) -> Vec<String> {
    let mut names = Vec::new();
    for caps in pattern.captures_iter(code) {
        let name = caps[1].to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

pub fn solidity_symbols(code: &str) -> Symbols {
    Symbols {
        container: SOLIDITY_CONTRACT
            .captures(code)
            .map(|c| c[1].to_string()),
        functions: capture_all(&SOLIDITY_FUNCTION, code),
        types: Vec::new(),
    }
}

pub fn python_symbols(code: &str) -> Symbols {
    Symbols {
        container: None,
        functions: capture_all(&PYTHON_FUNCTION, code),
        types: capture_all(&PYTHON_CLASS, code),
    }
}

pub fn rust_symbols(code: &str) -> Symbols {
    Symbols {
        container: None,
        functions: capture_all(&RUST_FUNCTION, code),
        types: capture_all(&RUST_STRUCT, code),
    }
}

/// Uppercases the first ASCII letter, for CamelCase test names.
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solidity_symbols_deduplicated() {
        let code = "contract Vault { function deposit() public {} function deposit() internal {} }";
        let symbols = solidity_symbols(code);
        assert_eq!(symbols.container.as_deref(), Some("Vault"));
        assert_eq!(symbols.functions, vec!["deposit"]);
    }

    #[test]
    fn test_capability_flags() {
        let caps = Capabilities::detect("uses sphincsHash and nonReentrant and async fn poll");
        assert!(caps.post_quantum);
        assert!(caps.reentrancy_guard);
        assert!(caps.uses_async);

        let none = Capabilities::detect("let x = 1;");
        assert!(!none.post_quantum && !none.reentrancy_guard && !none.uses_async);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("deposit"), "Deposit");
        assert_eq!(capitalize(""), "");
    }
}
