//! End-to-end pipeline behavior over realistic snippets.

use quantshield_pipeline::{
    Language, PipelineEngine, PipelineError, RefactorOptions, Severity, VulnerabilityKind,
};

const SOLIDITY_WALLET: &str = r#"pragma solidity ^0.8.0;

contract Wallet {
    function verify(bytes32 hash, uint8 v, bytes32 r, bytes32 s) public returns (address) {
        return ecrecover(hash, v, r, s);
    }

    function digest(bytes memory data) public returns (bytes32) {
        return sha256(data);
    }

    function lottery() public returns (uint256) {
        return uint256(block.timestamp);
    }
}
"#;

#[test]
fn test_analyze_orders_categories_and_severities() {
    let engine = PipelineEngine::new();
    let report = engine.analyze(SOLIDITY_WALLET).unwrap();

    assert_eq!(report.language, Language::Solidity);
    assert!(report.summary.total_issues > 0);

    // Category-major: the flat list is quantum, then deprecated, then flaws.
    let kind_rank = |kind: VulnerabilityKind| match kind {
        VulnerabilityKind::QuantumVulnerable | VulnerabilityKind::WeakParameters => 0,
        VulnerabilityKind::Deprecated => 1,
        VulnerabilityKind::ImplementationFlaw => 2,
    };
    assert!(report
        .vulnerabilities
        .windows(2)
        .all(|w| kind_rank(w[0].kind) <= kind_rank(w[1].kind)));

    // Each category slice runs severity-descending.
    for rank in 0..3 {
        let slice: Vec<_> = report
            .vulnerabilities
            .iter()
            .filter(|v| kind_rank(v.kind) == rank)
            .collect();
        assert!(slice.windows(2).all(|w| w[0].severity >= w[1].severity));
    }

    // block.timestamp is a critical flaw, so the summary cannot be ready.
    assert!(!report.summary.quantum_ready);
    assert_eq!(report.summary.risk_level, Severity::Critical);
}

#[test]
fn test_sha256_rewrite_contract() {
    let engine = PipelineEngine::new();
    let report = engine
        .refactor("sha256(data)", RefactorOptions::default())
        .unwrap();

    assert!(report.refactored_code.contains("sphincsHash(data)"));
    assert!(!report.refactored_code.contains("sha256("));
    let sphincs_changes: Vec<_> = report
        .changes
        .iter()
        .filter(|c| c.reason.contains("SPHINCS+"))
        .collect();
    assert_eq!(sphincs_changes.len(), 1);
}

#[test]
fn test_refactor_then_test_execution() {
    let engine = PipelineEngine::with_rng_seed(5);
    let report = engine
        .refactor(SOLIDITY_WALLET, RefactorOptions { execute_tests: true })
        .unwrap();

    assert!(report.refactored_code.contains("dilithiumVerify(hash, v, r, s)"));
    assert!(report.test_suite.contains("contract WalletTest is Test"));

    let suite = report.test_results.as_ref().unwrap();
    assert!(suite.total_tests > 0);
    assert_eq!(
        suite.passed_tests + suite.failed_tests + suite.skipped_tests,
        suite.total_tests
    );
    assert_eq!(suite.language, Language::Solidity);

    assert!(report.metadata.original_lines > 0);
    assert!(report.metadata.refactored_lines >= report.metadata.original_lines);
    assert!(report.metadata.post_quantum_upgrades >= 2);
}

#[test]
fn test_detector_precedence() {
    let engine = PipelineEngine::new();
    assert_eq!(engine.analyze("fn main() {}").unwrap().language, Language::Rust);
    assert_eq!(
        engine.analyze("pragma solidity ^0.8.0;").unwrap().language,
        Language::Solidity
    );
    assert_eq!(
        engine
            .analyze("pragma solidity ^0.8.0;\nfn main() {}")
            .unwrap()
            .language,
        Language::Solidity
    );
}

#[test]
fn test_blank_input_never_reaches_a_stage() {
    let engine = PipelineEngine::new();
    for blank in ["", "   ", "\n\t\n"] {
        assert!(matches!(engine.analyze(blank), Err(PipelineError::Input)));
    }
}

#[test]
fn test_rust_scaffold_execution_accounts_for_every_test() {
    let engine = PipelineEngine::with_rng_seed(3);
    let code = "struct Signer;\nfn sign(msg: &[u8]) {}\nfn verify(sig: &[u8]) {}";
    let report = engine.generate_tests(code, true).unwrap();

    assert_eq!(report.language, Language::Rust);
    let suite = report.test_results.as_ref().unwrap();
    // Two functions yield two blocks each, plus one per struct.
    assert_eq!(suite.total_tests, 5);
    assert_eq!(
        suite.passed_tests + suite.failed_tests + suite.skipped_tests,
        5
    );
}

#[test]
fn test_report_json_shape() {
    let engine = PipelineEngine::new();
    let report = engine.analyze("digest = hashlib.sha256(data)\ndef f():\n    pass").unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["language"], "python");
    assert!(json["securityReport"].is_string());
    assert!(json["summary"]["totalIssues"].is_number());
    let first = &json["vulnerabilities"][0];
    assert!(first["type"].is_string());
    assert!(first["location"]["line"].is_number());
}
