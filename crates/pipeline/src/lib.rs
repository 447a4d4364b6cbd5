//! QuantShield pipeline library.
//!
//! Detects quantum-vulnerable cryptography in Solidity, Python, and Rust
//! snippets, rewrites it toward post-quantum equivalents, scaffolds a
//! matching test suite, and simulates its execution. Everything is
//! lexical: pattern tables over lines of text, never a parser, and the
//! rewritten output is a migration draft rather than guaranteed-valid
//! code.
//!
//! The pipeline is exposed through [`PipelineEngine`]:
//!
//! ```
//! use quantshield_pipeline::{PipelineEngine, RefactorOptions};
//!
//! let engine = PipelineEngine::new();
//! let report = engine.analyze("bytes32 h = sha256(data);").unwrap();
//! assert!(!report.summary.quantum_ready);
//!
//! let rewritten = engine.refactor("sha256(data)", RefactorOptions::default()).unwrap();
//! assert!(rewritten.refactored_code.contains("sphincsHash(data)"));
//! ```

pub mod core;
pub mod engine;
pub mod exec;
pub mod primitives;
pub mod profile;
pub mod report;
pub mod rewrite;
pub mod rules;
pub mod scaffold;
pub mod scanner;

pub use crate::core::{
    Change, Language, Location, PipelineError, RefactorResult, Result, Severity, Vulnerability,
    VulnerabilityKind,
};
pub use engine::{
    AnalysisReport, PipelineEngine, RefactorOptions, RefactorReport, TestGenReport,
};
pub use exec::{TestExecutionSimulator, TestResult, TestStatus, TestSuite};
pub use report::{AnalysisSummary, SecurityReportBuilder, TestReportBuilder};
pub use rewrite::RewriteEngine;
pub use scanner::VulnerabilityScanner;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
