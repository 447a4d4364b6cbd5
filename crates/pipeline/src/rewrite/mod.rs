//! Two-stage source rewriter.
//!
//! Stage A applies structural refactors (visibility, type hints, error
//! types); Stage B substitutes classical primitives for post-quantum
//! counterparts and injects the matching import block. The combined change
//! ledger lists Stage A entries first.

pub mod refactor;
pub mod replace;

use crate::core::{Language, RefactorResult};
use crate::profile;
use tracing::debug;

pub struct RewriteEngine;

impl RewriteEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn rewrite(&self, code: &str, language: Language) -> RefactorResult {
        let profile = profile::for_language(language);

        let structural = (profile.refactor)(code);
        let substituted = replace::apply(&structural.code, profile.replacements, profile.imports);

        let mut changes = structural.changes;
        changes.extend(substituted.changes);

        debug!(
            language = %language,
            changes = changes.len(),
            "rewrite complete"
        );
        RefactorResult {
            code: substituted.code,
            changes,
        }
    }
}

impl Default for RewriteEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_a_entries_precede_stage_b() {
        let engine = RewriteEngine::new();
        let code = "contract V {\n    function f(bytes32 h) {\n        return sha256(h);\n    }\n}";
        let result = engine.rewrite(code, Language::Solidity);

        let visibility = result
            .changes
            .iter()
            .position(|c| c.reason.contains("visibility"))
            .unwrap();
        let substitution = result
            .changes
            .iter()
            .position(|c| c.reason.contains("SPHINCS+"))
            .unwrap();
        assert!(visibility < substitution);
        assert!(result.code.contains("sphincsHash(h)"));
    }

    #[test]
    fn test_clean_code_passes_through() {
        let engine = RewriteEngine::new();
        let code = "# tooling note\nx = 1\n";
        let result = engine.rewrite(code, Language::Python);
        assert!(result.changes.is_empty());
        assert_eq!(result.code, code);
    }
}
