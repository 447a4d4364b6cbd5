use serde::{Deserialize, Serialize};

/// One entry in the rewrite provenance ledger.
///
/// Structural edits log one Change per fired edit. Post-quantum
/// replacements log one Change per triggered rule with a canonical
/// before/after example, regardless of how many textual sites the rule
/// actually rewrote. The ledger can therefore understate the number of
/// literal edits; that is the documented contract, not a bug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Change {
    pub before: String,
    pub after: String,
    pub reason: String,
}

impl Change {
    pub fn new(
        before: impl Into<String>,
        after: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
            reason: reason.into(),
        }
    }
}

/// Output of a rewrite pass: the new code plus the ledger of what fired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefactorResult {
    pub code: String,
    pub changes: Vec<Change>,
}
