use crate::core::{Severity, VulnerabilityKind};
use serde::{Deserialize, Serialize};

/// Position of a match inside the scanned snippet. Lines and columns are
/// 1-based; the column is a byte offset within the line, multi-byte
/// characters are not decoded specially.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// One rule match produced by the vulnerability scanner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vulnerability {
    #[serde(rename = "type")]
    pub kind: VulnerabilityKind,

    pub severity: Severity,

    pub description: String,

    pub recommendation: String,

    pub location: Location,
}

impl Vulnerability {
    pub fn new(
        kind: VulnerabilityKind,
        severity: Severity,
        description: impl Into<String>,
        recommendation: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            kind,
            severity,
            description: description.into(),
            recommendation: recommendation.into(),
            location,
        }
    }
}
