use serde::{Deserialize, Serialize};
use std::fmt;

/// Surface language of a code snippet.
///
/// Detection is heuristic and lexical. The check order is a fixed,
/// documented tie-break: Solidity markers win over Python markers, which
/// win over Rust markers, and a snippet matching nothing defaults to
/// Solidity. Code containing both `pragma solidity` and `fn ` therefore
/// resolves to Solidity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Solidity,
    Python,
    Rust,
}

impl Language {
    pub fn detect(code: &str) -> Self {
        if code.contains("pragma solidity")
            || code.contains("contract ")
            || (code.contains("function ") && code.contains("public"))
        {
            return Self::Solidity;
        }
        if code.contains("def ") || (code.contains("import ") && code.contains("from ")) {
            return Self::Python;
        }
        if code.contains("fn ") || code.contains("use ") || code.contains("struct ") {
            return Self::Rust;
        }
        Self::Solidity
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Solidity => "solidity",
            Self::Python => "python",
            Self::Rust => "rust",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Solidity => "Solidity",
            Self::Python => "Python",
            Self::Rust => "Rust",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
