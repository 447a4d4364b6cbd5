//! Core value objects shared by every pipeline stage.
//!
//! Everything here is an ephemeral value computed fresh per call: findings,
//! change ledgers, locations, language tags. Stages own what they create
//! and hand it downstream by value; nothing is persisted or mutated after
//! creation.

pub mod change;
pub mod error;
pub mod finding;
pub mod language;
pub mod severity;

pub use change::{Change, RefactorResult};
pub use error::{PipelineError, Result};
pub use finding::{Location, Vulnerability};
pub use language::Language;
pub use severity::{Severity, VulnerabilityKind};
