//! Human-readable report rendering.

pub mod execution;
pub mod security;

pub use execution::TestReportBuilder;
pub use security::{AnalysisSummary, SecurityReportBuilder};
