use thiserror::Error;

/// Failure taxonomy for the pipeline's three public operations.
///
/// `Input` is signaled before any stage runs. `Internal` propagates an
/// unexpected stage failure with no partial results. Simulated test
/// execution never surfaces here: the simulator converts its own failures
/// into a degenerate failed `TestSuite` instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("code is required and must be non-empty text")]
    Input,

    #[error("internal pipeline failure: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
