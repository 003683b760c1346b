//! Engine error taxonomy

use thiserror::Error;

/// Errors produced inside the calculation pipeline.
///
/// These never reach the caller of [`crate::engine::calculate`]; the
/// orchestrator converts them into a failed result. They are exposed for
/// callers that invoke the pipeline stages directly.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// Hard validation failures; the pipeline never ran
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),

    /// Unexpected fault inside the calculation pipeline
    #[error("{0}")]
    Computation(String),
}
