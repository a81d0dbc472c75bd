use thiserror::Error;

/// Error type that captures engine input and calendar failures.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Date construction failed: {0}")]
    DateConstruction(String),
}
