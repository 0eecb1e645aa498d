use thiserror::Error;

/// Receives the result of a use case. Presenters implement this.
pub trait OutputBoundary<T>: Send + Sync {
    fn execute(&mut self, output: T) -> Result<(), OutputError>;
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Invalid output state: {0}")]
    InvalidStateError(String),
}
