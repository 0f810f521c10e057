//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted while setting up a `QuizSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("a tokio runtime is required to drive the countdown")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}
