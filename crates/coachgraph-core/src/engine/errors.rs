//! Error types for coaching graph operations.

use thiserror::Error;

/// Errors that can occur while building, loading, or infecting a coaching graph.
///
/// Infeasible infection targets are not errors; they are reported through
/// [`InfectionOutcome::Infeasible`](crate::engine::infection::InfectionOutcome).
/// This enum covers genuine precondition violations and I/O failures.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in the future without breaking changes.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ExecError {
    /// A user id was referenced that is not present in the graph.
    #[error("unknown user '{0}'")]
    UnknownUser(String),

    /// A caller-supplied argument is out of range or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading, writing, or (de)serializing a graph record failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// Internal error (programmer error, not user error).
    #[error("internal error: {0}")]
    Internal(String),
}
