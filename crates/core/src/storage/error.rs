use thiserror::Error;

/// Errors that can occur during repository operations.
///
/// "Record absent" on a plain lookup is not an error — gets return
/// `Ok(None)`. `NotFound` is raised only when an operation requires the
/// record to exist (update/delete on a missing id, create against a missing
/// owner).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity} not found with ID: {id}")]
    NotFound { entity: &'static str, id: i64 },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
