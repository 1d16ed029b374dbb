//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError`
//! from `stockroom_core::storage`.

use stockroom_core::storage::RepositoryError;

fn connection_failure(err: &rusqlite::Error) -> Option<RepositoryError> {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            Some(RepositoryError::ConnectionFailed(format!(
                "Cannot open database: {err}"
            )))
        }
        _ => None,
    }
}

/// Maps a rusqlite error with a known entity and id to a RepositoryError.
///
/// `QueryReturnedNoRows` becomes `NotFound` (the repository raises it when a
/// mutating statement affects zero rows); connection failures map to
/// `ConnectionFailed`; everything else is a `QueryFailed` storage fault.
fn map_rusqlite_error(err: &rusqlite::Error, entity: &'static str, id: i64) -> RepositoryError {
    match err {
        rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound { entity, id },
        _ => connection_failure(err).unwrap_or_else(|| RepositoryError::QueryFailed(err.to_string())),
    }
}

/// Maps a tokio_rusqlite error with a known entity and id to a
/// RepositoryError.
///
/// This is the entry point for operations addressed at an existing row,
/// where zero rows affected means the row does not exist. It extracts the
/// inner `rusqlite::Error` if present, otherwise maps to a generic failure.
pub fn map_tokio_rusqlite_error_with_id(
    err: tokio_rusqlite::Error,
    entity: &'static str,
    id: i64,
) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity, id)
        }
        tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError when no row id applies.
///
/// Insert paths use this: the record has no id yet, so nothing can map to
/// `NotFound`. Connection failures still map to `ConnectionFailed`;
/// everything else is a `QueryFailed` storage fault.
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => connection_failure(rusqlite_err)
            .unwrap_or_else(|| RepositoryError::QueryFailed(rusqlite_err.to_string())),
        tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rows_maps_to_not_found_with_id() {
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows);

        let result = map_tokio_rusqlite_error_with_id(err, "User", 42);

        assert_eq!(
            result,
            RepositoryError::NotFound {
                entity: "User",
                id: 42
            }
        );
        assert_eq!(result.to_string(), "User not found with ID: 42");
    }

    #[test]
    fn test_cannot_open_maps_to_connection_failed() {
        let sqlite_err = rusqlite::ffi::Error {
            code: rusqlite::ErrorCode::CannotOpen,
            extended_code: rusqlite::ffi::SQLITE_CANTOPEN,
        };
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None));

        let result = map_tokio_rusqlite_error_with_id(err, "User", 1);

        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_other_errors_map_to_query_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("test error")));

        let result = map_tokio_rusqlite_error_with_id(err, "Item", 1);

        assert!(matches!(result, RepositoryError::QueryFailed(_)));
    }

    #[test]
    fn test_idless_mapping_never_produces_not_found() {
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows);

        let result = map_tokio_rusqlite_error(err);

        assert!(matches!(result, RepositoryError::QueryFailed(_)));
        assert!(!result.to_string().contains("ID"));
    }

    #[test]
    fn test_idless_mapping_keeps_connection_failures() {
        let sqlite_err = rusqlite::ffi::Error {
            code: rusqlite::ErrorCode::CannotOpen,
            extended_code: rusqlite::ffi::SQLITE_CANTOPEN,
        };
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None));

        let result = map_tokio_rusqlite_error(err);

        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }
}
