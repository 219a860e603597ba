use std::error::Error;

use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by the storage layer, classified so callers can tell expected
/// constraint failures apart from unexpected faults.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A uniqueness constraint rejected the write.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    /// A write referenced a row that does not exist.
    #[error("foreign key violated: {0}")]
    ForeignKeyViolation(String),
    /// The backend failed for any other reason.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// Short description of the failed operation.
        message: String,
        /// Underlying backend failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        if let sqlx::Error::Database(ref db_err) = err {
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    return StorageError::UniqueViolation(db_err.message().to_string());
                }
                ErrorKind::ForeignKeyViolation => {
                    return StorageError::ForeignKeyViolation(db_err.message().to_string());
                }
                _ => {}
            }
        }

        StorageError::unavailable("query failed".into(), err)
    }
}
