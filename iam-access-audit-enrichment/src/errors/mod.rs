//! Error handling module

use std::path::PathBuf;
use thiserror::Error;

use crate::aws::AwsError;

/// Result type alias for operations that can fail with `AuditError`
pub(crate) type Result<T> = std::result::Result<T, AuditError>;

/// Error type for the enrichment pipeline.
///
/// Covers the failure classes of a run: file system errors on the input or
/// output file, schema errors in the input header, and AWS lookup failures.
#[derive(Error, Debug)]
pub enum AuditError {
    /// File system operation errors with detailed context
    #[error("File system error during {operation} on path '{path}': {source}")]
    FileSystem {
        /// The operation that failed (e.g., "open", "read", "write")
        operation: String,
        /// The file path involved in the operation
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Input schema errors, e.g. a header row without a `user` column
    #[error("Schema error in '{path}': {message}")]
    Schema {
        /// Detailed error message about the schema issue
        message: String,
        /// The input file the schema came from
        path: PathBuf,
    },

    /// AWS lookup errors, propagated unchanged
    #[error(transparent)]
    Aws(#[from] AwsError),
}

impl AuditError {
    /// Create a file system error with operation context
    pub(crate) fn file_system(
        operation: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a schema error
    pub(crate) fn schema(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Schema {
            message: message.into(),
            path: path.into(),
        }
    }
}
