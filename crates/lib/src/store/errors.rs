//! Snapshot persistence error types.
//!
//! These errors describe failures reading or writing the snapshot file.
//! Inside mutating store operations they are logged and swallowed; only
//! [`crate::UserStore::save`] hands them back to the caller.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or saving the snapshot.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the snapshot file failed.
    #[error("Snapshot I/O failed for {path}: {source}")]
    FileIo {
        /// The file or directory being accessed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The user list could not be serialized.
    #[error("Snapshot serialization failed: {source}")]
    SerializationFailed {
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// The snapshot file could not be parsed.
    #[error("Snapshot deserialization failed: {source}")]
    DeserializationFailed {
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, StoreError::FileIo { .. })
    }

    /// Check if this error came from encoding or decoding the snapshot.
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            StoreError::SerializationFailed { .. } | StoreError::DeserializationFailed { .. }
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::FileIo {
            path: path.into(),
            source,
        }
    }
}

impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
