//! Error types for photo edits
use thiserror::Error;

/// Errors raised when a photo edit is rejected before any state changes.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("Photo not found: {path}")]
    PhotoNotFound { path: String },

    #[error("Caption cannot be empty")]
    EmptyCaption,

    #[error("Tag type and value cannot be empty")]
    EmptyTag,
}

impl PhotoError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PhotoError::PhotoNotFound { .. })
    }

    /// Check if this error is an input validation failure.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, PhotoError::EmptyCaption | PhotoError::EmptyTag)
    }
}

impl From<PhotoError> for crate::Error {
    fn from(err: PhotoError) -> Self {
        crate::Error::Photo(err)
    }
}
