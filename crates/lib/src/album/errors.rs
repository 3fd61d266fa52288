//! Error types for album gestures
use thiserror::Error;

/// Errors raised when an album gesture is rejected before any state changes.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum AlbumError {
    #[error("Album name cannot be empty")]
    EmptyName,

    #[error("An album with this name already exists: {name}")]
    DuplicateName { name: String },

    #[error("Album not found: {name}")]
    AlbumNotFound { name: String },

    #[error("Photo {path} is not in album {album}")]
    PhotoNotInAlbum { album: String, path: String },

    #[error("Photo {path} is already in album {album}")]
    PhotoAlreadyInAlbum { album: String, path: String },

    #[error("Source and target album are the same: {name}")]
    SameAlbum { name: String },
}

impl AlbumError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AlbumError::AlbumNotFound { .. } | AlbumError::PhotoNotInAlbum { .. }
        )
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            AlbumError::DuplicateName { .. } | AlbumError::PhotoAlreadyInAlbum { .. }
        )
    }

    /// Check if this error is an input validation failure.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, AlbumError::EmptyName | AlbumError::SameAlbum { .. })
    }

    /// Get the album name associated with this error, if any.
    pub fn album_name(&self) -> Option<&str> {
        match self {
            AlbumError::DuplicateName { name }
            | AlbumError::AlbumNotFound { name }
            | AlbumError::SameAlbum { name } => Some(name),
            AlbumError::PhotoNotInAlbum { album, .. }
            | AlbumError::PhotoAlreadyInAlbum { album, .. } => Some(album),
            AlbumError::EmptyName => None,
        }
    }
}

impl From<AlbumError> for crate::Error {
    fn from(err: AlbumError) -> Self {
        crate::Error::Album(err)
    }
}
