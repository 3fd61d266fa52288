//!
//! Photoroll: photo albums for a handful of local users.
//! This library provides the data model, search, and persistent store behind the `photoroll` CLI.
//!
//! ## Core Concepts
//!
//! * **Photos (`photo::Photo`)**: A file path with a caption, a timestamp, and a tag map. The path is the photo's identity.
//! * **Albums (`album::Album`)**: Named, ordered collections of photos with derived count, date span, and cover.
//! * **Users (`user::User`)**: Accounts owning an ordered list of albums. Two names are reserved (`user::ReservedUser`).
//! * **Store (`store::UserStore`)**: The user directory, the login session, and the snapshot file every mutation rewrites.
//! * **Search (`search`)**: Date-range and tag queries over one user's photos.

pub mod album;
pub mod clock;
pub mod config;
pub mod constants;
pub mod photo;
pub mod search;
pub mod store;
pub mod user;

pub use album::{Album, AlbumError};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::StoreConfig;
pub use photo::{Photo, PhotoError};
pub use store::{StoreError, UserStore};
pub use user::{ReservedUser, User, UserError};

/// Result type used throughout the Photoroll library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Photoroll library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured photo errors from the photo module
    #[error(transparent)]
    Photo(photo::PhotoError),

    /// Structured album errors from the album module
    #[error(transparent)]
    Album(album::AlbumError),

    /// Structured user errors from the user module
    #[error(transparent)]
    User(user::UserError),

    /// Structured persistence errors from the store module
    #[error(transparent)]
    Store(store::StoreError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Photo(_) => "photo",
            Error::Album(_) => "album",
            Error::User(_) => "user",
            Error::Store(_) => "store",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Photo(photo_err) => photo_err.is_not_found(),
            Error::Album(album_err) => album_err.is_not_found(),
            Error::User(user_err) => user_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Album(album_err) => album_err.is_already_exists(),
            Error::User(user_err) => user_err.is_already_exists(),
            _ => false,
        }
    }

    /// Check if this error indicates permission was denied.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Error::User(user_err) => user_err.is_permission_denied(),
            _ => false,
        }
    }

    /// Check if this error is validation-related.
    ///
    /// Validation errors are the short messages shown to the user when a
    /// gesture is rejected before anything changes.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Photo(photo_err) => photo_err.is_validation_error(),
            Error::Album(album_err) => album_err.is_validation_error(),
            Error::User(user_err) => user_err.is_validation_error(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Store(store_err) => store_err.is_io_error(),
            _ => false,
        }
    }

    /// Check if this error is snapshot-related.
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::Store(_))
    }
}
