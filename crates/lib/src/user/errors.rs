//! Error types for the user system
use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum UserError {
    #[error("User not found: {username}")]
    UserNotFound { username: String },

    #[error("User already exists: {username}")]
    UsernameAlreadyExists { username: String },

    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Cannot delete the {username} user")]
    ReservedUser { username: String },

    #[error("No user is logged in")]
    NotLoggedIn,

    #[error("Operation requires admin permission")]
    InsufficientPermissions,
}

impl UserError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, UserError::UserNotFound { .. })
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_already_exists(&self) -> bool {
        matches!(self, UserError::UsernameAlreadyExists { .. })
    }

    /// Check if this error indicates permission was denied.
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            UserError::ReservedUser { .. }
                | UserError::NotLoggedIn
                | UserError::InsufficientPermissions
        )
    }

    /// Check if this error is an input validation failure.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, UserError::EmptyUsername)
    }
}

impl From<UserError> for crate::Error {
    fn from(err: UserError) -> Self {
        crate::Error::User(err)
    }
}
