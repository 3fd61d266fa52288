//! Protected accounts
//!
//! The store provisions these on first run and refuses to delete them.
//! Every check against a reserved name goes through [`ReservedUser`].

use crate::constants::{ADMIN_USERNAME, STOCK_USERNAME};

/// An account with fixed lifecycle rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedUser {
    /// Administrative account; manages other users.
    Admin,
    /// Preseeded account holding the stock album.
    Stock,
}

impl ReservedUser {
    /// All reserved accounts, in provisioning order.
    pub const ALL: [ReservedUser; 2] = [ReservedUser::Admin, ReservedUser::Stock];

    pub fn username(self) -> &'static str {
        match self {
            ReservedUser::Admin => ADMIN_USERNAME,
            ReservedUser::Stock => STOCK_USERNAME,
        }
    }

    /// Match a username exactly against the reserved names.
    pub fn from_username(username: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.username() == username)
    }

    pub fn is_reserved(username: &str) -> bool {
        Self::from_username(username).is_some()
    }
}

impl std::fmt::Display for ReservedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.username())
    }
}
