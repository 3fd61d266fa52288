//! The user store
//!
//! [`UserStore`] owns every user, the current session, and the snapshot on
//! disk. It is the only way to create, delete, or log in as a user, and
//! every mutation it performs is followed by a full snapshot write.
//!
//! Write failures do not undo the in-memory change: they are logged and the
//! store carries on, so memory and disk can diverge until the next
//! successful write. Use [`UserStore::save`] to observe the error directly.

use std::sync::Arc;

use crate::{Clock, Photo, Result, StoreConfig, SystemClock, User, user::ReservedUser};

pub mod errors;
pub(crate) mod index;
pub(crate) mod persistence;
pub(crate) mod seed;
mod session;

pub use errors::StoreError;
use index::PhotoIndex;

/// Directory of users plus the logged-in session.
pub struct UserStore {
    config: StoreConfig,
    users: Vec<User>,
    /// Username of the logged-in user, if any. Never persisted.
    current: Option<String>,
    index: PhotoIndex,
    clock: Arc<dyn Clock>,
}

impl UserStore {
    /// Open the store described by `config` using the system clock.
    pub fn open(config: StoreConfig) -> Self {
        Self::open_with_clock(config, Arc::new(SystemClock))
    }

    /// Open the store with a custom clock.
    ///
    /// 1. Creates the data directory if needed.
    /// 2. Loads the snapshot; an unreadable snapshot is discarded with a warning.
    /// 3. Creates any missing reserved account, seeding the stock account.
    pub fn open_with_clock(config: StoreConfig, clock: Arc<dyn Clock>) -> Self {
        if let Err(e) = std::fs::create_dir_all(config.data_dir()) {
            tracing::error!(
                dir = %config.data_dir().display(),
                error = %e,
                "Failed to create data directory"
            );
        }

        let snapshot = config.snapshot_path();
        let mut users = match persistence::load_from_file(&snapshot) {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!(
                    path = %snapshot.display(),
                    error = %e,
                    "Failed to load snapshot, starting with no users"
                );
                Vec::new()
            }
        };
        let index = PhotoIndex::build(&mut users);
        tracing::info!(
            path = %snapshot.display(),
            users = users.len(),
            photos = index.len(),
            "Opened user store"
        );

        let mut store = Self {
            config,
            users,
            current: None,
            index,
            clock,
        };
        store.provision_reserved();
        store
    }

    fn provision_reserved(&mut self) {
        for reserved in ReservedUser::ALL {
            let username = reserved.username();
            if self.exists(username) {
                continue;
            }
            self.create(username);
            if reserved == ReservedUser::Stock {
                self.seed_stock();
            }
        }
    }

    fn seed_stock(&mut self) {
        let Some(pos) = self.position(ReservedUser::Stock.username()) else {
            return;
        };
        if !self.users[pos].albums().is_empty() {
            return;
        }
        let album = seed::stock_album(&self.config, self.clock.as_ref());
        self.users[pos].add_album(album);
        // Reuse canonical values for any path another user already holds
        self.index = PhotoIndex::build(&mut self.users);
        self.persist();
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// True iff a user with exactly this username exists.
    pub fn exists(&self, username: &str) -> bool {
        self.position(username).is_some()
    }

    /// Create an empty user. Returns false if the username is taken.
    pub fn create(&mut self, username: &str) -> bool {
        if self.exists(username) {
            return false;
        }
        self.users.push(User::new(username));
        tracing::info!(username, "Created user");
        self.persist();
        true
    }

    /// Delete a user and everything they own.
    ///
    /// Returns false for reserved accounts and unknown usernames.
    pub fn delete(&mut self, username: &str) -> bool {
        if ReservedUser::is_reserved(username) {
            tracing::debug!(username, "Refusing to delete reserved user");
            return false;
        }
        let Some(pos) = self.position(username) else {
            return false;
        };
        self.users.remove(pos);
        if self.current.as_deref() == Some(username) {
            self.current = None;
        }
        self.index.prune(&self.users);
        tracing::info!(username, "Deleted user");
        self.persist();
        true
    }

    /// First user with exactly this username.
    pub fn get(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username() == username)
    }

    /// A copy of every user, in creation order.
    pub fn get_all(&self) -> Vec<User> {
        self.users.clone()
    }

    /// Usernames in creation order.
    pub fn usernames(&self) -> Vec<String> {
        self.users.iter().map(|u| u.username().to_string()).collect()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Start a session. Returns false, leaving any session as it was, if
    /// the user does not exist.
    pub fn login(&mut self, username: &str) -> bool {
        if !self.exists(username) {
            return false;
        }
        self.current = Some(username.to_string());
        tracing::debug!(username, "Logged in");
        true
    }

    /// Persist and end the session. Does nothing without a session.
    pub fn logout(&mut self) {
        if let Some(username) = self.current.take() {
            self.persist();
            tracing::debug!(username, "Logged out");
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.get(self.current.as_deref()?)
    }

    /// True iff the session belongs to the admin account.
    pub fn is_current_admin(&self) -> bool {
        self.current
            .as_deref()
            .and_then(ReservedUser::from_username)
            == Some(ReservedUser::Admin)
    }

    /// The canonical photo for a file path, if any album holds it.
    pub fn resolve_photo(&self, path: &str) -> Option<&Photo> {
        self.index.get(&index::photo_key(path))
    }

    /// Write the snapshot now, returning any failure.
    pub fn save(&self) -> Result<()> {
        persistence::save_to_file(&self.users, &self.config.snapshot_path())
    }

    /// Write the snapshot, logging instead of returning failures.
    pub(crate) fn persist(&self) {
        match self.save() {
            Ok(()) => tracing::debug!(users = self.users.len(), "Saved snapshot"),
            Err(e) => tracing::error!(
                path = %self.config.snapshot_path().display(),
                error = %e,
                "Failed to save snapshot"
            ),
        }
    }

    fn position(&self, username: &str) -> Option<usize> {
        self.users.iter().position(|u| u.username() == username)
    }
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field("snapshot", &self.config.snapshot_path())
            .field("users", &self.users.len())
            .field("current", &self.current)
            .finish()
    }
}
