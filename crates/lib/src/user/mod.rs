//! User system for Photoroll
//!
//! A [`User`] owns an ordered list of albums. Users are created, deleted,
//! and looked up through [`crate::UserStore`].

use serde::{Deserialize, Serialize};

use crate::{Album, Photo, photo::eq_ignore_case};

pub mod errors;
pub mod reserved;

pub use errors::UserError;
pub use reserved::ReservedUser;

/// An account and its albums.
///
/// Equality considers only the username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    username: String,
    #[serde(default)]
    albums: Vec<Album>,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            albums: Vec::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The reserved account this user is, if any.
    pub fn reserved(&self) -> Option<ReservedUser> {
        ReservedUser::from_username(&self.username)
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub(crate) fn albums_mut(&mut self) -> std::slice::IterMut<'_, Album> {
        self.albums.iter_mut()
    }

    /// Append an album. Name collisions are checked by the caller.
    pub fn add_album(&mut self, album: Album) {
        self.albums.push(album);
    }

    /// Remove the album with exactly this name, returning it.
    pub fn remove_album(&mut self, name: &str) -> Option<Album> {
        let pos = self.albums.iter().position(|a| a.name() == name)?;
        Some(self.albums.remove(pos))
    }

    /// Exact-name lookup.
    pub fn album(&self, name: &str) -> Option<&Album> {
        self.albums.iter().find(|a| a.name() == name)
    }

    pub fn album_mut(&mut self, name: &str) -> Option<&mut Album> {
        self.albums.iter_mut().find(|a| a.name() == name)
    }

    /// Case-insensitive lookup.
    pub fn album_ci(&self, name: &str) -> Option<&Album> {
        self.albums.iter().find(|a| eq_ignore_case(a.name(), name))
    }

    /// Whether an album name collides with an existing one, ignoring case.
    pub fn has_album_named(&self, name: &str) -> bool {
        self.album_ci(name).is_some()
    }

    /// Like [`User::has_album_named`], but ignores the album named `except`.
    ///
    /// Used when renaming, so an album may change the case of its own name.
    pub fn has_other_album_named(&self, name: &str, except: &str) -> bool {
        self.albums
            .iter()
            .filter(|a| a.name() != except)
            .any(|a| eq_ignore_case(a.name(), name))
    }

    /// First photo with this path across all albums.
    pub fn find_photo(&self, path: &str) -> Option<&Photo> {
        self.photos().find(|p| p.path() == path)
    }

    /// Every photo in every album, in album order. A photo held by several
    /// albums appears once per album.
    pub fn photos(&self) -> impl Iterator<Item = &Photo> + '_ {
        self.albums.iter().flat_map(|a| a.photos().iter())
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
    }
}

impl Eq for User {}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.username)
    }
}
