//! Albums: ordered collections of photos
//!
//! An [`Album`] keeps its photos in insertion order and derives its summary
//! (count, date span, cover) from them. It does not police duplicates or
//! name collisions itself; the store checks those before mutating.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::Photo;

pub mod errors;

pub use errors::AlbumError;

/// A named, ordered collection of photos belonging to one user.
///
/// Equality considers only the name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    name: String,
    #[serde(default)]
    photos: Vec<Photo>,
}

impl Album {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            photos: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename in place. Uniqueness is the caller's concern.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub(crate) fn photos_mut(&mut self) -> std::slice::IterMut<'_, Photo> {
        self.photos.iter_mut()
    }

    /// Append a photo. No duplicate check: adding the same path twice
    /// yields two entries, so callers check [`Album::contains`] first.
    pub fn add_photo(&mut self, photo: Photo) {
        self.photos.push(photo);
    }

    /// Remove the first photo equal to `photo` (same path).
    ///
    /// Returns true if a photo was removed.
    pub fn remove_photo(&mut self, photo: &Photo) -> bool {
        self.remove_path(photo.path()).is_some()
    }

    /// Remove the first photo with the given path, returning it.
    pub fn remove_path(&mut self, path: &str) -> Option<Photo> {
        let pos = self.photos.iter().position(|p| p.path() == path)?;
        Some(self.photos.remove(pos))
    }

    pub fn contains(&self, photo: &Photo) -> bool {
        self.contains_path(photo.path())
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.photos.iter().any(|p| p.path() == path)
    }

    /// Look up a photo in this album by path.
    pub fn photo(&self, path: &str) -> Option<&Photo> {
        self.photos.iter().find(|p| p.path() == path)
    }

    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// The first photo, shown as the album's cover.
    pub fn cover_photo(&self) -> Option<&Photo> {
        self.photos.first()
    }

    /// Timestamp of the oldest photo, or `None` for an empty album.
    pub fn earliest_date(&self) -> Option<NaiveDateTime> {
        self.photos.iter().map(Photo::taken_at).min()
    }

    /// Timestamp of the newest photo, or `None` for an empty album.
    pub fn latest_date(&self) -> Option<NaiveDateTime> {
        self.photos.iter().map(Photo::taken_at).max()
    }

    /// Earliest and latest timestamps together.
    pub fn date_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((self.earliest_date()?, self.latest_date()?))
    }
}

impl PartialEq for Album {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Album {}
