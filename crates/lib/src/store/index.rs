//! Canonical photo index
//!
//! Maps each file path to the one [`Photo`] value that represents it across
//! every user and album. Album entries are copies of the canonical value;
//! the store writes edits through to all of them.

use std::{collections::HashMap, path::Path};

use crate::{Photo, User};

/// The index key for a file path: the path made absolute against the
/// working directory, left as given if that fails.
pub(crate) fn photo_key(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .into_owned()
}

#[derive(Debug, Default, Clone)]
pub(crate) struct PhotoIndex {
    photos: HashMap<String, Photo>,
}

impl PhotoIndex {
    /// Build the index from a loaded user graph.
    ///
    /// The first occurrence of a path wins. Later copies that disagree with
    /// it are overwritten so the graph holds one value per path.
    pub(crate) fn build(users: &mut [User]) -> Self {
        let mut photos: HashMap<String, Photo> = HashMap::new();
        let mut normalized = 0usize;
        for user in users.iter_mut() {
            for album in user.albums_mut() {
                for photo in album.photos_mut() {
                    match photos.get(photo.path()) {
                        Some(canonical) => {
                            if !canonical.same_contents(photo) {
                                *photo = canonical.clone();
                                normalized += 1;
                            }
                        }
                        None => {
                            photos.insert(photo.path().to_string(), photo.clone());
                        }
                    }
                }
            }
        }
        if normalized > 0 {
            tracing::debug!(normalized, "Normalized diverging photo copies");
        }
        Self { photos }
    }

    pub(crate) fn get(&self, path: &str) -> Option<&Photo> {
        self.photos.get(path)
    }

    pub(crate) fn insert(&mut self, photo: Photo) {
        self.photos.insert(photo.path().to_string(), photo);
    }

    pub(crate) fn len(&self) -> usize {
        self.photos.len()
    }

    /// Apply `edit` to the canonical photo and every copy of it in `users`.
    ///
    /// Returns the edited photo, or `None` if the path is not indexed.
    pub(crate) fn edit<R>(
        &mut self,
        users: &mut [User],
        path: &str,
        edit: impl FnOnce(&mut Photo) -> R,
    ) -> Option<(Photo, R)> {
        let canonical = self.photos.get_mut(path)?;
        let result = edit(canonical);
        let updated = canonical.clone();
        for user in users.iter_mut() {
            for album in user.albums_mut() {
                for photo in album.photos_mut().filter(|p| p.path() == path) {
                    *photo = updated.clone();
                }
            }
        }
        Some((updated, result))
    }

    /// Drop entries no longer referenced by any album.
    pub(crate) fn prune(&mut self, users: &[User]) {
        let before = self.photos.len();
        self.photos
            .retain(|path, _| users.iter().any(|u| u.find_photo(path).is_some()));
        let dropped = before - self.photos.len();
        if dropped > 0 {
            tracing::debug!(dropped, "Pruned unreferenced photos from index");
        }
    }
}
