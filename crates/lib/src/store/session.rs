//! Gestures of the logged-in user
//!
//! Each method checks its inputs against the session user's data, returns a
//! validation error without touching state if they are rejected, and
//! otherwise mutates and persists.

use std::path::Path;

use chrono::NaiveDate;

use super::{UserStore, index::photo_key};
use crate::{
    Album, AlbumError, Photo, PhotoError, Result, User, UserError,
    search::{self, DateRange},
    user::ReservedUser,
};

impl UserStore {
    // === Admin ===

    /// Create a user on behalf of the logged-in admin.
    pub fn register_user(&mut self, username: &str) -> Result<()> {
        self.require_admin()?;
        let username = username.trim();
        if username.is_empty() {
            return Err(UserError::EmptyUsername.into());
        }
        if !self.create(username) {
            return Err(UserError::UsernameAlreadyExists {
                username: username.to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Delete a user on behalf of the logged-in admin.
    pub fn remove_user(&mut self, username: &str) -> Result<()> {
        self.require_admin()?;
        let username = username.trim();
        if username.is_empty() {
            return Err(UserError::EmptyUsername.into());
        }
        if let Some(reserved) = ReservedUser::from_username(username) {
            return Err(UserError::ReservedUser {
                username: reserved.username().to_string(),
            }
            .into());
        }
        if !self.delete(username) {
            return Err(UserError::UserNotFound {
                username: username.to_string(),
            }
            .into());
        }
        Ok(())
    }

    // === Albums ===

    /// Create an empty album. Names are trimmed and must be unique
    /// ignoring case.
    pub fn create_album(&mut self, name: &str) -> Result<()> {
        let name = valid_album_name(name)?;
        let user = self.session_user_mut()?;
        if user.has_album_named(name) {
            return Err(AlbumError::DuplicateName {
                name: name.to_string(),
            }
            .into());
        }
        user.add_album(Album::new(name));
        tracing::debug!(album = name, "Created album");
        self.persist();
        Ok(())
    }

    /// Rename an album. The new name may differ from the old one only in
    /// case, but must not collide with any other album ignoring case.
    pub fn rename_album(&mut self, from: &str, to: &str) -> Result<()> {
        let to = valid_album_name(to)?;
        let user = self.session_user_mut()?;
        if user.album(from).is_none() {
            return Err(album_not_found(from));
        }
        if user.has_other_album_named(to, from) {
            return Err(AlbumError::DuplicateName {
                name: to.to_string(),
            }
            .into());
        }
        if let Some(album) = user.album_mut(from) {
            album.set_name(to);
        }
        tracing::debug!(from, to, "Renamed album");
        self.persist();
        Ok(())
    }

    /// Delete an album. Its photos live on in any other album holding them.
    pub fn delete_album(&mut self, name: &str) -> Result<Album> {
        let user = self.session_user_mut()?;
        let album = user.remove_album(name).ok_or_else(|| album_not_found(name))?;
        self.index.prune(&self.users);
        tracing::debug!(album = name, "Deleted album");
        self.persist();
        Ok(album)
    }

    // === Photos ===

    /// Add the photo at `path` to an album.
    ///
    /// The path is made absolute. If any album already holds that path the
    /// existing photo is reused, keeping its caption and tags; otherwise a
    /// new photo stamped with the current time is created. Adding a photo
    /// the album already contains changes nothing.
    ///
    /// Every other photo gesture resolves its path argument the same way,
    /// so a relative path keeps naming the photo it added.
    pub fn add_photo(&mut self, album: &str, path: impl AsRef<Path>) -> Result<Photo> {
        let key = photo_key(path);
        let photo = match self.index.get(&key) {
            Some(existing) => existing.clone(),
            None => Photo::added_now(key.clone(), self.clock.as_ref()),
        };

        let target = self.session_album_mut(album)?;
        if target.contains(&photo) {
            tracing::debug!(album, path = %key, "Photo already in album");
        } else {
            target.add_photo(photo.clone());
            self.index.insert(photo.clone());
            tracing::debug!(album, path = %key, "Added photo");
        }
        self.persist();
        Ok(photo)
    }

    /// Remove a photo from one album.
    pub fn remove_photo(&mut self, album: &str, path: &str) -> Result<Photo> {
        let key = photo_key(path);
        let source = self.session_album_mut(album)?;
        let photo = source
            .remove_path(&key)
            .ok_or_else(|| photo_not_in_album(album, path))?;
        self.index.prune(&self.users);
        tracing::debug!(album, path, "Removed photo");
        self.persist();
        Ok(photo)
    }

    /// Copy a photo into another album that does not yet hold it.
    pub fn copy_photo(&mut self, from: &str, path: &str, to: &str) -> Result<()> {
        self.transfer_photo(from, path, to, false)
    }

    /// Move a photo into another album that does not yet hold it.
    pub fn move_photo(&mut self, from: &str, path: &str, to: &str) -> Result<()> {
        self.transfer_photo(from, path, to, true)
    }

    fn transfer_photo(&mut self, from: &str, path: &str, to: &str, remove: bool) -> Result<()> {
        let user = self.session_user_mut()?;
        if from == to {
            return Err(AlbumError::SameAlbum {
                name: from.to_string(),
            }
            .into());
        }
        let key = photo_key(path);
        let photo = user
            .album(from)
            .ok_or_else(|| album_not_found(from))?
            .photo(&key)
            .cloned()
            .ok_or_else(|| photo_not_in_album(from, path))?;
        let target = user.album_mut(to).ok_or_else(|| album_not_found(to))?;
        if target.contains(&photo) {
            return Err(AlbumError::PhotoAlreadyInAlbum {
                album: to.to_string(),
                path: path.to_string(),
            }
            .into());
        }
        target.add_photo(photo);
        if remove {
            if let Some(source) = user.album_mut(from) {
                source.remove_path(&key);
            }
        }
        tracing::debug!(from, to, path, moved = remove, "Transferred photo");
        self.persist();
        Ok(())
    }

    /// Set a photo's caption. Captions are trimmed and must not be empty.
    pub fn set_caption(&mut self, path: &str, caption: &str) -> Result<Photo> {
        let caption = caption.trim();
        if caption.is_empty() {
            return Err(PhotoError::EmptyCaption.into());
        }
        let (photo, ()) = self.edit_session_photo(path, |p| p.set_caption(caption))?;
        self.persist();
        Ok(photo)
    }

    /// Tag a photo, replacing any tag of the same type.
    pub fn add_tag(&mut self, path: &str, tag_type: &str, value: &str) -> Result<Photo> {
        let (tag_type, value) = (tag_type.trim(), value.trim());
        if tag_type.is_empty() || value.is_empty() {
            return Err(PhotoError::EmptyTag.into());
        }
        let (photo, _) = self.edit_session_photo(path, |p| p.add_tag(tag_type, value))?;
        self.persist();
        Ok(photo)
    }

    /// Remove a photo's tag of the given type. Returns true if one was present.
    pub fn remove_tag(&mut self, path: &str, tag_type: &str) -> Result<bool> {
        let tag_type = tag_type.trim();
        let (_, removed) = self.edit_session_photo(path, |p| p.remove_tag(tag_type))?;
        self.persist();
        Ok(removed)
    }

    // === Search ===

    /// Photos of the session user taken between `start` and `end`,
    /// inclusive. Without both bounds nothing is searched.
    pub fn search_by_date(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<Photo>> {
        let user = self.session_user()?;
        let Some(range) = DateRange::from_bounds(start, end) else {
            return Ok(Vec::new());
        };
        Ok(search::by_date(user, &range).into_iter().cloned().collect())
    }

    /// Photos of the session user matching a tag query. Malformed queries
    /// match nothing.
    pub fn search_by_tags(&self, query: &str) -> Result<Vec<Photo>> {
        let user = self.session_user()?;
        Ok(search::by_tag_query(user, query)
            .into_iter()
            .cloned()
            .collect())
    }

    // === Helpers ===

    fn require_admin(&self) -> Result<()> {
        self.session_user()?;
        if !self.is_current_admin() {
            return Err(UserError::InsufficientPermissions.into());
        }
        Ok(())
    }

    fn session_user(&self) -> Result<&User> {
        self.current_user().ok_or_else(|| UserError::NotLoggedIn.into())
    }

    fn session_user_mut(&mut self) -> Result<&mut User> {
        let username = self.current.as_deref().ok_or(UserError::NotLoggedIn)?;
        let pos = self.position(username).ok_or(UserError::NotLoggedIn)?;
        Ok(&mut self.users[pos])
    }

    fn session_album_mut(&mut self, name: &str) -> Result<&mut Album> {
        self.session_user_mut()?
            .album_mut(name)
            .ok_or_else(|| album_not_found(name))
    }

    /// Edit a photo the session user holds, writing through to every copy.
    fn edit_session_photo<R>(
        &mut self,
        path: &str,
        edit: impl FnOnce(&mut Photo) -> R,
    ) -> Result<(Photo, R)> {
        let key = photo_key(path);
        if self.session_user()?.find_photo(&key).is_none() {
            return Err(PhotoError::PhotoNotFound {
                path: path.to_string(),
            }
            .into());
        }
        self.index
            .edit(&mut self.users, &key, edit)
            .ok_or_else(|| {
                PhotoError::PhotoNotFound {
                    path: path.to_string(),
                }
                .into()
            })
    }
}

fn valid_album_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AlbumError::EmptyName.into());
    }
    Ok(name)
}

fn album_not_found(name: &str) -> crate::Error {
    AlbumError::AlbumNotFound {
        name: name.to_string(),
    }
    .into()
}

fn photo_not_in_album(album: &str, path: &str) -> crate::Error {
    AlbumError::PhotoNotInAlbum {
        album: album.to_string(),
        path: path.to_string(),
    }
    .into()
}
