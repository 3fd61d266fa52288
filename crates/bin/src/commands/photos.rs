//! Photo commands for the logged-in user's albums.

use photoroll::{AlbumError, UserError, UserStore};

use super::CommandResult;
use crate::cli::PhotosCommand;
use crate::output::{OutputFormat, print_done, print_photos};

/// Run a `photos` subcommand
pub fn run(store: &mut UserStore, command: &PhotosCommand, format: OutputFormat) -> CommandResult {
    match command {
        PhotosCommand::List { album } => {
            let user = store
                .current_user()
                .ok_or(photoroll::Error::User(UserError::NotLoggedIn))?;
            let album = user.album(album).ok_or_else(|| {
                photoroll::Error::Album(AlbumError::AlbumNotFound {
                    name: album.clone(),
                })
            })?;
            print_photos(album.photos(), format)?;
        }
        PhotosCommand::Add { album, path } => {
            let photo = store.add_photo(album, path)?;
            print_photos(std::slice::from_ref(&photo), format)?;
        }
        PhotosCommand::Remove { album, path } => {
            let photo = store.remove_photo(album, path)?;
            print_done(
                &format!("Removed {} from {album}", photo.display_name()),
                format,
            )?;
        }
        PhotosCommand::Caption { path, caption } => {
            let photo = store.set_caption(path, caption)?;
            print_photos(std::slice::from_ref(&photo), format)?;
        }
        PhotosCommand::Tag {
            path,
            tag_type,
            value,
        } => {
            let photo = store.add_tag(path, tag_type, value)?;
            print_photos(std::slice::from_ref(&photo), format)?;
        }
        PhotosCommand::Untag { path, tag_type } => {
            let message = if store.remove_tag(path, tag_type)? {
                format!("Removed tag {}", tag_type.trim())
            } else {
                format!("No {} tag to remove", tag_type.trim())
            };
            print_done(&message, format)?;
        }
        PhotosCommand::Copy { from, path, to } => {
            store.copy_photo(from, path, to)?;
            print_done(&format!("Copied {path} from {from} to {to}"), format)?;
        }
        PhotosCommand::Move { from, path, to } => {
            store.move_photo(from, path, to)?;
            print_done(&format!("Moved {path} from {from} to {to}"), format)?;
        }
    }
    Ok(())
}
