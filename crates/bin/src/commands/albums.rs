//! Album commands for the logged-in user.

use photoroll::{UserError, UserStore};

use super::CommandResult;
use crate::cli::AlbumsCommand;
use crate::output::{OutputFormat, print_albums, print_done};

/// Run an `albums` subcommand
pub fn run(store: &mut UserStore, command: &AlbumsCommand, format: OutputFormat) -> CommandResult {
    match command {
        AlbumsCommand::List => {
            let user = store
                .current_user()
                .ok_or(photoroll::Error::User(UserError::NotLoggedIn))?;
            print_albums(user.albums(), format)?;
        }
        AlbumsCommand::Create { name } => {
            store.create_album(name)?;
            print_done(&format!("Created album {}", name.trim()), format)?;
        }
        AlbumsCommand::Rename { from, to } => {
            store.rename_album(from, to)?;
            print_done(&format!("Renamed album {from} to {}", to.trim()), format)?;
        }
        AlbumsCommand::Delete { name } => {
            let album = store.delete_album(name)?;
            print_done(
                &format!("Deleted album {} ({} photos)", album.name(), album.photo_count()),
                format,
            )?;
        }
    }
    Ok(())
}
