//! User management commands.

use photoroll::UserStore;

use super::CommandResult;
use crate::cli::UsersCommand;
use crate::output::{OutputFormat, print_done, print_json, print_table};

/// Run a `users` subcommand
pub fn run(store: &mut UserStore, command: &UsersCommand, format: OutputFormat) -> CommandResult {
    match command {
        UsersCommand::List => list(store, format),
        UsersCommand::Create { username } => {
            store.register_user(username)?;
            print_done(&format!("Created user {}", username.trim()), format)?;
            Ok(())
        }
        UsersCommand::Delete { username } => {
            store.remove_user(username)?;
            print_done(&format!("Deleted user {}", username.trim()), format)?;
            Ok(())
        }
    }
}

fn list(store: &UserStore, format: OutputFormat) -> CommandResult {
    let users = store.get_all();
    match format {
        OutputFormat::Human => {
            let rows: Vec<Vec<String>> = users
                .iter()
                .map(|u| {
                    vec![
                        u.username().to_string(),
                        u.albums().len().to_string(),
                        if u.reserved().is_some() { "yes" } else { "" }.to_string(),
                    ]
                })
                .collect();
            print_table(&["USERNAME", "ALBUMS", "RESERVED"], &rows);
        }
        OutputFormat::Json => {
            let entries: Vec<_> = users
                .iter()
                .map(|u| {
                    serde_json::json!({
                        "username": u.username(),
                        "albums": u.albums().len(),
                        "reserved": u.reserved().is_some(),
                    })
                })
                .collect();
            print_json(&serde_json::Value::Array(entries))?;
        }
    }
    Ok(())
}
