//! Subcommand implementations. Each runs one gesture against an open store.

pub mod albums;
pub mod photos;
pub mod search;
pub mod users;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
