//! CLI argument definitions for the Photoroll binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Output format flag
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    /// Aligned tables and plain messages
    Human,
    /// One JSON document per invocation
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Human => OutputFormat::Human,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Photo albums for a handful of local users
#[derive(Parser, Debug)]
#[command(name = "photoroll")]
#[command(about = "Photoroll: photo albums, captions, tags, and search")]
#[command(version)]
pub struct Cli {
    /// Directory holding the user snapshot
    #[arg(short = 'D', long, default_value = "data", env = "PHOTOROLL_DATA_DIR")]
    pub data_dir: PathBuf,

    /// User to log in as for this command
    #[arg(short, long, env = "PHOTOROLL_USER")]
    pub user: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "human", global = true)]
    pub format: Format,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage user accounts
    #[command(subcommand)]
    Users(UsersCommand),
    /// Manage the logged-in user's albums
    #[command(subcommand)]
    Albums(AlbumsCommand),
    /// Manage photos inside albums
    #[command(subcommand)]
    Photos(PhotosCommand),
    /// Search the logged-in user's photos
    #[command(subcommand)]
    Search(SearchCommand),
}

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    /// List every user
    List,
    /// Create a user (admin only)
    Create { username: String },
    /// Delete a user and their albums (admin only)
    Delete { username: String },
}

#[derive(Subcommand, Debug)]
pub enum AlbumsCommand {
    /// List albums with photo counts and date spans
    List,
    /// Create an empty album
    Create { name: String },
    /// Rename an album
    Rename { from: String, to: String },
    /// Delete an album
    Delete { name: String },
}

#[derive(Subcommand, Debug)]
pub enum PhotosCommand {
    /// List the photos of an album
    List { album: String },
    /// Add a file to an album
    Add { album: String, path: PathBuf },
    /// Remove a photo from an album
    Remove { album: String, path: String },
    /// Set a photo's caption
    Caption { path: String, caption: String },
    /// Set a tag, replacing any value of the same type
    Tag {
        path: String,
        tag_type: String,
        value: String,
    },
    /// Remove a tag
    Untag { path: String, tag_type: String },
    /// Copy a photo into another album
    Copy {
        from: String,
        path: String,
        to: String,
    },
    /// Move a photo into another album
    Move {
        from: String,
        path: String,
        to: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum SearchCommand {
    /// Photos taken between two days, inclusive (YYYY-MM-DD)
    Date {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
    /// Photos matching `type=value`, optionally joined by AND or OR
    Tags { query: String },
}
