//! Search commands.

use photoroll::UserStore;

use super::CommandResult;
use crate::cli::SearchCommand;
use crate::output::{OutputFormat, print_photos};

/// Run a `search` subcommand
pub fn run(store: &UserStore, command: &SearchCommand, format: OutputFormat) -> CommandResult {
    let found = match command {
        SearchCommand::Date { start, end } => store.search_by_date(Some(*start), Some(*end))?,
        SearchCommand::Tags { query } => store.search_by_tags(query)?,
    };
    print_photos(&found, format)?;
    Ok(())
}
