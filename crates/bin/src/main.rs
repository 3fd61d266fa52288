use clap::Parser;
use photoroll::{StoreConfig, UserStore};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("photoroll=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::from(cli.format);

    let mut store = UserStore::open(StoreConfig::new(&cli.data_dir));

    if let Some(username) = &cli.user {
        if !store.login(username) {
            eprintln!("Unknown user: {username}");
            std::process::exit(2);
        }
    }

    let result = match &cli.command {
        Commands::Users(command) => commands::users::run(&mut store, command, format),
        Commands::Albums(command) => commands::albums::run(&mut store, command, format),
        Commands::Photos(command) => commands::photos::run(&mut store, command, format),
        Commands::Search(command) => commands::search::run(&store, command, format),
    };

    // Logging out persists whatever the gesture changed
    store.logout();

    if let Err(e) = result {
        match e.downcast_ref::<photoroll::Error>() {
            Some(err) if !err.is_io_error() && !err.is_store_error() => {
                tracing::debug!(module = err.module(), error = %err, "Gesture rejected");
                eprintln!("{err}");
                std::process::exit(1);
            }
            _ => return Err(e),
        }
    }
    Ok(())
}
