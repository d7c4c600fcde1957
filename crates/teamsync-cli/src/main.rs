use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod session;

#[derive(Parser)]
#[command(name = "teamsync-cli", version, about = "Team Sync CLI")]
struct Cli {
    /// Session file holding the current board (defaults to board.json
    /// in the data directory)
    #[arg(long, global = true, value_name = "PATH")]
    session: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Board management
    Board {
        #[command(subcommand)]
        action: commands::board::BoardAction,
    },
    /// Calendar and route exporters
    Export {
        #[command(subcommand)]
        action: commands::export::ExportAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let store = session::SessionStore::new(cli.session);
    let result = match cli.command {
        Commands::Board { action } => commands::board::run(action, &store),
        Commands::Export { action } => commands::export::run(action, &store),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
