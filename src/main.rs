// src/main.rs

use clap::Parser;
use notiflog::db::LogStore;
use notiflog::error::Result;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = match cli.db {
        Some(path) => LogStore::new(path),
        None => LogStore::open_default()?,
    };

    match cli.command {
        Commands::Init => commands::handle_init(&store),
        Commands::Capture { title, text, json } => {
            commands::handle_capture(&store, title, text, json)
        }
        Commands::Listen => commands::handle_listen(&store),
        Commands::List { json } => commands::handle_list(&store, json),
        Commands::Stats => commands::handle_stats(&store),
    }
}
