// src/cli.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "notiflog - record posted notifications into a local log",
    long_about = "notiflog appends every notification event it receives to a local SQLite table and lists them back newest first. A host integration feeds events through `capture` or `listen`."
)]
pub struct Cli {
    /// Database file to use instead of ~/.config/notiflog/logs.db
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Creates the log table if it does not exist yet.
    Init,

    /// Records a single notification event.
    /// Missing title is stored as "Unknown", missing text as an empty string.
    Capture {
        #[arg(long, help = "Notification title")]
        title: Option<String>,
        #[arg(long, help = "Notification body text")]
        text: Option<String>,
        #[arg(
            long,
            conflicts_with_all = ["title", "text"],
            help = "Read one JSON event from stdin instead of using flags"
        )]
        json: bool,
    },

    /// Reads newline-delimited JSON events from stdin and records each one.
    /// A `null` line is a skipped event; blank lines are ignored.
    Listen,

    /// Lists all recorded notifications, newest first.
    List {
        #[arg(long, help = "Print entries as a JSON array")]
        json: bool,
    },

    /// Shows entry counts and database size.
    Stats,
}
