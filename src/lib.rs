//! Notification log: captures posted notifications into an append-only
//! SQLite table and reads them back newest first.

pub mod capture;
pub mod db;
pub mod error;
pub mod models;

pub use capture::{spawn_listener, CaptureAdapter, ListenSummary, RawEvent};
pub use db::LogStore;
pub use error::{NotifLogError, Result};
pub use models::{LogEntry, LogStats};
