// src/commands.rs

use log::warn;
use notiflog::capture::{spawn_listener, CaptureAdapter, RawEvent};
use notiflog::db::LogStore;
use notiflog::error::{NotifLogError, Result};
use std::io::{self, BufRead, Read};

/// 处理 'init' 命令
pub fn handle_init(store: &LogStore) -> Result<()> {
    store.ensure_schema()?;
    println!("✓ Log store ready at: {:?}", store.path());
    Ok(())
}

/// 处理 'capture' 命令
pub fn handle_capture(
    store: &LogStore,
    title: Option<String>,
    text: Option<String>,
    json: bool,
) -> Result<()> {
    let event = if json {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        if buf.trim().is_empty() {
            return Err(NotifLogError::InvalidInput(
                "expected a JSON event on stdin".to_string(),
            ));
        }
        RawEvent::from_json(buf.trim())?
    } else {
        Some(RawEvent::with_fields(title, text))
    };

    store.ensure_schema()?;
    let adapter = CaptureAdapter::new(store.clone());
    match adapter.on_notification_posted(event.as_ref())? {
        Some(id) => println!("✓ Notification recorded as #{}.", id),
        None => eprintln!("Empty event, skipped."),
    }
    Ok(())
}

/// 处理 'listen' 命令
pub fn handle_listen(store: &LogStore) -> Result<()> {
    store.ensure_schema()?;
    let (tx, handle) = spawn_listener(CaptureAdapter::new(store.clone()));

    let mut malformed = 0u64;
    for (lineno, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match RawEvent::from_json(line) {
            Ok(event) => {
                if tx.send(event).is_err() {
                    break;
                }
            }
            Err(e) => {
                warn!("line {}: {}", lineno + 1, e);
                malformed += 1;
            }
        }
    }
    drop(tx);

    let summary = handle.join().map_err(|_| NotifLogError::ListenerPanicked)?;
    println!(
        "✓ Stored {} | Skipped {} | Failed {} | Malformed {}",
        summary.stored, summary.skipped, summary.failed, malformed
    );
    Ok(())
}

/// 处理 'list' 命令
pub fn handle_list(store: &LogStore, json: bool) -> Result<()> {
    store.ensure_schema()?;
    let logs = store.list_all()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&logs)?);
        return Ok(());
    }

    if logs.is_empty() {
        println!("No notifications logged.");
        return Ok(());
    }

    for log in logs {
        println!("[{}] {} | {}", log.id, log.time, log.display_title());
        if !log.text.is_empty() {
            println!("{}", log.text.trim_end());
        }
        println!("{}", "─".repeat(40));
    }
    Ok(())
}

/// 处理 'stats' 命令
pub fn handle_stats(store: &LogStore) -> Result<()> {
    store.ensure_schema()?;
    let stats = store.stats()?;
    println!("Total entries: {} • Today: {}", stats.total, stats.today);
    println!(
        "Database: {} ({})",
        store.path().display(),
        format_file_size(stats.file_size_bytes)
    );
    Ok(())
}

/// Human-readable byte count, e.g. `512 B`, `1.5 KB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["K", "M", "G", "T", "P", "E"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64;
    let mut exp = 0;
    while value >= 1024.0 && exp < UNITS.len() {
        value /= 1024.0;
        exp += 1;
    }
    format!("{:.1} {}B", value, UNITS[exp - 1])
}
