// src/db.rs

use crate::error::{NotifLogError, Result};
use crate::models::{LogEntry, LogStats};
use chrono::Local;
use log::debug;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// 获取数据库文件的标准路径 (~/.config/notiflog/logs.db)
pub fn get_db_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(NotifLogError::HomeDirNotFound)?;
    Ok(home_dir.join(".config/notiflog/logs.db"))
}

/// Append-only notification log backed by a single SQLite file.
///
/// Only the path is held; every operation opens its own connection and drops
/// it before returning, on success and on error alike.
#[derive(Debug, Clone)]
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location under the user's home directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(get_db_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_connection(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path).map_err(NotifLogError::Sql)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    /// Creates the table if it is missing; safe to call on every startup.
    pub fn ensure_schema(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = self.open_connection()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT,
                text TEXT,
                time TEXT
            )",
            [],
        )?;
        debug!("schema ready at {}", self.path.display());
        Ok(())
    }

    /// Inserts one row and returns its id. The row is committed before return.
    pub fn append(&self, title: &str, text: &str, time: &str) -> Result<i64> {
        let conn = self.open_connection()?;
        conn.execute(
            "INSERT INTO logs (title, text, time) VALUES (?1, ?2, ?3)",
            params![title, text, time],
        )?;
        let id = conn.last_insert_rowid();
        debug!("appended log #{}", id);
        Ok(id)
    }

    /// All rows, newest id first.
    pub fn list_all(&self) -> Result<Vec<LogEntry>> {
        let conn = self.open_connection()?;
        let mut stmt = conn.prepare(
            "SELECT id, COALESCE(title, ''), COALESCE(text, ''), COALESCE(time, '')
             FROM logs ORDER BY id DESC",
        )?;
        let logs = stmt
            .query_map([], |row| {
                Ok(LogEntry {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    text: row.get(2)?,
                    time: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(logs)
    }

    pub fn stats(&self) -> Result<LogStats> {
        let conn = self.open_connection()?;
        let total: i64 = conn.query_row("SELECT COUNT(*) FROM logs", [], |row| row.get(0))?;

        let today = Local::now().format("%Y-%m-%d").to_string();
        let today_count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM logs WHERE substr(time, 1, 10) = ?1",
            [&today],
            |row| row.get(0),
        )?;
        drop(conn);

        let file_size_bytes = std::fs::metadata(&self.path)?.len();
        Ok(LogStats {
            total: total as u64,
            today: today_count as u64,
            file_size_bytes,
        })
    }
}
