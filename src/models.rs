// src/models.rs

use serde::Serialize;

/// Timestamp layout stored in `logs.time`, always local time.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub time: String, // capture time, not the time the OS raised the notification
}

impl LogEntry {
    /// Title for list rendering: falls back to a 50-char preview of the body
    /// when the stored title is empty.
    pub fn display_title(&self) -> String {
        if !self.title.is_empty() {
            return self.title.clone();
        }
        if self.text.chars().count() > 50 {
            let preview: String = self.text.chars().take(50).collect();
            format!("{}...", preview)
        } else {
            self.text.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogStats {
    pub total: u64,
    pub today: u64,
    pub file_size_bytes: u64,
}
