// src/capture.rs

use crate::db::LogStore;
use crate::error::Result;
use crate::models::TIME_FORMAT;
use chrono::Local;
use log::{debug, error};
use serde::Deserialize;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

pub const DEFAULT_TITLE: &str = "Unknown";

/// A "notification posted" event as delivered by the host.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub notification: Option<Notification>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Notification {
    #[serde(default)]
    pub extras: Option<Extras>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Extras {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl RawEvent {
    pub fn with_fields(title: Option<String>, text: Option<String>) -> Self {
        Self {
            notification: Some(Notification {
                extras: Some(Extras { title, text }),
            }),
        }
    }

    /// Parses one JSON document. A literal `null` yields `None`.
    pub fn from_json(input: &str) -> Result<Option<Self>> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Current local time in the stored timestamp layout.
pub fn capture_time() -> String {
    Local::now().format(TIME_FORMAT).to_string()
}

/// Outcome counters for a [`CaptureAdapter::listen`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenSummary {
    pub stored: u64,
    pub skipped: u64,
    pub failed: u64,
}

/// Turns raw notification events into log appends. Holds no state of its own.
#[derive(Debug, Clone)]
pub struct CaptureAdapter {
    store: LogStore,
}

impl CaptureAdapter {
    pub fn new(store: LogStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &LogStore {
        &self.store
    }

    /// Records one event. Returns `Ok(None)` without touching the store when
    /// the event or its notification payload is missing.
    pub fn on_notification_posted(&self, event: Option<&RawEvent>) -> Result<Option<i64>> {
        let Some(notification) = event.and_then(|e| e.notification.as_ref()) else {
            debug!("skipping event without notification payload");
            return Ok(None);
        };

        let extras = notification.extras.as_ref();
        let title = extras
            .and_then(|e| e.title.as_deref())
            .unwrap_or(DEFAULT_TITLE);
        let text = extras.and_then(|e| e.text.as_deref()).unwrap_or("");
        let time = capture_time();

        let id = self.store.append(title, text, &time)?;
        Ok(Some(id))
    }

    /// Drains `events` in arrival order until every sender is gone.
    ///
    /// A failed append is logged and counted; the loop keeps going.
    pub fn listen(&self, events: Receiver<Option<RawEvent>>) -> ListenSummary {
        let mut summary = ListenSummary::default();
        for event in events {
            match self.on_notification_posted(event.as_ref()) {
                Ok(Some(_)) => summary.stored += 1,
                Ok(None) => summary.skipped += 1,
                Err(e) => {
                    error!("failed to store notification: {}", e);
                    summary.failed += 1;
                }
            }
        }
        summary
    }
}

/// Runs `adapter.listen` on its own thread. Dropping the returned sender ends
/// the loop; joining the handle yields the summary.
pub fn spawn_listener(
    adapter: CaptureAdapter,
) -> (Sender<Option<RawEvent>>, JoinHandle<ListenSummary>) {
    let (tx, rx) = mpsc::channel();
    let handle = thread::spawn(move || adapter.listen(rx));
    (tx, handle)
}
