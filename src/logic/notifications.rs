//! Transient toast notifications with timed auto-dismissal.

use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::model::{generate_id, Id};

pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Id,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

#[derive(Debug, Default)]
struct NotificationState {
    entries: Vec<Notification>,
    timers: HashMap<Id, JoinHandle<()>>,
}

/// Notification list owned by one session.
///
/// Each pushed entry gets a timer that removes it after `dismiss_after`.
/// Dismissing an entry early, or dropping the center, aborts its timer so
/// no removal ever runs against stale state.
#[derive(Debug)]
pub struct NotificationCenter {
    state: Arc<Mutex<NotificationState>>,
    dismiss_after: Duration,
}

impl NotificationCenter {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(NotificationState::default())),
            dismiss_after,
        }
    }

    /// Add a notification. Outside a tokio runtime the entry stays until
    /// dismissed explicitly.
    pub fn push(&self, message: impl Into<String>, kind: NotificationKind) -> Id {
        let notification = Notification {
            id: generate_id(),
            message: message.into(),
            kind,
        };
        let id = notification.id.clone();
        log::info!("{}", notification.message);

        let mut state = self.state.lock();
        state.entries.push(notification);

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let timer = handle.spawn(expire(
                    Arc::downgrade(&self.state),
                    id.clone(),
                    self.dismiss_after,
                ));
                state.timers.insert(id.clone(), timer);
            }
            Err(_) => log::debug!("no runtime, notification {} will not auto-dismiss", id),
        }

        id
    }

    pub fn dismiss(&self, id: &str) -> bool {
        let mut state = self.state.lock();
        if let Some(timer) = state.timers.remove(id) {
            timer.abort();
        }
        let before = state.entries.len();
        state.entries.retain(|n| n.id != id);
        state.entries.len() != before
    }

    pub fn current(&self) -> Vec<Notification> {
        self.state.lock().entries.clone()
    }

    pub fn pending_timers(&self) -> usize {
        self.state.lock().timers.len()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_DISMISS_AFTER)
    }
}

impl Drop for NotificationCenter {
    fn drop(&mut self) {
        for (_, timer) in self.state.lock().timers.drain() {
            timer.abort();
        }
    }
}

async fn expire(state: Weak<Mutex<NotificationState>>, id: Id, after: Duration) {
    tokio::time::sleep(after).await;
    let Some(state) = state.upgrade() else {
        return;
    };
    let mut state = state.lock();
    state.timers.remove(&id);
    state.entries.retain(|n| n.id != id);
}
