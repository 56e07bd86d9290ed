//! Transient notification queue.
//!
//! Notifications are short status messages ("Link copied", "Failed to copy")
//! that remove themselves after a timeout. The queue does not own a timer.
//! Instead, every timed entry leaves an [`Expiry`] in an outbox which the host
//! event loop drains with [`NotificationQueue::take_expiries`] and turns into
//! one deferred [`NotificationQueue::remove`] call per entry.

use std::collections::BTreeMap;
use std::fmt;

/// Default lifetime of a notification, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u32 = 3000;

/// Unique, monotonically increasing notification identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// CSS class used by the web UI.
    pub fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    /// `None` means the entry stays until dismissed.
    pub timeout_ms: Option<u32>,
}

/// A removal the host must schedule `after_ms` from now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    pub id: NotificationId,
    pub after_ms: u32,
}

/// Ordered set of live notifications.
///
/// Ids are handed out from a counter owned by the queue, so iteration in id
/// order is insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationQueue {
    next_id: u64,
    default_timeout_ms: Option<u32>,
    entries: BTreeMap<NotificationId, Notification>,
    pending: Vec<Expiry>,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::with_default_timeout(Some(DEFAULT_TIMEOUT_MS))
    }

    /// Queue whose [`success`](Self::success) and [`error`](Self::error)
    /// helpers use `timeout_ms`.
    pub fn with_default_timeout(timeout_ms: Option<u32>) -> Self {
        Self {
            next_id: 0,
            default_timeout_ms: timeout_ms,
            entries: BTreeMap::new(),
            pending: Vec::new(),
        }
    }

    /// Insert a notification and return its id.
    ///
    /// With a timeout, an [`Expiry`] for the new id is queued for the host.
    pub fn add(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        timeout_ms: Option<u32>,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let notification = Notification {
            id,
            kind,
            message: message.into(),
            timeout_ms,
        };
        log::debug!("notification {} ({:?}): {}", id, kind, notification.message);
        self.entries.insert(id, notification);

        if let Some(after_ms) = timeout_ms {
            self.pending.push(Expiry { id, after_ms });
        }
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.add(NotificationKind::Success, message, self.default_timeout_ms)
    }

    pub fn error(&mut self, message: impl Into<String>) -> NotificationId {
        self.add(NotificationKind::Error, message, self.default_timeout_ms)
    }

    /// Remove an entry. Unknown or already removed ids are ignored.
    pub fn remove(&mut self, id: NotificationId) -> Option<Notification> {
        self.entries.remove(&id)
    }

    /// Drain the removals the host has not scheduled yet.
    pub fn take_expiries(&mut self) -> Vec<Expiry> {
        std::mem::take(&mut self.pending)
    }

    /// Drop every entry. Expiries already handed out become no-op removals.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.pending.clear();
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.values()
    }
}
