//! Notification layer: a single queue of transient user-facing messages.
//!
//! Replaces the page's two DOM-bound notifier variants with one emitter.
//! Time is always passed in by the caller, so expiry is testable without a
//! clock, and observers register explicitly instead of listening for
//! bubbled DOM events.

use std::time::{Duration, Instant};

/// How long a notification stays up when no duration is given.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Visual flavor of a notification.
pub enum Kind {
    Success,
    Error,
    Warning,
    Info,
}

impl Kind {
    /// Icon name shown next to the message.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "check-circle",
            Self::Error | Self::Warning => "exclamation-triangle",
            Self::Info => "info-circle",
        }
    }

    /// CSS class suffix (`flash-success`, `flash-error`, ...).
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "flash-success",
            Self::Error => "flash-error",
            Self::Warning => "flash-warning",
            Self::Info => "flash-info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Handle for dismissing a posted notification.
pub struct NotificationId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
/// One posted notification.
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: Kind,
    pub posted_at: Instant,
    pub deadline: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Why a notification left the queue.
pub enum DismissReason {
    /// Removed early through [`Notifier::dismiss`].
    Closed,
    /// Deadline passed during a [`Notifier::sweep`].
    Expired,
}

/// Observer for notification lifecycle events.
pub trait NotificationSink {
    fn posted(&self, notification: &Notification);
    fn dismissed(&self, id: NotificationId, reason: DismissReason);
}

#[derive(Default)]
/// Queue of active notifications, in posting order.
///
/// Notifications stack without a cap; each carries its own deadline and
/// they expire independently of one another.
pub struct Notifier {
    next_id: u64,
    active: Vec<Notification>,
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for posted/dismissed events.
    pub fn subscribe(&mut self, sink: impl NotificationSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Post a notification with the default duration.
    pub fn notify(&mut self, message: impl Into<String>, kind: Kind) -> NotificationId {
        self.notify_at(Instant::now(), message, kind, DEFAULT_DURATION)
    }

    /// Post a notification with an explicit duration.
    pub fn notify_for(
        &mut self,
        message: impl Into<String>,
        kind: Kind,
        duration: Duration,
    ) -> NotificationId {
        self.notify_at(Instant::now(), message, kind, duration)
    }

    /// Post a notification relative to an explicit `now`.
    pub fn notify_at(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        kind: Kind,
        duration: Duration,
    ) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        let notification = Notification {
            id,
            message: message.into(),
            kind,
            posted_at: now,
            deadline: now + duration,
        };

        for sink in &self.sinks {
            sink.posted(&notification);
        }
        self.active.push(notification);
        id
    }

    /// Remove a notification early. Returns whether it was still active.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let Some(index) = self.active.iter().position(|n| n.id == id) else {
            return false;
        };
        self.active.remove(index);
        for sink in &self.sinks {
            sink.dismissed(id, DismissReason::Closed);
        }
        true
    }

    /// Drop and return every notification whose deadline has passed.
    pub fn sweep(&mut self, now: Instant) -> Vec<Notification> {
        let mut expired = Vec::new();
        self.active.retain(|notification| {
            if notification.is_expired(now) {
                expired.push(notification.clone());
                false
            } else {
                true
            }
        });

        for notification in &expired {
            for sink in &self.sinks {
                sink.dismissed(notification.id, DismissReason::Expired);
            }
        }
        expired
    }

    /// Active notifications, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
