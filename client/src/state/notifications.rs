//! Notification history and the transient banner.
//!
//! DESIGN
//! ======
//! `show` always prepends to the history and replaces the banner outright;
//! there is no queue. Every banner instance gets a monotonically increasing
//! `banner_seq`, and auto-hide timers hold on to the seq they were started
//! for. [`NotificationState::expire_banner`] ignores a seq that no longer
//! matches, so an old timer can never hide a newer banner.
//!
//! History is session-only and unbounded.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::icons::Icon;

/// How long the banner stays up before it hides itself.
pub const BANNER_AUTO_HIDE: Duration = Duration::from_millis(6000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    #[must_use]
    pub const fn icon(self) -> Icon {
        match self {
            Self::Success => Icon::CheckCircle,
            Self::Error => Icon::ErrorCircle,
            Self::Warning => Icon::Warning,
            Self::Info => Icon::Info,
        }
    }

    /// CSS modifier, e.g. `notification-banner--success`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: OffsetDateTime,
    pub read: bool,
}

/// Handle returned by [`NotificationState::show`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShownNotification {
    pub id: String,
    pub banner_seq: u64,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    history: Vec<Notification>,
    banner: Option<Notification>,
    banner_visible: bool,
    banner_seq: u64,
    next_seq: u64,
}

impl NotificationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a notification and make it the visible banner.
    ///
    /// Ids combine the creation time in milliseconds with a per-session
    /// counter, so two notifications in the same millisecond stay distinct.
    pub fn show(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        now: OffsetDateTime,
    ) -> ShownNotification {
        self.next_seq += 1;
        let millis = now.unix_timestamp_nanos() / 1_000_000;
        let id = format!("{millis}-{}", self.next_seq);

        let notification = Notification {
            id: id.clone(),
            kind,
            title: title.into(),
            message: message.into(),
            timestamp: now,
            read: false,
        };

        self.history.insert(0, notification.clone());
        self.banner = Some(notification);
        self.banner_visible = true;
        self.banner_seq = self.next_seq;

        ShownNotification { id, banner_seq: self.banner_seq }
    }

    /// Mark a history entry read. Unknown ids and repeat calls are no-ops.
    pub fn mark_as_read(&mut self, id: &str) {
        if let Some(entry) = self.history.iter_mut().find(|n| n.id == id) {
            entry.read = true;
        }
    }

    /// Empty the history. The banner is left as it is.
    pub fn clear_all(&mut self) {
        self.history.clear();
    }

    /// Hide the banner immediately (close button). Click-away is ignored.
    pub fn dismiss_banner(&mut self) {
        self.banner_visible = false;
    }

    /// Auto-hide callback. Returns whether the banner was actually hidden.
    pub fn expire_banner(&mut self, seq: u64) -> bool {
        if seq != self.banner_seq || !self.banner_visible {
            return false;
        }
        self.banner_visible = false;
        true
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.history.iter().filter(|n| !n.read).count()
    }

    /// Newest first.
    #[must_use]
    pub fn history(&self) -> &[Notification] {
        &self.history
    }

    #[must_use]
    pub fn banner(&self) -> Option<&Notification> {
        self.banner.as_ref()
    }

    #[must_use]
    pub fn banner_seq(&self) -> u64 {
        self.banner_seq
    }

    #[must_use]
    pub fn is_banner_visible(&self) -> bool {
        self.banner_visible && self.banner.is_some()
    }
}
