//! Transient user-facing notifications (toasts).

use std::collections::VecDeque;

/// Maximum notifications kept at once; older ones are dropped first.
pub const MAX_NOTIFICATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub message: String,
    /// Ticks left before it disappears.
    pub ttl: u32,
}

#[derive(Debug, Clone)]
pub struct Notifications {
    queue: VecDeque<Notification>,
    lifetime: u32,
}

impl Notifications {
    pub fn new(lifetime: u32) -> Self {
        Self {
            queue: VecDeque::with_capacity(MAX_NOTIFICATIONS),
            lifetime: lifetime.max(1),
        }
    }

    pub fn push(&mut self, level: Level, title: impl Into<String>, message: impl Into<String>) {
        if self.queue.len() == MAX_NOTIFICATIONS {
            self.queue.pop_front();
        }
        self.queue.push_back(Notification {
            level,
            title: title.into(),
            message: message.into(),
            ttl: self.lifetime,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Level::Success, "Success", message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Level::Warning, "Check the form", message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Level::Error, "Error", message);
    }

    /// Age every notification by one tick and drop the expired ones.
    pub fn tick(&mut self) {
        for note in self.queue.iter_mut() {
            note.ttl = note.ttl.saturating_sub(1);
        }
        self.queue.retain(|note| note.ttl > 0);
    }

    /// Most recent notification, shown as the toast.
    pub fn latest(&self) -> Option<&Notification> {
        self.queue.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn dismiss_latest(&mut self) {
        self.queue.pop_back();
    }
}
