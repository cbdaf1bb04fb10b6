//! Notification bell state for the dashboard header.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filled by the notification poller while a user is signed in and cleared
//! the moment the session ends.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use marketplace_session::notifications::{self, Notification};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    /// Dropdown visibility.
    pub open: bool,
}

impl NotificationsState {
    pub fn unread(&self) -> usize {
        notifications::unread_count(&self.items)
    }

    /// Replace the list with a fresh poll result. Failed polls keep the
    /// previous list.
    pub fn apply_poll(&mut self, result: Result<Vec<Notification>, String>) {
        match result {
            Ok(items) => self.items = items,
            Err(e) => leptos::logging::warn!("notifications: poll failed: {e}"),
        }
    }

    pub fn mark_read(&mut self, id: &str) {
        notifications::mark_read(&mut self.items, id);
    }

    pub fn mark_all_read(&mut self) {
        notifications::mark_all_read(&mut self.items);
    }

    /// Forget everything; used on sign-out.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
