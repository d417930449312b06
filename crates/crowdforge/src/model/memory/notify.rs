use derive_more::Display;
use std::{cell::RefCell, time::Duration};

thread_local! {
    static NOTIFICATIONS: RefCell<NotifyData> = RefCell::new(NotifyData::default());
}

///
/// NotifyData
///

#[derive(Debug, Default)]
struct NotifyData {
    next_id: u64,
    entries: Vec<Notification>,
}

///
/// NotificationId
///

pub type NotificationId = u64;

///
/// NotificationStatus
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum NotificationStatus {
    Pending,
    Success,
    Error,
}

///
/// Notification
///
/// `duration` is how long a renderer should keep the entry on screen;
/// `None` means until it is replaced or closed.
///

#[derive(Clone, Debug)]
pub struct Notification {
    pub id: NotificationId,
    pub status: NotificationStatus,
    pub message: String,
    pub duration: Option<Duration>,
}

///
/// NotificationCenter
///
/// The live set of notifications, in posting order. A settled operation
/// replaces its pending entry in place under the same id, so consumers see
/// one notification per operation, never a pending/terminal pair.
///

pub struct NotificationCenter;

impl NotificationCenter {
    /// Post a new notification, returning its id.
    pub fn post(
        status: NotificationStatus,
        message: impl Into<String>,
        duration: Option<Duration>,
    ) -> NotificationId {
        NOTIFICATIONS.with_borrow_mut(|data| {
            data.next_id += 1;
            let id = data.next_id;

            data.entries.push(Notification {
                id,
                status,
                message: message.into(),
                duration,
            });

            id
        })
    }

    /// Replace an existing notification in place, keeping its position.
    /// Returns false when the id is no longer live.
    pub fn replace(
        id: NotificationId,
        status: NotificationStatus,
        message: impl Into<String>,
        duration: Option<Duration>,
    ) -> bool {
        NOTIFICATIONS.with_borrow_mut(|data| {
            let Some(entry) = data.entries.iter_mut().find(|n| n.id == id) else {
                return false;
            };

            entry.status = status;
            entry.message = message.into();
            entry.duration = duration;

            true
        })
    }

    /// Close a notification by id.
    pub fn remove(id: NotificationId) {
        NOTIFICATIONS.with_borrow_mut(|data| {
            data.entries.retain(|n| n.id != id);
        });
    }

    /// Snapshot of the live notifications, in posting order.
    #[must_use]
    pub fn export() -> Vec<Notification> {
        NOTIFICATIONS.with_borrow(|data| data.entries.clone())
    }

    #[cfg(test)]
    pub(crate) fn clear() {
        NOTIFICATIONS.with_borrow_mut(|data| *data = NotifyData::default());
    }
}

///
/// TESTS
///
