use crate::workflow::prelude::*;
use std::{fmt::Display, future::Future, time::Duration};

pub use crate::model::memory::notify::{
    Notification, NotificationCenter, NotificationId, NotificationStatus,
};

/// How long a settled notification stays on screen. Pending notifications
/// have no duration; they live until replaced.
pub const SUCCESS_DURATION: Duration = Duration::from_millis(7500);
pub const ERROR_DURATION: Duration = Duration::from_millis(15_000);

const DEFAULT_PENDING: &str = "Your request is being processed";
const DEFAULT_SUCCESS: &str = "Your request successfully ended";
const DEFAULT_ERROR: &str = "An error occurred while processing your request. Please try again";

///
/// NotifyOptions
///
/// Optional renderers for the three lifecycle states; anything left unset
/// falls back to a generic human-readable message.
///

pub struct NotifyOptions<T, E> {
    pending: Option<Box<dyn Fn() -> String>>,
    success: Option<Box<dyn Fn(&T) -> String>>,
    error: Option<Box<dyn Fn(&E) -> String>>,
}

impl<T, E> NotifyOptions<T, E> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: None,
            success: None,
            error: None,
        }
    }

    #[must_use]
    pub fn pending(mut self, render: impl Fn() -> String + 'static) -> Self {
        self.pending = Some(Box::new(render));
        self
    }

    #[must_use]
    pub fn success(mut self, render: impl Fn(&T) -> String + 'static) -> Self {
        self.success = Some(Box::new(render));
        self
    }

    #[must_use]
    pub fn error(mut self, render: impl Fn(&E) -> String + 'static) -> Self {
        self.error = Some(Box::new(render));
        self
    }

    fn render_pending(&self) -> String {
        self.pending
            .as_ref()
            .map_or_else(|| DEFAULT_PENDING.to_string(), |f| f())
    }

    fn render_success(&self, value: &T) -> String {
        self.success
            .as_ref()
            .map_or_else(|| DEFAULT_SUCCESS.to_string(), |f| f(value))
    }

    fn render_error(&self, err: &E) -> String {
        self.error
            .as_ref()
            .map_or_else(|| DEFAULT_ERROR.to_string(), |f| f(err))
    }
}

impl<T, E> Default for NotifyOptions<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

///
/// NotifyWorkflow
///
/// Wraps an async operation with the pending → success | error lifecycle.
/// The pending notification is posted before the first poll and replaced in
/// place (same id) when the operation settles. A failure is logged and
/// swallowed: the wrapper resolves `None` and never re-throws, so callers
/// see failures only as a transient notification.
///

pub struct NotifyWorkflow;

impl NotifyWorkflow {
    pub async fn wrap<T, E, F>(fut: F, options: NotifyOptions<T, E>) -> Option<T>
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        let id = NotificationCenter::post(
            NotificationStatus::Pending,
            options.render_pending(),
            None,
        );

        match fut.await {
            Ok(value) => {
                NotificationCenter::replace(
                    id,
                    NotificationStatus::Success,
                    options.render_success(&value),
                    Some(SUCCESS_DURATION),
                );

                Some(value)
            }
            Err(err) => {
                log!(Topic::Notify, Error, "{err}");
                NotificationCenter::replace(
                    id,
                    NotificationStatus::Error,
                    options.render_error(&err),
                    Some(ERROR_DURATION),
                );

                None
            }
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{log::Level, model::memory::log::LogStore, ops::OpsError};
    use std::cell::RefCell;

    fn clear() {
        NotificationCenter::clear();
        LogStore::clear();
    }

    #[tokio::test]
    async fn success_replaces_the_pending_notification_in_place() {
        clear();

        // snapshot the center from inside the wrapped future, i.e. while
        // the pending notification is live
        let mid_flight = RefCell::new(Vec::new());
        let fut = async {
            mid_flight.borrow_mut().push(NotificationCenter::export());
            Ok::<u32, OpsError>(42)
        };

        let result = NotifyWorkflow::wrap(fut, NotifyOptions::new()).await;
        assert_eq!(result, Some(42));

        let during = &mid_flight.borrow()[0];
        assert_eq!(during.len(), 1);
        assert_eq!(during[0].status, NotificationStatus::Pending);
        assert_eq!(during[0].message, DEFAULT_PENDING);
        assert_eq!(during[0].duration, None);

        let after = NotificationCenter::export();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].id, during[0].id);
        assert_eq!(after[0].status, NotificationStatus::Success);
        assert_eq!(after[0].message, DEFAULT_SUCCESS);
        assert_eq!(after[0].duration, Some(SUCCESS_DURATION));
    }

    #[tokio::test]
    async fn failure_is_swallowed_logged_and_rendered() {
        clear();

        let fut = async { Err::<u32, OpsError>(OpsError::Config("boom".to_string())) };
        let result = NotifyWorkflow::wrap(fut, NotifyOptions::new()).await;

        assert_eq!(result, None);

        let after = NotificationCenter::export();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].status, NotificationStatus::Error);
        assert_eq!(after[0].message, DEFAULT_ERROR);
        assert_eq!(after[0].duration, Some(ERROR_DURATION));

        assert_eq!(LogStore::count_at(Level::Error), 1);
    }

    #[tokio::test]
    async fn custom_renderers_take_precedence() {
        clear();

        let options = NotifyOptions::new()
            .pending(|| "sending".to_string())
            .success(|n: &u32| format!("sent {n}"))
            .error(|e: &OpsError| format!("failed: {e}"));

        let result = NotifyWorkflow::wrap(async { Ok::<u32, OpsError>(7) }, options).await;
        assert_eq!(result, Some(7));

        let after = NotificationCenter::export();
        assert_eq!(after[0].message, "sent 7");
    }
}
