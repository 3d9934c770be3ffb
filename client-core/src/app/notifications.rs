//! Notification use cases
//!
//! Paged notification fetching and the one-directional `unread -> read`
//! transitions.

use std::sync::Arc;

use crate::app::log_failure;
use crate::domain::entities::{NotificationId, NotificationPage};
use crate::domain::ports::NotificationRepository;
use crate::error::DomainError;

/// First page when the caller doesn't choose one
pub const DEFAULT_PAGE_INDEX: u32 = 0;
/// Generous page size so most inboxes fit in a single fetch
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Fetch one page of the viewer's notifications.
///
/// The repository result is returned unchanged; failures are logged and
/// re-thrown, never swallowed.
pub struct GetNotifications<R: NotificationRepository> {
    notifications: Arc<R>,
}

impl<R: NotificationRepository> GetNotifications<R> {
    pub fn new(notifications: Arc<R>) -> Self {
        Self { notifications }
    }

    /// `page_index` is 0-based and defaults to [`DEFAULT_PAGE_INDEX`];
    /// `page_size` defaults to [`DEFAULT_PAGE_SIZE`].
    pub async fn execute(
        &self,
        page_index: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<NotificationPage, DomainError> {
        let page_index = page_index.unwrap_or(DEFAULT_PAGE_INDEX);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        log_failure(
            "get_notifications",
            self.notifications.get_notifications(page_index, page_size).await,
        )
    }
}

/// Mark every notification owned by the viewer as read.
///
/// Bulk idempotent: running it twice leaves the same terminal state as
/// running it once.
pub struct MarkAllNotificationsAsRead<R: NotificationRepository> {
    notifications: Arc<R>,
}

impl<R: NotificationRepository> MarkAllNotificationsAsRead<R> {
    pub fn new(notifications: Arc<R>) -> Self {
        Self { notifications }
    }

    pub async fn execute(&self) -> Result<(), DomainError> {
        log_failure(
            "mark_all_notifications_as_read",
            self.notifications.mark_all_as_read().await,
        )
    }
}

/// Mark a single notification as read.
///
/// Marking an already-read notification succeeds as a no-op.
pub struct MarkNotificationAsRead<R: NotificationRepository> {
    notifications: Arc<R>,
}

impl<R: NotificationRepository> MarkNotificationAsRead<R> {
    pub fn new(notifications: Arc<R>) -> Self {
        Self { notifications }
    }

    pub async fn execute(&self, id: &NotificationId) -> Result<(), DomainError> {
        if id.is_empty() {
            return Err(DomainError::InvalidArgument(
                "Notification ID is required".to_string(),
            ));
        }

        log_failure(
            "mark_notification_as_read",
            self.notifications.mark_as_read(id).await,
        )
    }
}
