//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing. They
//! store data behind `RwLock`s and count repository calls so tests can
//! assert that validation short-circuits before dispatch.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{
    Comment, CommentId, CommentPage, Notification, NotificationId, NotificationPage,
    PaginationMeta, PostId, UserId,
};
use crate::domain::ports::{CommentRepository, NotificationRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Comment Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: Arc<RwLock<Vec<Comment>>>,
    likes: Arc<RwLock<HashSet<(String, String)>>>,
    calls: Arc<AtomicUsize>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with comments for testing
    pub fn with_comments(self, comments: Vec<Comment>) -> Self {
        self.comments.write().unwrap().extend(comments);
        self
    }

    /// How many repository methods have been invoked
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn like_count_of(&self, comment_id: &CommentId) -> Option<u64> {
        self.comments
            .read()
            .unwrap()
            .iter()
            .find(|c| &c.id == comment_id)
            .map(|c| c.like_count)
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn get_post_comments(
        &self,
        post_id: &PostId,
        page: u32,
        page_size: u32,
    ) -> Result<CommentPage, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let comments = self.comments.read().unwrap();
        let matching: Vec<Comment> = comments
            .iter()
            .filter(|c| &c.post_id == post_id)
            .cloned()
            .collect();

        let total_count = matching.len() as u64;
        let total_pages = PaginationMeta::new(page, page_size, total_count).total_pages;
        let start = (page as usize - 1) * page_size as usize;
        let items = matching
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .collect();

        Ok(CommentPage {
            items,
            total_count,
            total_pages,
        })
    }

    async fn like_comment(
        &self,
        user_id: &UserId,
        comment_id: &CommentId,
    ) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let key = (user_id.to_string(), comment_id.to_string());
        let newly_liked = self.likes.write().unwrap().insert(key);
        if newly_liked {
            if let Some(c) = self
                .comments
                .write()
                .unwrap()
                .iter_mut()
                .find(|c| &c.id == comment_id)
            {
                c.like_count += 1;
            }
        }
        Ok(())
    }

    async fn unlike_comment(
        &self,
        user_id: &UserId,
        comment_id: &CommentId,
    ) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let key = (user_id.to_string(), comment_id.to_string());
        let was_liked = self.likes.write().unwrap().remove(&key);
        if was_liked {
            if let Some(c) = self
                .comments
                .write()
                .unwrap()
                .iter_mut()
                .find(|c| &c.id == comment_id)
            {
                c.like_count = c.like_count.saturating_sub(1);
            }
        }
        Ok(())
    }
}

// ============================================================================
// In-Memory Notification Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryNotificationRepository {
    notifications: Arc<RwLock<Vec<Notification>>>,
    last_query: Arc<RwLock<Option<(u32, u32)>>>,
    calls: Arc<AtomicUsize>,
}

impl InMemoryNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with notifications for testing
    pub fn with_notifications(self, notifications: Vec<Notification>) -> Self {
        self.notifications.write().unwrap().extend(notifications);
        self
    }

    /// How many repository methods have been invoked
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The (page_index, page_size) of the most recent fetch
    pub fn last_query(&self) -> Option<(u32, u32)> {
        *self.last_query.read().unwrap()
    }

    /// Current state of every stored notification
    pub fn snapshot(&self) -> Vec<Notification> {
        self.notifications.read().unwrap().clone()
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn get_notifications(
        &self,
        page_index: u32,
        page_size: u32,
    ) -> Result<NotificationPage, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.write().unwrap() = Some((page_index, page_size));

        let notifications = self.notifications.read().unwrap();
        let total = notifications.len() as u64;
        let items: Vec<Notification> = notifications
            .iter()
            .skip(page_index as usize * page_size as usize)
            .take(page_size as usize)
            .cloned()
            .collect();

        Ok(NotificationPage {
            items,
            pagination: PaginationMeta::new(page_index + 1, page_size, total),
        })
    }

    async fn mark_all_as_read(&self) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        for n in self.notifications.write().unwrap().iter_mut() {
            n.read = true;
        }
        Ok(())
    }

    async fn mark_as_read(&self, id: &NotificationId) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut notifications = self.notifications.write().unwrap();
        match notifications.iter_mut().find(|n| &n.id == id) {
            Some(n) => {
                n.read = true;
                Ok(())
            }
            None => Err(DomainError::NotFound(format!(
                "Notification {} not found",
                id
            ))),
        }
    }
}

// ============================================================================
// Failing Notification Repository
// ============================================================================

/// Rejects every call with a `DataSource` error carrying a fixed message,
/// for propagation assertions.
pub struct FailingNotificationRepository {
    message: String,
}

impl FailingNotificationRepository {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    fn fail<T>(&self) -> Result<T, DomainError> {
        Err(DomainError::DataSource(self.message.clone()))
    }
}

#[async_trait]
impl NotificationRepository for FailingNotificationRepository {
    async fn get_notifications(
        &self,
        _page_index: u32,
        _page_size: u32,
    ) -> Result<NotificationPage, DomainError> {
        self.fail()
    }

    async fn mark_all_as_read(&self) -> Result<(), DomainError> {
        self.fail()
    }

    async fn mark_as_read(&self, _id: &NotificationId) -> Result<(), DomainError> {
        self.fail()
    }
}
