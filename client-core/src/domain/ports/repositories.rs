//! Repository port traits
//!
//! These traits define the interface for remote data access.
//! Implementations are provided by adapters (e.g., the REST data source,
//! in-memory test doubles). Use cases never inspect which implementation
//! they hold.

use async_trait::async_trait;

use crate::domain::entities::{
    CommentId, CommentPage, NotificationId, NotificationPage, PostId, UserId,
};
use crate::error::DomainError;

/// Repository for Comment entities
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Fetch one page of comments for a post (`page` is 1-based)
    async fn get_post_comments(
        &self,
        post_id: &PostId,
        page: u32,
        page_size: u32,
    ) -> Result<CommentPage, DomainError>;

    /// Like a comment on behalf of a user; liking twice is a no-op
    async fn like_comment(
        &self,
        user_id: &UserId,
        comment_id: &CommentId,
    ) -> Result<(), DomainError>;

    /// Remove a user's like; unliking an unliked comment is a no-op and
    /// never drops the like count below zero
    async fn unlike_comment(
        &self,
        user_id: &UserId,
        comment_id: &CommentId,
    ) -> Result<(), DomainError>;
}

/// Repository for Notification entities
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Fetch one page of the viewer's notifications (`page_index` is 0-based)
    async fn get_notifications(
        &self,
        page_index: u32,
        page_size: u32,
    ) -> Result<NotificationPage, DomainError>;

    /// Mark every notification owned by the viewer as read
    async fn mark_all_as_read(&self) -> Result<(), DomainError>;

    /// Mark a single notification as read; already-read is a no-op
    async fn mark_as_read(&self, id: &NotificationId) -> Result<(), DomainError>;
}
