//! Comment use cases
//!
//! Paged comment fetching and like state for comments on a post.

use std::sync::Arc;

use crate::app::log_failure;
use crate::domain::entities::{CommentId, CommentPage, PostId, UserId};
use crate::domain::ports::CommentRepository;
use crate::error::DomainError;

fn require_identity(user_id: &UserId, comment_id: &CommentId) -> Result<(), DomainError> {
    if user_id.is_empty() || comment_id.is_empty() {
        return Err(DomainError::InvalidArgument(
            "User ID and Comment ID are required".to_string(),
        ));
    }
    Ok(())
}

/// Fetch one page of comments for a post.
///
/// Exists to pin the shape of the pagination contract at the boundary
/// between UI and data layer: swapping the repository implementation never
/// changes caller code. A malformed request is rejected before it reaches
/// the data source.
pub struct GetPostComments<R: CommentRepository> {
    comments: Arc<R>,
}

impl<R: CommentRepository> GetPostComments<R> {
    pub fn new(comments: Arc<R>) -> Self {
        Self { comments }
    }

    /// `page` is 1-based; both `page` and `page_size` must be positive.
    pub async fn execute(
        &self,
        post_id: &PostId,
        page: u32,
        page_size: u32,
    ) -> Result<CommentPage, DomainError> {
        if post_id.is_empty() {
            return Err(DomainError::InvalidArgument(
                "Post ID is required".to_string(),
            ));
        }
        if page == 0 || page_size == 0 {
            return Err(DomainError::InvalidArgument(format!(
                "page and page_size must be positive, got page={} page_size={}",
                page, page_size
            )));
        }

        log_failure(
            "get_post_comments",
            self.comments.get_post_comments(post_id, page, page_size).await,
        )
    }
}

/// Like a comment on behalf of a user.
///
/// Idempotent: liking an already-liked comment confirms success without
/// changing state.
pub struct LikeComment<R: CommentRepository> {
    comments: Arc<R>,
}

impl<R: CommentRepository> LikeComment<R> {
    pub fn new(comments: Arc<R>) -> Self {
        Self { comments }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        comment_id: &CommentId,
    ) -> Result<(), DomainError> {
        require_identity(user_id, comment_id)?;

        log_failure(
            "like_comment",
            self.comments.like_comment(user_id, comment_id).await,
        )
    }
}

/// Remove a user's like from a comment.
///
/// Fails fast when either identity argument is missing, before the
/// repository is touched. Success is the absence of an error; unliking an
/// already-unliked comment is a no-op.
pub struct UnlikeComment<R: CommentRepository> {
    comments: Arc<R>,
}

impl<R: CommentRepository> UnlikeComment<R> {
    pub fn new(comments: Arc<R>) -> Self {
        Self { comments }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        comment_id: &CommentId,
    ) -> Result<(), DomainError> {
        require_identity(user_id, comment_id)?;

        log_failure(
            "unlike_comment",
            self.comments.unlike_comment(user_id, comment_id).await,
        )
    }
}
