//! REST adapter for CommentRepository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use urlencoding::encode;

use super::client::{PaginatedResponse, RestClient};
use crate::domain::entities::{Comment, CommentId, CommentPage, PostId, UserId};
use crate::domain::ports::CommentRepository;
use crate::error::DomainError;

/// REST implementation of CommentRepository
pub struct RestCommentRepository {
    api: Arc<RestClient>,
}

impl RestCommentRepository {
    pub fn new(api: Arc<RestClient>) -> Self {
        Self { api }
    }
}

/// Wire shape of a comment
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentDto {
    id: String,
    post_id: String,
    author_id: String,
    author_name: String,
    body: String,
    like_count: u64,
    liked_by_me: bool,
    created_at: DateTime<Utc>,
}

impl From<CommentDto> for Comment {
    fn from(d: CommentDto) -> Self {
        Comment {
            id: CommentId::from(d.id),
            post_id: PostId::from(d.post_id),
            author_id: UserId::from(d.author_id),
            author_name: d.author_name,
            body: d.body,
            like_count: d.like_count,
            liked_by_me: d.liked_by_me,
            created_at: d.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LikeRequest<'a> {
    user_id: &'a str,
}

#[async_trait]
impl CommentRepository for RestCommentRepository {
    async fn get_post_comments(
        &self,
        post_id: &PostId,
        page: u32,
        page_size: u32,
    ) -> Result<CommentPage, DomainError> {
        let path = format!("/posts/{}/comments", encode(post_id.as_str()));
        let envelope: PaginatedResponse<CommentDto> = self
            .api
            .get_page(
                &path,
                &[("page", page.to_string()), ("limit", page_size.to_string())],
            )
            .await?;

        Ok(CommentPage {
            items: envelope.data.into_iter().map(Comment::from).collect(),
            total_count: envelope.pagination.total,
            total_pages: envelope.pagination.total_pages,
        })
    }

    async fn like_comment(
        &self,
        user_id: &UserId,
        comment_id: &CommentId,
    ) -> Result<(), DomainError> {
        let path = format!("/comments/{}/likes", encode(comment_id.as_str()));
        let body = LikeRequest {
            user_id: user_id.as_str(),
        };

        self.api.post_json(&path, &body).await?;
        Ok(())
    }

    async fn unlike_comment(
        &self,
        user_id: &UserId,
        comment_id: &CommentId,
    ) -> Result<(), DomainError> {
        let path = format!(
            "/comments/{}/likes/{}",
            encode(comment_id.as_str()),
            encode(user_id.as_str())
        );

        self.api.delete(&path).await?;
        Ok(())
    }
}
