//! REST adapter for NotificationRepository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use urlencoding::encode;

use super::client::{PaginatedResponse, PaginationDto, RestClient};
use crate::domain::entities::{
    Notification, NotificationId, NotificationKind, NotificationPage, PaginationMeta,
};
use crate::domain::ports::NotificationRepository;
use crate::error::DomainError;

/// REST implementation of NotificationRepository
pub struct RestNotificationRepository {
    api: Arc<RestClient>,
}

impl RestNotificationRepository {
    pub fn new(api: Arc<RestClient>) -> Self {
        Self { api }
    }
}

/// Wire shape of a notification
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NotificationDto {
    id: String,
    kind: String,
    message: String,
    read: bool,
    created_at: DateTime<Utc>,
}

impl From<NotificationDto> for Notification {
    fn from(d: NotificationDto) -> Self {
        Notification {
            id: NotificationId::from(d.id),
            kind: d.kind.parse().unwrap_or(NotificationKind::Other),
            message: d.message,
            read: d.read,
            created_at: d.created_at,
        }
    }
}

impl From<PaginationDto> for PaginationMeta {
    fn from(d: PaginationDto) -> Self {
        PaginationMeta {
            page: d.page,
            limit: d.limit,
            total: d.total,
            total_pages: d.total_pages,
        }
    }
}

#[async_trait]
impl NotificationRepository for RestNotificationRepository {
    async fn get_notifications(
        &self,
        page_index: u32,
        page_size: u32,
    ) -> Result<NotificationPage, DomainError> {
        // The port speaks 0-based page indexes; the wire is 1-based.
        let page = page_index + 1;
        let envelope: PaginatedResponse<NotificationDto> = self
            .api
            .get_page(
                "/notifications",
                &[("page", page.to_string()), ("limit", page_size.to_string())],
            )
            .await?;

        Ok(NotificationPage {
            items: envelope.data.into_iter().map(Notification::from).collect(),
            pagination: envelope.pagination.into(),
        })
    }

    async fn mark_all_as_read(&self) -> Result<(), DomainError> {
        self.api.put("/notifications/read-all").await?;
        Ok(())
    }

    async fn mark_as_read(&self, id: &NotificationId) -> Result<(), DomainError> {
        let path = format!("/notifications/{}/read", encode(id.as_str()));
        self.api.put(&path).await?;
        Ok(())
    }
}
