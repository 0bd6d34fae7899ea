//! Notification endpoints.

use crate::client::ApiClient;
use crate::error::Result;
use crate::query::Query;
use crate::types::{NotificationList, Page, StatusResponse, UnreadCount};
use reqwest::Method;
use uuid::Uuid;

pub struct NotificationsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> NotificationsClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, page: Page) -> Result<NotificationList> {
        let path = Query::new().page(page).to_path("/api/notifications");
        self.api.get(&path).await
    }

    pub async fn unread_count(&self) -> Result<u32> {
        let count: UnreadCount = self.api.get("/api/notifications/unread-count").await?;
        Ok(count.count)
    }

    pub async fn mark_read(&self, id: Uuid) -> Result<StatusResponse> {
        let path = format!("/api/notifications/{}/read", id);
        self.api.send_empty(Method::PATCH, &path).await
    }

    pub async fn mark_all_read(&self) -> Result<StatusResponse> {
        self.api
            .send_empty(Method::POST, "/api/notifications/read-all")
            .await
    }
}
