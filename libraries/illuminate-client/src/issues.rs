//! Issue feed, search, saving and progress tracking.

use crate::client::ApiClient;
use crate::error::Result;
use crate::query::Query;
use crate::types::{
    DeepDive, FeedQuery, Issue, IssueComment, IssueFeed, IssueProgress, Page, ProgressEnvelope,
    ProgressStatus, SavedFlag, StatusResponse,
};
use reqwest::Method;
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

/// Client for the `/api/issues*` group.
pub struct IssuesClient<'a> {
    api: &'a ApiClient,
}

impl<'a> IssuesClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Personalised feed of issues matched to the user's skills.
    pub async fn feed(&self, query: &FeedQuery) -> Result<IssueFeed> {
        let path = query.to_query().to_path("/api/issues/feed");
        let feed: IssueFeed = self.api.get(&path).await?;

        debug!(
            issues = feed.issues.len(),
            total = feed.total_count,
            page = feed.page,
            "Fetched issue feed"
        );

        Ok(feed)
    }

    /// Full-text search over indexed issues.
    pub async fn search(&self, query: &str, page: Page) -> Result<IssueFeed> {
        let path = Query::new()
            .push("q", query)
            .page(page)
            .to_path("/api/issues/search");

        let feed: IssueFeed = self.api.get(&path).await?;
        debug!(query = %query, results = feed.issues.len(), "Search complete");
        Ok(feed)
    }

    /// Get a single issue by ID.
    pub async fn get(&self, id: Uuid) -> Result<Issue> {
        self.api.get(&format!("/api/issues/{}", id)).await
    }

    pub async fn comments(&self, id: Uuid) -> Result<Vec<IssueComment>> {
        self.api.get_list(&format!("/api/issues/{}/comments", id)).await
    }

    /// AI briefing for the issue. Generated on first request, cached after.
    pub async fn deep_dive(&self, id: Uuid) -> Result<DeepDive> {
        self.api.get(&format!("/api/issues/{}/deep-dive", id)).await
    }

    pub async fn save(&self, id: Uuid) -> Result<StatusResponse> {
        self.api
            .send_empty(Method::POST, &format!("/api/issues/{}/save", id))
            .await
    }

    pub async fn unsave(&self, id: Uuid) -> Result<StatusResponse> {
        self.api
            .send_empty(Method::DELETE, &format!("/api/issues/{}/save", id))
            .await
    }

    pub async fn is_saved(&self, id: Uuid) -> Result<bool> {
        let flag: SavedFlag = self.api.get(&format!("/api/issues/{}/saved", id)).await?;
        Ok(flag.saved)
    }

    /// Issues the user bookmarked.
    pub async fn saved(&self, page: Page) -> Result<IssueFeed> {
        let path = Query::new().page(page).to_path("/api/issues/saved");
        self.api.get(&path).await
    }

    /// Progress on one issue; `None` when the user is not tracking it.
    pub async fn progress(&self, id: Uuid) -> Result<Option<IssueProgress>> {
        let envelope: ProgressEnvelope = self
            .api
            .get(&format!("/api/issues/{}/progress", id))
            .await?;
        Ok(envelope.progress)
    }

    pub async fn set_progress(&self, id: Uuid, status: ProgressStatus) -> Result<IssueProgress> {
        let envelope: ProgressEnvelope = self
            .api
            .send_json(
                Method::PUT,
                &format!("/api/issues/{}/progress", id),
                &json!({ "status": status }),
            )
            .await?;
        progress_or_missing(envelope)
    }

    pub async fn add_progress_note(&self, id: Uuid, note: &str) -> Result<IssueProgress> {
        let envelope: ProgressEnvelope = self
            .api
            .send_json(
                Method::POST,
                &format!("/api/issues/{}/progress/notes", id),
                &json!({ "note": note }),
            )
            .await?;
        progress_or_missing(envelope)
    }

    pub async fn clear_progress(&self, id: Uuid) -> Result<StatusResponse> {
        self.api
            .send_empty(Method::DELETE, &format!("/api/issues/{}/progress", id))
            .await
    }
}

fn progress_or_missing(envelope: ProgressEnvelope) -> Result<IssueProgress> {
    envelope
        .progress
        .ok_or_else(|| crate::error::ApiError::Parse("response carried no progress".into()))
}
