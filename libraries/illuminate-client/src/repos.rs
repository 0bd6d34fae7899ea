//! Category, hiring and import endpoints.

use crate::client::ApiClient;
use crate::error::Result;
use crate::query::Query;
use crate::types::{Category, HiringRepoPage, ImportRequest, ImportResult, Page};
use reqwest::Method;
use tracing::info;

pub struct ReposClient<'a> {
    api: &'a ApiClient,
}

impl<'a> ReposClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Categories used to filter the feed.
    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.api.get_list("/api/categories").await
    }

    /// Repositories actively recruiting contributors.
    pub async fn hiring(&self, page: Page) -> Result<HiringRepoPage> {
        let path = Query::new().page(page).to_path("/api/repos/hiring");
        self.api.get(&path).await
    }

    /// Index a repository by URL or `owner/name` shorthand.
    pub async fn import(&self, url: &str) -> Result<ImportResult> {
        let result: ImportResult = self
            .api
            .send_json(Method::POST, "/api/repos/import", &ImportRequest { url })
            .await?;
        info!(repo = %result.repo, "Repository imported");
        Ok(result)
    }
}
