//! Admin panel endpoints.
//!
//! All of these require an account with the `admin` role; the server
//! answers `403` otherwise.

use crate::client::ApiClient;
use crate::error::Result;
use crate::query::Query;
use crate::types::{
    AdminStats, AssignCategoryRequest, Category, JobStatus, Page, RepoList, RepoMetadata,
    RoleRequest, StatusResponse, UserList,
};
use reqwest::Method;
use tracing::info;
use uuid::Uuid;

pub struct AdminClient<'a> {
    api: &'a ApiClient,
}

impl<'a> AdminClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn stats(&self) -> Result<AdminStats> {
        self.api.get("/admin/stats").await
    }

    pub async fn users(&self, page: Page) -> Result<UserList> {
        let path = Query::new().page(page).to_path("/admin/users");
        self.api.get(&path).await
    }

    pub async fn set_user_role(&self, user_id: Uuid, role: &str) -> Result<StatusResponse> {
        let path = format!("/admin/users/{}/role", user_id);
        self.api
            .send_json(Method::PATCH, &path, &RoleRequest { role })
            .await
    }

    /// Start seeding the index with the curated repository list.
    pub async fn trigger_seed(&self) -> Result<JobStatus> {
        self.trigger("seed").await
    }

    /// Start re-indexing issues of known repositories.
    pub async fn trigger_index(&self) -> Result<JobStatus> {
        self.trigger("index").await
    }

    /// Start discovering new repositories.
    pub async fn trigger_discover(&self) -> Result<JobStatus> {
        self.trigger("discover").await
    }

    async fn trigger(&self, job: &str) -> Result<JobStatus> {
        let status: JobStatus = self
            .api
            .send_empty(Method::POST, &format!("/admin/{}", job))
            .await?;
        info!(job = %job, id = %status.id, "Admin job started");
        Ok(status)
    }

    pub async fn jobs(&self) -> Result<Vec<JobStatus>> {
        self.api.get_list("/admin/jobs").await
    }

    pub async fn repos(&self, page: Page) -> Result<RepoList> {
        let path = Query::new().page(page).to_path("/admin/repos");
        self.api.get(&path).await
    }

    pub async fn delete_repo(&self, repo_id: Uuid) -> Result<StatusResponse> {
        self.api
            .send_empty(Method::DELETE, &format!("/admin/repos/{}", repo_id))
            .await
    }

    pub async fn update_repo_metadata(
        &self,
        repo_id: Uuid,
        metadata: &RepoMetadata,
    ) -> Result<StatusResponse> {
        let path = format!("/admin/repos/{}/metadata", repo_id);
        self.api.send_json(Method::PATCH, &path, metadata).await
    }

    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.api.get_list("/admin/categories").await
    }

    pub async fn assign_category(
        &self,
        repo_id: Uuid,
        category_id: Uuid,
    ) -> Result<StatusResponse> {
        let path = format!("/admin/repos/{}/categories", repo_id);
        self.api
            .send_json(Method::POST, &path, &AssignCategoryRequest { category_id })
            .await
    }

    pub async fn remove_category(
        &self,
        repo_id: Uuid,
        category_id: Uuid,
    ) -> Result<StatusResponse> {
        let path = format!("/admin/repos/{}/categories/{}", repo_id, category_id);
        self.api.send_empty(Method::DELETE, &path).await
    }
}
