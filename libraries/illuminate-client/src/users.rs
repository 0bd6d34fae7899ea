//! Profile, skills, contributions and growth endpoints.

use crate::client::ApiClient;
use crate::error::Result;
use crate::query::{segments_path, Query};
use crate::types::{
    ContributionFeed, GrowthProfile, IssueProgress, Page, PortfolioStats, PrState,
    ProgressListEnvelope, ProjectGroup, PublicProfile, PullRequestPage, SetSkillsRequest,
    SkillsResponse, StatusResponse, User, UserProfile, UserSkill, UserStats,
};
use reqwest::Method;
use tracing::debug;

/// Client for the `/api/users/me*` group and public profiles.
pub struct UsersClient<'a> {
    api: &'a ApiClient,
}

impl<'a> UsersClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Get the logged-in user.
    pub async fn me(&self) -> Result<User> {
        self.api.get("/api/users/me").await
    }

    /// Save onboarding answers.
    pub async fn update_profile(&self, profile: &UserProfile) -> Result<StatusResponse> {
        self.api
            .send_json(Method::PATCH, "/api/users/me/profile", profile)
            .await
    }

    /// Profile header numbers: merged/open PRs and saved issues.
    pub async fn stats(&self) -> Result<UserStats> {
        self.api.get("/api/users/me/stats").await
    }

    /// Replace the skill list with manually chosen languages.
    pub async fn set_skills(&self, languages: &[String]) -> Result<Vec<UserSkill>> {
        let response: SkillsResponse = self
            .api
            .send_json(
                Method::PUT,
                "/api/users/me/skills",
                &SetSkillsRequest { languages },
            )
            .await?;
        Ok(response.skills)
    }

    /// Re-derive skills from the user's source-forge activity.
    pub async fn analyze_skills(&self) -> Result<Vec<UserSkill>> {
        let response: SkillsResponse = self
            .api
            .send_empty(Method::POST, "/api/users/me/skills/analyze")
            .await?;
        debug!(skills = response.skills.len(), "Skills analyzed");
        Ok(response.skills)
    }

    /// List the user's pull requests.
    pub async fn prs(&self, state: PrState, page: Page) -> Result<PullRequestPage> {
        let path = Query::new()
            .push("type", state.as_str())
            .page(page)
            .to_path("/api/users/me/prs");
        self.api.get(&path).await
    }

    /// Contribution timeline, newest first.
    pub async fn contributions(&self, page: Page) -> Result<ContributionFeed> {
        let path = Query::new()
            .page(page)
            .to_path("/api/users/me/contributions");
        self.api.get(&path).await
    }

    /// Contributions grouped by repository.
    pub async fn contribution_projects(&self) -> Result<Vec<ProjectGroup>> {
        self.api.get_list("/api/users/me/contributions/projects").await
    }

    pub async fn contribution_stats(&self) -> Result<PortfolioStats> {
        self.api.get("/api/users/me/contributions/stats").await
    }

    /// Ask the server to pull fresh contribution data.
    pub async fn sync_contributions(&self) -> Result<StatusResponse> {
        self.api
            .send_empty(Method::POST, "/api/users/me/contributions/sync")
            .await
    }

    /// Progress entries for every issue the user is tracking.
    pub async fn progress(&self) -> Result<Vec<IssueProgress>> {
        let envelope: ProgressListEnvelope = self.api.get("/api/users/me/progress").await?;
        Ok(envelope.progress)
    }

    pub async fn growth(&self) -> Result<GrowthProfile> {
        self.api.get("/api/users/me/growth").await
    }

    /// Public portfolio of any user.
    pub async fn public_profile(&self, username: &str) -> Result<PublicProfile> {
        let path = segments_path(&["api", "u", username.trim()])?;
        self.api.get(&path).await
    }
}
