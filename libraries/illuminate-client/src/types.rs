//! Types for Illuminate API requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Base URL used when no origin is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "ILLUMINATE_API_BASE";

/// Configuration for connecting to the Illuminate API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "https://illuminate.example.com").
    /// Empty means same-origin.
    pub url: String,
    /// Access token cookie to seed the session with
    pub access_token: Option<String>,
    /// Refresh token cookie to seed the session with
    pub refresh_token: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a new config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: None,
            refresh_token: None,
            timeout_secs: 30,
        }
    }

    /// Create a config with existing session cookies.
    pub fn with_session(
        url: impl Into<String>,
        access_token: impl Into<String>,
        refresh_token: Option<String>,
    ) -> Self {
        Self {
            access_token: Some(access_token.into()),
            refresh_token,
            ..Self::new(url)
        }
    }

    /// Read the base URL from `ILLUMINATE_API_BASE`, empty when unset.
    pub fn from_env() -> Self {
        Self::new(std::env::var(BASE_URL_ENV).unwrap_or_default())
    }
}

/// Read a JSON `null` as the type's default.
///
/// The API encodes empty collections as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Page selector for paginated endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub per_page: u32,
}

impl Page {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
        }
    }
}

/// Generic `{"status": "..."}` acknowledgement.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
}

// =============================================================================
// User Types
// =============================================================================

/// The logged-in user.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub id: Uuid,
    pub github_id: i64,
    pub github_username: String,
    pub avatar_url: String,
    pub bio: String,
    #[serde(default)]
    pub role: Option<String>,
    pub comfort_level: String,
    pub time_commitment: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub goals: Vec<String>,
    pub onboarding_done: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<UserSkill>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct UserSkill {
    pub language: String,
    pub proficiency: f32,
    pub source: String,
}

/// Onboarding answers sent with a profile update.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct UserProfile {
    pub comfort_level: String,
    pub time_commitment: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub goals: Vec<String>,
}

/// Profile page summary returned by `/api/users/me/stats`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserStats {
    pub user: User,
    pub merged_pr_count: u32,
    pub open_pr_count: u32,
    pub saved_count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SetSkillsRequest<'a> {
    pub languages: &'a [String],
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<UserSkill>,
}

/// Which pull requests to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrState {
    #[default]
    Open,
    Merged,
}

impl PrState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrState::Open => "open",
            PrState::Merged => "merged",
        }
    }
}

/// A pull request as reported by the source forge search API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PullRequest {
    pub id: i64,
    pub number: u32,
    pub title: String,
    pub state: String,
    pub html_url: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub closed_at: Option<String>,
    #[serde(default)]
    pub pull_request: Option<PullRequestLinks>,
    #[serde(default)]
    pub repository_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<Label>,
}

impl PullRequest {
    pub fn merged_at(&self) -> Option<&str> {
        self.pull_request
            .as_ref()
            .and_then(|p| p.merged_at.as_deref())
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PullRequestLinks {
    #[serde(default)]
    pub merged_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PullRequestPage {
    pub total_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<PullRequest>,
}

// =============================================================================
// Issue Types
// =============================================================================

/// A contribution opportunity mirrored from a source-forge issue.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Issue {
    pub id: Uuid,
    pub github_id: i64,
    pub repo_id: Uuid,
    pub number: u32,
    pub title: String,
    pub body: String,
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<String>,
    pub difficulty: u8,
    pub time_estimate: String,
    pub status: String,
    pub comment_count: u32,
    pub freshness_score: f32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub indexed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub repo: Option<Repository>,
    #[serde(default)]
    pub skills: Option<Vec<IssueSkill>>,
    #[serde(default)]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub match_reasons: Option<Vec<String>>,
    #[serde(default)]
    pub is_saved: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct IssueSkill {
    pub language: String,
    #[serde(default)]
    pub framework: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IssueFeed {
    #[serde(default, deserialize_with = "null_as_default")]
    pub issues: Vec<Issue>,
    pub total_count: u32,
    pub page: u32,
    pub per_page: u32,
}

/// Difficulty filter accepted by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
}

/// Filters for the personalised issue feed.
#[derive(Debug, Clone, Default)]
pub struct FeedQuery {
    pub page: Page,
    pub languages: Vec<String>,
    pub difficulty: Option<Difficulty>,
    /// Category slug
    pub category: Option<String>,
}

/// A comment on an issue, straight from the source forge.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IssueComment {
    pub id: i64,
    pub body: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    pub user: CommentAuthor,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommentAuthor {
    pub login: String,
    pub avatar_url: String,
}

/// AI-generated briefing attached to an issue.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeepDive {
    pub id: Uuid,
    pub issue_id: Uuid,
    pub user_id: Uuid,
    pub project_overview: String,
    pub issue_context: String,
    pub suggested_approach: String,
    pub questions_to_ask: String,
    pub red_flags: String,
    pub model_used: String,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SavedFlag {
    pub saved: bool,
}

/// Where the user is with an issue they picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    Interested,
    Researching,
    Working,
    PrSubmitted,
    Completed,
    Abandoned,
}

impl ProgressStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressStatus::Interested => "interested",
            ProgressStatus::Researching => "researching",
            ProgressStatus::Working => "working",
            ProgressStatus::PrSubmitted => "pr_submitted",
            ProgressStatus::Completed => "completed",
            ProgressStatus::Abandoned => "abandoned",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IssueProgress {
    pub id: Uuid,
    pub user_id: Uuid,
    pub issue_id: Uuid,
    pub status: ProgressStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProgressEnvelope {
    pub progress: Option<IssueProgress>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProgressListEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub progress: Vec<IssueProgress>,
}

// =============================================================================
// Repository Types
// =============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Repository {
    pub id: Uuid,
    pub owner: String,
    pub name: String,
    pub description: String,
    pub stars: u32,
    pub primary_language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics: Vec<String>,
    pub health_score: f32,
    #[serde(default)]
    pub github_id: Option<i64>,
    #[serde(default)]
    pub has_contributing: Option<bool>,
    #[serde(default)]
    pub last_commit_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub difficulty_level: Option<String>,
    #[serde(default)]
    pub activity_status: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
}

impl Repository {
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: String,
}

/// Repositories flagged as actively recruiting contributors.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HiringRepoPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub repos: Vec<Repository>,
    pub total_count: u32,
    pub page: u32,
    pub per_page: u32,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ImportRequest<'a> {
    pub url: &'a str,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ImportResult {
    pub status: String,
    pub repo: String,
}

// =============================================================================
// Notification Types
// =============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub link: Option<String>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub notifications: Vec<Notification>,
    pub total_count: u32,
    pub unread_count: u32,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct UnreadCount {
    pub count: u32,
}

// =============================================================================
// Contribution Types
// =============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Contribution {
    pub id: Uuid,
    pub user_id: Uuid,
    pub github_pr_id: i64,
    pub repo_owner: String,
    pub repo_name: String,
    pub pr_number: u32,
    pub pr_title: String,
    pub pr_url: String,
    pub pr_state: String,
    pub language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<String>,
    pub merged_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub synced_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContributionFeed {
    #[serde(default, deserialize_with = "null_as_default")]
    pub contributions: Vec<Contribution>,
    pub total_count: u32,
    pub page: u32,
    pub per_page: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectGroup {
    pub repo_owner: String,
    pub repo_name: String,
    pub language: String,
    pub pr_count: u32,
    pub latest_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PortfolioStats {
    pub total_prs: u32,
    pub total_repos: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: std::collections::BTreeMap<String, u32>,
    pub first_contribution: Option<DateTime<Utc>>,
    pub latest_contribution: Option<DateTime<Utc>>,
    pub current_streak: u32,
    pub longest_streak: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublicUser {
    pub github_username: String,
    pub avatar_url: String,
    pub bio: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<UserSkill>,
    pub created_at: DateTime<Utc>,
}

/// Portfolio page shown at `/u/{username}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublicProfile {
    pub user: PublicUser,
    pub stats: PortfolioStats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_projects: Vec<ProjectGroup>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recent_prs: Vec<Contribution>,
}

// =============================================================================
// Growth Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthLevel {
    Explorer,
    FirstLight,
    Contributor,
    Regular,
    Specialist,
    Luminary,
}

impl GrowthLevel {
    pub fn display_name(&self) -> &'static str {
        match self {
            GrowthLevel::Explorer => "Explorer",
            GrowthLevel::FirstLight => "First Light",
            GrowthLevel::Contributor => "Contributor",
            GrowthLevel::Regular => "Regular",
            GrowthLevel::Specialist => "Specialist",
            GrowthLevel::Luminary => "Luminary",
        }
    }
}

/// Gamified summary of a user's contribution activity.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GrowthProfile {
    pub level: GrowthLevel,
    pub level_name: String,
    pub level_index: u32,
    pub next_level: Option<GrowthLevel>,
    #[serde(default)]
    pub next_level_name: String,
    pub progress: LevelProgress,
    pub radar: RadarScores,
    #[serde(default, deserialize_with = "null_as_default")]
    pub next_steps: Vec<NextStep>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelProgress {
    pub current_value: u32,
    pub target_value: u32,
    pub metric: String,
    pub percentage: u32,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct RadarScores {
    pub volume: u32,
    pub breadth: u32,
    pub consistency: u32,
    pub depth: u32,
    pub diversity: u32,
    pub recency: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NextStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: u32,
}

// =============================================================================
// Admin Types
// =============================================================================

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct AdminStats {
    pub user_count: u32,
    pub repo_count: u32,
    pub issue_count: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserListItem {
    pub id: Uuid,
    pub github_username: String,
    pub avatar_url: String,
    pub role: String,
    pub onboarding_done: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<UserListItem>,
    pub total_count: u32,
    pub page: u32,
    pub per_page: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RepoListItem {
    pub id: Uuid,
    pub owner: String,
    pub name: String,
    pub stars: u32,
    pub primary_language: String,
    pub issue_count: u32,
    pub indexed_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub difficulty_level: String,
    pub activity_status: String,
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RepoList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub repos: Vec<RepoListItem>,
    pub total_count: u32,
    pub page: u32,
    pub per_page: u32,
}

/// Curation fields an admin can edit on a repository.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RepoMetadata {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub difficulty_level: String,
    pub activity_status: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RoleRequest<'a> {
    pub role: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct AssignCategoryRequest {
    pub category_id: Uuid,
}

/// A background job started from the admin panel.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JobStatus {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub progress: String,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub error: Option<String>,
}
