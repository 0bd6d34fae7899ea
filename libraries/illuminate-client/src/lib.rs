//! Illuminate API Client
//!
//! Typed HTTP client for the Illuminate REST API, the backend that matches
//! developers with beginner-friendly open-source issues.
//!
//! # Features
//!
//! - **Sessions**: cookie credentials on every call, one transparent refresh
//!   and replay when a request comes back `401`
//! - **Session probe**: [`ApiClient::probe_session`] never fails, it answers
//!   "who is logged in" with `Option<User>`
//! - **Issues**: feed, search, saving, comments, deep dives, progress
//! - **Profile**: skills, pull requests, contributions, growth, public pages
//! - **Admin**: stats, roles, repository curation, background jobs
//!
//! # Example
//!
//! ```ignore
//! use illuminate_client::{ApiClient, ApiError, ClientConfig, FeedQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ClientConfig::from_env())?;
//!
//!     match client.issues().feed(&FeedQuery::default()).await {
//!         Ok(feed) => println!("{} issues for you", feed.total_count),
//!         Err(ApiError::AuthRequired { login_url }) => println!("Log in at {}", login_url),
//!         Err(e) => return Err(e.into()),
//!     }
//!
//!     Ok(())
//! }
//! ```

mod admin;
mod auth;
mod client;
mod error;
mod issues;
mod notifications;
mod query;
mod repos;
mod types;
mod users;

pub use client::{ApiClient, RequestOptions};
pub use error::{
    ApiError, Result, GENERIC_FAILURE_MESSAGE, REPLAY_FAILED_MESSAGE, UNPARSEABLE_BODY_MESSAGE,
};
pub use types::*;

// Sub-clients are reached through `ApiClient`, exported for naming in signatures
pub use admin::AdminClient;
pub use auth::AuthClient;
pub use issues::IssuesClient;
pub use notifications::NotificationsClient;
pub use repos::ReposClient;
pub use users::UsersClient;
