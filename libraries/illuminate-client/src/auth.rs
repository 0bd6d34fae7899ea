//! Session endpoints for the Illuminate API.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::StatusResponse;
use reqwest::Method;
use tracing::info;

/// Authentication client for the Illuminate API.
///
/// Logging in happens in the browser through the source-forge OAuth flow
/// started at [`AuthClient::login_url`]; the API only sees the resulting
/// session cookies.
pub struct AuthClient<'a> {
    api: &'a ApiClient,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Exchange the refresh cookie for a new access cookie.
    ///
    /// Shares the in-flight guard with automatic refreshes, so calling this
    /// while a request is already refreshing does not refresh twice.
    pub async fn refresh(&self) -> Result<()> {
        let generation = self.api.session_generation();
        self.api.refresh_session(generation).await
    }

    /// End the session on the server and clear its cookies.
    pub async fn logout(&self) -> Result<StatusResponse> {
        let response: StatusResponse = self
            .api
            .send_empty(Method::POST, "/auth/logout")
            .await?;
        info!("Logged out");
        Ok(response)
    }

    /// URL that starts the OAuth login flow.
    pub fn login_url(&self) -> String {
        self.api.login_url()
    }
}
