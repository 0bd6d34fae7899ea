//! Main Illuminate API client.

use crate::admin::AdminClient;
use crate::auth::AuthClient;
use crate::error::{
    ApiError, Result, GENERIC_FAILURE_MESSAGE, REPLAY_FAILED_MESSAGE, UNPARSEABLE_BODY_MESSAGE,
};
use crate::issues::IssuesClient;
use crate::notifications::NotificationsClient;
use crate::repos::ReposClient;
use crate::types::{ClientConfig, User, DEFAULT_BASE_URL};
use crate::users::UsersClient;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Method, extra headers and JSON body for a single request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Options carrying `body` serialized as JSON.
    pub fn json<B: Serialize + ?Sized>(method: Method, body: &B) -> Result<Self> {
        Ok(Self {
            method,
            body: Some(serde_json::to_value(body)?),
            ..Self::default()
        })
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Refresh bookkeeping shared by all clones of one client.
#[derive(Debug, Default)]
struct Session {
    /// Bumped after every successful refresh.
    generation: AtomicU64,
    refresh_lock: Mutex<()>,
}

impl Session {
    fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

/// Client for the Illuminate REST API.
///
/// Session credentials live in cookies. A request that comes back `401`
/// triggers one refresh and one replay; concurrent requests share the
/// refresh. When the session cannot be recovered the call fails with
/// [`ApiError::AuthRequired`] and the caller decides how to send the user
/// to the login page.
///
/// # Example
///
/// ```ignore
/// use illuminate_client::{ApiClient, ClientConfig, FeedQuery};
///
/// let client = ApiClient::new(ClientConfig::new("https://illuminate.example.com"))?;
///
/// match client.probe_session().await {
///     Some(user) => println!("Hello {}", user.github_username),
///     None => println!("Log in at {}", client.login_url()),
/// }
///
/// let feed = client.issues().feed(&FeedQuery::default()).await?;
/// println!("{} issues", feed.total_count);
/// ```
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.url)?;
        let http = build_http(&config, &base_url)?;

        Ok(Self {
            http,
            base_url,
            session: Arc::new(Session::default()),
        })
    }

    /// Get the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Where to send the user when the session cannot be recovered.
    pub fn login_url(&self) -> String {
        format!("{}/auth/github/login", self.base_url)
    }

    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(self)
    }

    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(self)
    }

    pub fn issues(&self) -> IssuesClient<'_> {
        IssuesClient::new(self)
    }

    pub fn repos(&self) -> ReposClient<'_> {
        ReposClient::new(self)
    }

    pub fn notifications(&self) -> NotificationsClient<'_> {
        NotificationsClient::new(self)
    }

    pub fn admin(&self) -> AdminClient<'_> {
        AdminClient::new(self)
    }

    /// Check whether a session exists without ever failing.
    ///
    /// Network errors, unparseable bodies and unrecoverable `401`s all
    /// come back as `None`.
    pub async fn probe_session(&self) -> Option<User> {
        match self.users().me().await {
            Ok(user) => Some(user),
            Err(e) => {
                debug!(error = %e, "Session probe found no user");
                None
            }
        }
    }

    /// Perform a JSON request against `path` and parse the response as `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        // Snapshot before sending so a refresh finished by someone else while
        // this request was in flight is recognised.
        let generation = self.session.generation();

        let response = self.send(path, &options).await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!(path = %path, "Request unauthorized, refreshing session");

            match self.refresh_session(generation).await {
                Ok(()) => {}
                // No answer from the refresh endpoint
                Err(e @ (ApiError::Request(_) | ApiError::Unreachable(_))) => {
                    warn!(error = %e, "Session refresh could not reach the server");
                    return Err(e);
                }
                Err(e) => {
                    warn!(error = %e, "Session refresh rejected, login required");
                    return Err(ApiError::AuthRequired {
                        login_url: self.login_url(),
                    });
                }
            }

            let retry = self.send(path, &options).await?;
            let retry_status = retry.status();

            if !retry_status.is_success() {
                warn!(path = %path, status = %retry_status, "Replay after refresh failed");
                return Err(ApiError::Http {
                    status: retry_status.as_u16(),
                    message: REPLAY_FAILED_MESSAGE.to_string(),
                });
            }

            return parse_body(retry).await;
        }

        if !status.is_success() {
            return Err(error_from_response(response).await);
        }

        parse_body(response).await
    }

    /// Refresh the session unless another request already did so since
    /// `observed` was read.
    pub(crate) async fn refresh_session(&self, observed: u64) -> Result<()> {
        let _guard = self.session.refresh_lock.lock().await;

        if self.session.generation() != observed {
            debug!("Session already refreshed by a concurrent request");
            return Ok(());
        }

        let url = format!("{}/auth/refresh", self.base_url);
        debug!(url = %url, "Refreshing session");

        let response = with_credentials(self.http.post(&url))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(response).await);
        }

        self.session.generation.fetch_add(1, Ordering::AcqRel);
        info!("Session refreshed");
        Ok(())
    }

    pub(crate) fn session_generation(&self) -> u64 {
        self.session.generation()
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(path, RequestOptions::new(Method::GET)).await
    }

    /// GET a bare JSON array, reading `null` as empty.
    pub(crate) async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let items: Option<Vec<T>> = self.get(path).await?;
        Ok(items.unwrap_or_default())
    }

    pub(crate) async fn send_empty<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<T> {
        self.request(path, RequestOptions::new(method)).await
    }

    pub(crate) async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(path, RequestOptions::json(method, body)?).await
    }

    async fn send(&self, path: &str, options: &RequestOptions) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %options.method, url = %url, "Sending request");

        let mut builder = self
            .http
            .request(options.method.clone(), &url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .headers(options.headers.clone());

        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        with_credentials(builder)
            .send()
            .await
            .map_err(map_transport_error)
    }
}

/// Trim and validate the configured base URL.
///
/// An empty URL means same-origin, which only exists inside a browser;
/// everywhere else it falls back to the local development backend.
fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(DEFAULT_BASE_URL.to_string());
    }

    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(ApiError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }

    reqwest::Url::parse(trimmed).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
    Ok(trimmed.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http(config: &ClientConfig, base_url: &str) -> Result<Client> {
    use reqwest::cookie::Jar;
    use std::time::Duration;

    let url = reqwest::Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

    let jar = Arc::new(Jar::default());
    if let Some(token) = &config.access_token {
        jar.add_cookie_str(&format!("access_token={}; Path=/", token), &url);
    }
    if let Some(token) = &config.refresh_token {
        jar.add_cookie_str(&format!("refresh_token={}; Path=/", token), &url);
    }

    Client::builder()
        .cookie_provider(jar)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(format!("Illuminate/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(ApiError::Request)
}

/// The browser owns the cookie jar; requests opt into sending it.
#[cfg(target_arch = "wasm32")]
fn build_http(_config: &ClientConfig, _base_url: &str) -> Result<Client> {
    Client::builder().build().map_err(ApiError::Request)
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    builder
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    builder.fetch_credentials_include()
}

fn map_transport_error(e: reqwest::Error) -> ApiError {
    if e.is_connect() {
        ApiError::Unreachable(e.to_string())
    } else {
        ApiError::Request(e)
    }
}

async fn parse_body<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Build an [`ApiError::Http`] from a failed response, preferring the
/// body's `error` field as the message.
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();

    ApiError::Http {
        status,
        message: error_message(&text),
    }
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("error")
            .and_then(|e| e.as_str())
            .filter(|e| !e.is_empty())
            .unwrap_or(GENERIC_FAILURE_MESSAGE)
            .to_string(),
        Err(_) => UNPARSEABLE_BODY_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        assert!(ApiClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(ApiClient::new(ClientConfig::new("http://localhost:8080")).is_ok());

        assert!(ApiClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(ApiClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client = ApiClient::new(ClientConfig::new("https://example.com///")).expect("valid url");
        assert_eq!(client.base_url(), "https://example.com");
        assert_eq!(client.login_url(), "https://example.com/auth/github/login");
    }

    #[test]
    fn test_empty_url_uses_default_backend() {
        let client = ApiClient::new(ClientConfig::new("")).expect("empty url is same-origin");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(error_message(r#"{"error":"issue not found"}"#), "issue not found");
        assert_eq!(error_message(r#"{"detail":"nope"}"#), GENERIC_FAILURE_MESSAGE);
        assert_eq!(error_message(r#"{"error":""}"#), GENERIC_FAILURE_MESSAGE);
        assert_eq!(error_message("<html>502</html>"), UNPARSEABLE_BODY_MESSAGE);
        assert_eq!(error_message(""), UNPARSEABLE_BODY_MESSAGE);
    }

    #[test]
    fn test_request_options_json() {
        let options = RequestOptions::json(Method::PATCH, &serde_json::json!({"role": "admin"}))
            .expect("serializable");
        assert_eq!(options.method, Method::PATCH);
        assert_eq!(options.body, Some(serde_json::json!({"role": "admin"})));
        assert!(options.headers.is_empty());
    }
}
