//! Tests for the Illuminate API client.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real backend.

use illuminate_client::{
    ApiClient, ApiError, ClientConfig, FeedQuery, Page, ProgressStatus, UserProfile,
    GENERIC_FAILURE_MESSAGE, REPLAY_FAILED_MESSAGE, UNPARSEABLE_BODY_MESSAGE,
};
use std::time::Duration;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USER_ID: &str = "6f1c2a8e-3d4b-4c5a-9e7f-1a2b3c4d5e6f";
const ISSUE_ID: &str = "0b9e8d7c-6a5f-4e3d-8c2b-1a0f9e8d7c6b";
const REPO_ID: &str = "11111111-2222-4333-8444-555555555555";

fn user_json() -> serde_json::Value {
    serde_json::json!({
        "id": USER_ID,
        "github_id": 4242,
        "github_username": "octocat",
        "avatar_url": "https://avatars.example.com/u/4242",
        "bio": "Learning Rust",
        "role": "user",
        "comfort_level": "beginner",
        "time_commitment": "few_hours",
        "goals": ["learn", "portfolio"],
        "onboarding_done": true,
        "skills": [
            { "language": "Rust", "proficiency": 0.6, "source": "github" }
        ],
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-02-01T00:00:00Z"
    })
}

fn issue_json() -> serde_json::Value {
    serde_json::json!({
        "id": ISSUE_ID,
        "github_id": 99,
        "repo_id": REPO_ID,
        "number": 17,
        "title": "Improve error message for missing config",
        "body": "The CLI panics when...",
        "summary": "Replace a panic with a helpful error",
        "labels": ["good first issue"],
        "difficulty": 1,
        "time_estimate": "1-2 hours",
        "status": "open",
        "comment_count": 3,
        "freshness_score": 0.9,
        "match_score": 0.82,
        "match_reasons": ["Uses Rust"]
    })
}

fn feed_json(issues: Vec<serde_json::Value>) -> serde_json::Value {
    let total = issues.len();
    serde_json::json!({
        "issues": issues,
        "total_count": total,
        "page": 1,
        "per_page": 20
    })
}

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ClientConfig::new(server.uri())).unwrap()
}

// =============================================================================
// Client Config Tests
// =============================================================================

mod client_config {
    use super::*;

    #[test]
    fn test_new_with_url() {
        let config = ClientConfig::new("https://example.com");
        assert_eq!(config.url, "https://example.com");
        assert!(config.access_token.is_none());
        assert!(config.refresh_token.is_none());
    }

    #[test]
    fn test_with_session() {
        let config = ClientConfig::with_session(
            "https://example.com",
            "access_123",
            Some("refresh_456".to_string()),
        );

        assert_eq!(config.access_token.as_deref(), Some("access_123"));
        assert_eq!(config.refresh_token.as_deref(), Some("refresh_456"));
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        let result = ApiClient::new(ClientConfig::new("example.com"));

        match result {
            Err(ApiError::InvalidUrl(msg)) => {
                assert!(msg.contains("http://") || msg.contains("https://"));
            }
            _ => panic!("Expected InvalidUrl error"),
        }
    }

    #[test]
    fn test_trailing_slashes_trimmed() {
        let client = ApiClient::new(ClientConfig::new("https://example.com/")).unwrap();
        assert_eq!(client.base_url(), "https://example.com");
        assert_eq!(
            client.auth().login_url(),
            "https://example.com/auth/github/login"
        );
    }
}

// =============================================================================
// Request Tests
// =============================================================================

mod requests {
    use super::*;

    #[tokio::test]
    async fn test_success_returns_parsed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let user = client_for(&mock_server).users().me().await.unwrap();

        assert_eq!(user.id.to_string(), USER_ID);
        assert_eq!(user.github_username, "octocat");
        assert_eq!(user.goals, vec!["learn", "portfolio"]);
        assert_eq!(user.skills.len(), 1);
        assert!(!user.is_admin());
    }

    #[tokio::test]
    async fn test_json_content_type_sent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert!(client_for(&mock_server).users().me().await.is_ok());
    }

    #[tokio::test]
    async fn test_session_cookie_sent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .and(header("cookie", "access_token=cookie_abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = ClientConfig::with_session(mock_server.uri(), "cookie_abc", None);
        let client = ApiClient::new(config).unwrap();

        assert!(client.users().me().await.is_ok());
    }

    #[tokio::test]
    async fn test_update_profile_sends_patch_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/api/users/me/profile"))
            .and(body_json(serde_json::json!({
                "comfort_level": "intermediate",
                "time_commitment": "weekends",
                "goals": ["give_back"]
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "updated"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let profile = UserProfile {
            comfort_level: "intermediate".into(),
            time_commitment: "weekends".into(),
            goals: vec!["give_back".into()],
        };

        let response = client_for(&mock_server)
            .users()
            .update_profile(&profile)
            .await
            .unwrap();
        assert_eq!(response.status, "updated");
    }

    #[tokio::test]
    async fn test_feed_query_parameters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/issues/feed"))
            .and(query_param("page", "2"))
            .and(query_param("per_page", "10"))
            .and(query_param("languages", "Rust,Go"))
            .respond_with(ResponseTemplate::new(200).set_body_json(feed_json(vec![issue_json()])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let query = FeedQuery {
            page: Page::new(2, 10),
            languages: vec!["Rust".into(), "Go".into()],
            ..FeedQuery::default()
        };

        let feed = client_for(&mock_server).issues().feed(&query).await.unwrap();
        assert_eq!(feed.issues.len(), 1);

        let issue = &feed.issues[0];
        assert_eq!(issue.match_score, Some(0.82));
        assert_eq!(issue.is_saved, None);
        assert!(issue.repo.is_none());
    }

    #[tokio::test]
    async fn test_search_query_parameters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/issues/search"))
            .and(query_param("q", "docs typo"))
            .and(query_param("page", "1"))
            .and(query_param("per_page", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(feed_json(vec![])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let feed = client_for(&mock_server)
            .issues()
            .search("docs typo", Page::default())
            .await
            .unwrap();
        assert_eq!(feed.total_count, 0);
    }
}

// =============================================================================
// Error Mapping Tests
// =============================================================================

mod error_mapping {
    use super::*;

    #[tokio::test]
    async fn test_error_field_becomes_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/api/issues/{}", ISSUE_ID)))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"error": "issue not found"})),
            )
            .mount(&mock_server)
            .await;

        let id = Uuid::parse_str(ISSUE_ID).unwrap();
        let err = client_for(&mock_server).issues().get(id).await.unwrap_err();

        match err {
            ApiError::Http { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "issue not found");
            }
            e => panic!("Expected Http error, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_uses_generic_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).users().me().await.unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.message(), UNPARSEABLE_BODY_MESSAGE);
    }

    #[tokio::test]
    async fn test_json_body_without_error_field() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(serde_json::json!({"detail": "bad"})),
            )
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).users().me().await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.message(), GENERIC_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_server_errors_not_retried() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(serde_json::json!({"error": "boom"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/auth/refresh"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).users().me().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_invalid_success_body_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&mock_server)
            .await;

        match client_for(&mock_server).users().me().await.unwrap_err() {
            ApiError::Parse(_) => {}
            e => panic!("Expected Parse error, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let client = ApiClient::new(ClientConfig::new("http://127.0.0.1:1")).unwrap();

        match client.users().me().await.unwrap_err() {
            ApiError::Unreachable(_) | ApiError::Request(_) => {}
            e => panic!("Expected Unreachable or Request error, got: {:?}", e),
        }
    }
}

// =============================================================================
// Session Refresh Tests
// =============================================================================

mod session_refresh {
    use super::*;

    /// The first `times` calls to `route` answer 401, later calls fall through.
    async fn mount_unauthorized_once(server: &MockServer, route: &str, times: u64) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(serde_json::json!({"error": "token expired"})),
            )
            .up_to_n_times(times)
            .with_priority(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_refresh_then_replay_succeeds() {
        let mock_server = MockServer::start().await;
        mount_unauthorized_once(&mock_server, "/api/users/me", 1).await;

        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/auth/refresh"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let user = client_for(&mock_server).users().me().await.unwrap();
        assert_eq!(user.github_username, "octocat");
    }

    #[tokio::test]
    async fn test_replay_failure_reports_replay_status() {
        let mock_server = MockServer::start().await;
        mount_unauthorized_once(&mock_server, "/api/users/me", 1).await;

        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(serde_json::json!({"error": "forbidden"})),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/auth/refresh"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        match client_for(&mock_server).users().me().await.unwrap_err() {
            ApiError::Http { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, REPLAY_FAILED_MESSAGE);
            }
            e => panic!("Expected Http error, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_replay_answering_401_again_is_not_refreshed_twice() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .respond_with(ResponseTemplate::new(401))
            .expect(2)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/auth/refresh"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).users().me().await.unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert!(!err.is_auth_required());
    }

    #[tokio::test]
    async fn test_refresh_failure_requires_login() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/issues/saved"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/auth/refresh"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"error": "invalid refresh token"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client.issues().saved(Page::default()).await.unwrap_err();

        assert_eq!(err.status(), Some(401));
        match err {
            ApiError::AuthRequired { login_url } => {
                assert_eq!(login_url, format!("{}/auth/github/login", mock_server.uri()));
            }
            e => panic!("Expected AuthRequired, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_refresh_timeout_is_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/issues/saved"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/auth/refresh"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = ClientConfig {
            timeout_secs: 1,
            ..ClientConfig::new(mock_server.uri())
        };
        let client = ApiClient::new(config).unwrap();
        let err = client.issues().saved(Page::default()).await.unwrap_err();

        assert!(!err.is_auth_required());
        match err {
            ApiError::Request(e) => assert!(e.is_timeout()),
            e => panic!("Expected Request error, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_concurrent_401s_share_one_refresh() {
        let mock_server = MockServer::start().await;
        mount_unauthorized_once(&mock_server, "/api/users/me", 2).await;

        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
            .expect(2)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/auth/refresh"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(100)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let users = client.users();
        let (first, second) = tokio::join!(users.me(), users.me());

        assert!(first.is_ok());
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn test_explicit_refresh() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/refresh"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        assert!(client_for(&mock_server).auth().refresh().await.is_ok());
    }
}

// =============================================================================
// Empty Collection Tests
// =============================================================================

mod empty_collections {
    use super::*;

    #[tokio::test]
    async fn test_search_with_null_issues() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/issues/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "issues": null,
                "total_count": 0,
                "page": 1,
                "per_page": 20
            })))
            .mount(&mock_server)
            .await;

        let feed = client_for(&mock_server)
            .issues()
            .search("zzz", Page::default())
            .await
            .unwrap();

        assert!(feed.issues.is_empty());
        assert_eq!(feed.total_count, 0);
    }

    #[tokio::test]
    async fn test_issue_with_null_labels() {
        let mock_server = MockServer::start().await;

        let mut issue = issue_json();
        issue["labels"] = serde_json::Value::Null;

        Mock::given(method("GET"))
            .and(path("/api/issues/feed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(feed_json(vec![issue])))
            .mount(&mock_server)
            .await;

        let feed = client_for(&mock_server)
            .issues()
            .feed(&FeedQuery::default())
            .await
            .unwrap();

        assert_eq!(feed.issues.len(), 1);
        assert!(feed.issues[0].labels.is_empty());
    }

    #[tokio::test]
    async fn test_null_progress_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/me/progress"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"progress": null})),
            )
            .mount(&mock_server)
            .await;

        let progress = client_for(&mock_server).users().progress().await.unwrap();
        assert!(progress.is_empty());
    }

    #[tokio::test]
    async fn test_bare_null_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/api/issues/{}/comments", ISSUE_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/admin/jobs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let comments = client
            .issues()
            .comments(Uuid::parse_str(ISSUE_ID).unwrap())
            .await
            .unwrap();
        assert!(comments.is_empty());
        assert!(client.admin().jobs().await.unwrap().is_empty());
    }
}

// =============================================================================
// Session Probe Tests
// =============================================================================

mod session_probe {
    use super::*;

    #[tokio::test]
    async fn test_probe_returns_user() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
            .mount(&mock_server)
            .await;

        let user = client_for(&mock_server).probe_session().await;
        assert_eq!(user.map(|u| u.github_username).as_deref(), Some("octocat"));
    }

    #[tokio::test]
    async fn test_probe_returns_new_user_without_skills() {
        let mock_server = MockServer::start().await;

        let mut body = user_json();
        body["skills"] = serde_json::Value::Null;
        body["goals"] = serde_json::Value::Null;

        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&mock_server)
            .await;

        let user = client_for(&mock_server).probe_session().await.unwrap();
        assert_eq!(user.github_username, "octocat");
        assert!(user.skills.is_empty());
        assert!(user.goals.is_empty());
    }

    #[tokio::test]
    async fn test_probe_swallows_unrecoverable_401() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/auth/refresh"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        assert!(client_for(&mock_server).probe_session().await.is_none());
    }

    #[tokio::test]
    async fn test_probe_swallows_network_errors() {
        let client = ApiClient::new(ClientConfig::new("http://127.0.0.1:1")).unwrap();
        assert!(client.probe_session().await.is_none());
    }

    #[tokio::test]
    async fn test_probe_swallows_garbage() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/me"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{"))
            .mount(&mock_server)
            .await;

        assert!(client_for(&mock_server).probe_session().await.is_none());
    }
}

// =============================================================================
// Endpoint Wrapper Tests
// =============================================================================

mod endpoints {
    use super::*;

    fn issue_id() -> Uuid {
        Uuid::parse_str(ISSUE_ID).unwrap()
    }

    #[tokio::test]
    async fn test_save_and_unsave() {
        let mock_server = MockServer::start().await;
        let route = format!("/api/issues/{}/save", ISSUE_ID);

        Mock::given(method("POST"))
            .and(path(route.as_str()))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(serde_json::json!({"status": "saved"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("DELETE"))
            .and(path(route.as_str()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "unsaved"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        assert_eq!(client.issues().save(issue_id()).await.unwrap().status, "saved");
        assert_eq!(
            client.issues().unsave(issue_id()).await.unwrap().status,
            "unsaved"
        );
    }

    #[tokio::test]
    async fn test_is_saved() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/api/issues/{}/saved", ISSUE_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"saved": true})))
            .mount(&mock_server)
            .await;

        assert!(client_for(&mock_server)
            .issues()
            .is_saved(issue_id())
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_untracked_progress_is_none() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/api/issues/{}/progress", ISSUE_ID)))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"progress": null})),
            )
            .mount(&mock_server)
            .await;

        let progress = client_for(&mock_server)
            .issues()
            .progress(issue_id())
            .await
            .unwrap();
        assert!(progress.is_none());
    }

    #[tokio::test]
    async fn test_set_progress_sends_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path(format!("/api/issues/{}/progress", ISSUE_ID)))
            .and(body_json(serde_json::json!({"status": "pr_submitted"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "progress": {
                    "id": REPO_ID,
                    "user_id": USER_ID,
                    "issue_id": ISSUE_ID,
                    "status": "pr_submitted",
                    "notes": ["opened #18"],
                    "started_at": "2024-03-01T10:00:00Z",
                    "updated_at": "2024-03-02T10:00:00Z"
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let progress = client_for(&mock_server)
            .issues()
            .set_progress(issue_id(), ProgressStatus::PrSubmitted)
            .await
            .unwrap();

        assert_eq!(progress.status, ProgressStatus::PrSubmitted);
        assert_eq!(progress.notes, vec!["opened #18"]);
    }

    #[tokio::test]
    async fn test_notifications_unread_and_mark_read() {
        let mock_server = MockServer::start().await;
        let notification_id = Uuid::parse_str(REPO_ID).unwrap();

        Mock::given(method("GET"))
            .and(path("/api/notifications/unread-count"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"count": 4})))
            .mount(&mock_server)
            .await;

        Mock::given(method("PATCH"))
            .and(path(format!("/api/notifications/{}/read", REPO_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        assert_eq!(client.notifications().unread_count().await.unwrap(), 4);
        assert_eq!(
            client
                .notifications()
                .mark_read(notification_id)
                .await
                .unwrap()
                .status,
            "ok"
        );
    }

    #[tokio::test]
    async fn test_growth_profile() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/me/growth"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "level": "first_light",
                "level_name": "First Light",
                "level_index": 1,
                "next_level": "contributor",
                "next_level_name": "Contributor",
                "progress": {
                    "current_value": 1,
                    "target_value": 3,
                    "metric": "merged_prs",
                    "percentage": 33
                },
                "radar": {
                    "volume": 10, "breadth": 20, "consistency": 5,
                    "depth": 0, "diversity": 15, "recency": 80
                },
                "next_steps": [
                    {
                        "id": "second_pr",
                        "title": "Land another PR",
                        "description": "Two more merged PRs reach Contributor",
                        "priority": 1
                    }
                ]
            })))
            .mount(&mock_server)
            .await;

        let growth = client_for(&mock_server).users().growth().await.unwrap();
        assert_eq!(
            growth.level,
            illuminate_client::GrowthLevel::FirstLight
        );
        assert_eq!(growth.level.display_name(), growth.level_name);
        assert_eq!(growth.next_level, Some(illuminate_client::GrowthLevel::Contributor));
        assert_eq!(growth.radar.recency, 80);
        assert_eq!(growth.next_steps.len(), 1);
    }

    #[tokio::test]
    async fn test_import_repo() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/repos/import"))
            .and(body_json(serde_json::json!({"url": "rust-lang/rustlings"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "indexed",
                "repo": "rust-lang/rustlings"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server)
            .repos()
            .import("rust-lang/rustlings")
            .await
            .unwrap();
        assert_eq!(result.repo, "rust-lang/rustlings");
    }

    #[tokio::test]
    async fn test_admin_role_update() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path(format!("/admin/users/{}/role", USER_ID)))
            .and(body_json(serde_json::json!({"role": "admin"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "updated"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let user_id = Uuid::parse_str(USER_ID).unwrap();
        let response = client_for(&mock_server)
            .admin()
            .set_user_role(user_id, "admin")
            .await
            .unwrap();
        assert_eq!(response.status, "updated");
    }

    #[tokio::test]
    async fn test_admin_trigger_seed_conflict() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/admin/seed"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(serde_json::json!({"error": "seed job already running"})),
            )
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .admin()
            .trigger_seed()
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.message(), "seed job already running");
    }

    #[tokio::test]
    async fn test_admin_trigger_index_accepted() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/admin/index"))
            .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
                "id": "job-1",
                "type": "index",
                "status": "running",
                "progress": "0/12 repos",
                "started_at": "2024-03-01T10:00:00Z"
            })))
            .mount(&mock_server)
            .await;

        let job = client_for(&mock_server)
            .admin()
            .trigger_index()
            .await
            .unwrap();
        assert_eq!(job.kind, "index");
        assert!(job.error.is_none());
    }

    #[tokio::test]
    async fn test_admin_remove_category_path() {
        let mock_server = MockServer::start().await;
        let category = "99999999-8888-4777-8666-555555555555";

        Mock::given(method("DELETE"))
            .and(path(format!("/admin/repos/{}/categories/{}", REPO_ID, category)))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "removed"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = client_for(&mock_server)
            .admin()
            .remove_category(
                Uuid::parse_str(REPO_ID).unwrap(),
                Uuid::parse_str(category).unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status, "removed");
    }

    #[tokio::test]
    async fn test_public_profile_username_is_one_segment() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/u/octo%2Fcat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "user": {
                    "github_username": "octo/cat",
                    "avatar_url": "",
                    "bio": "",
                    "skills": null,
                    "created_at": "2024-01-01T00:00:00Z"
                },
                "stats": {
                    "total_prs": 0,
                    "total_repos": 0,
                    "languages": null,
                    "current_streak": 0,
                    "longest_streak": 0
                },
                "top_projects": null,
                "recent_prs": null
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let profile = client_for(&mock_server)
            .users()
            .public_profile("octo/cat")
            .await
            .unwrap();

        assert_eq!(profile.user.github_username, "octo/cat");
        assert!(profile.stats.languages.is_empty());
        assert!(profile.top_projects.is_empty());
    }
}

// =============================================================================
// Error Type Tests
// =============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ApiError::AuthRequired {
            login_url: "https://example.com/auth/github/login".into(),
        };
        assert!(format!("{}", error).contains("https://example.com/auth/github/login"));

        let error = ApiError::Http {
            status: 500,
            message: "Internal error".to_string(),
        };
        assert!(format!("{}", error).contains("500"));
        assert!(format!("{}", error).contains("Internal error"));

        let error = ApiError::InvalidUrl("bad url".to_string());
        assert!(format!("{}", error).contains("bad url"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiError>();
    }
}
