use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use axum::Router;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get};
use serde_json::json;

use brandkit_auth::SessionSnapshot;
use brandkit_client::AdminClient;
use brandkit_core::{AdminConfig, AdminError};
use brandkit_session::{Navigator, SessionError, SessionSource};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let app = Router::new()
            .route("/admin/echo", get(echo))
            .route("/admin/secure", get(secure))
            .route("/admin/boom", get(boom))
            .route("/admin/empty/:id", delete(empty));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn echo(headers: HeaderMap, Query(query): Query<HashMap<String, String>>) -> impl IntoResponse {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    axum::Json(json!({
        "authorization": authorization,
        "query": query,
    }))
}

async fn secure() -> impl IntoResponse {
    (
        StatusCode::UNAUTHORIZED,
        axum::Json(json!({"message": "token rejected"})),
    )
}

async fn boom() -> impl IntoResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({"message": "kaboom"})),
    )
}

async fn empty() -> impl IntoResponse {
    StatusCode::OK
}

/// Session double with a scriptable token outcome.
struct StubSession {
    token: Option<String>,
    token_fails: bool,
    sign_outs: AtomicUsize,
}

impl StubSession {
    fn with_token(token: &str) -> Arc<Self> {
        Arc::new(Self {
            token: Some(token.to_string()),
            token_fails: false,
            sign_outs: AtomicUsize::new(0),
        })
    }

    fn failing_token() -> Arc<Self> {
        Arc::new(Self {
            token: None,
            token_fails: true,
            sign_outs: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl SessionSource for StubSession {
    async fn load(&self) -> Result<(), SessionError> {
        Ok(())
    }

    async fn current(&self) -> Result<Option<SessionSnapshot>, SessionError> {
        Ok(Some(SessionSnapshot::new("user_1").with_role("admin")))
    }

    async fn token(&self) -> Result<Option<String>, SessionError> {
        if self.token_fails {
            return Err(SessionError::Token("provider offline".to_string()));
        }
        Ok(self.token.clone())
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        self.sign_outs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
struct RecordingNavigator {
    targets: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &str) {
        self.targets.lock().unwrap().push(target.to_string());
    }
}

fn client_for(
    base_url: &str,
    session: Arc<StubSession>,
) -> (AdminClient, Arc<RecordingNavigator>) {
    let navigator = Arc::new(RecordingNavigator::default());
    let client = AdminClient::new(
        &AdminConfig::new(base_url),
        session,
        navigator.clone(),
    )
    .expect("failed to build client");
    (client, navigator)
}

#[tokio::test]
async fn attaches_bearer_token_to_outgoing_requests() {
    let srv = TestServer::spawn().await;
    let session = StubSession::with_token("t-123");
    // Trailing slash on the configured base URL must not produce `//` paths.
    let (client, _) = client_for(&format!("{}/", srv.base_url), session);

    let body = client.get("/admin/echo", &[]).await.unwrap();
    assert_eq!(body["authorization"].as_str().unwrap(), "Bearer t-123");
}

#[tokio::test]
async fn proceeds_without_credentials_when_token_fetch_fails() {
    let srv = TestServer::spawn().await;
    let session = StubSession::failing_token();
    let (client, navigator) = client_for(&srv.base_url, session);

    let body = client.get("/admin/echo", &[]).await.unwrap();
    assert!(body["authorization"].is_null());
    assert!(navigator.targets.lock().unwrap().is_empty());
}

#[tokio::test]
async fn query_parameters_are_forwarded() {
    let srv = TestServer::spawn().await;
    let session = StubSession::with_token("t-123");
    let (client, _) = client_for(&srv.base_url, session);

    let query = [
        ("page", "2".to_string()),
        ("limit", "10".to_string()),
        ("search", "jane".to_string()),
    ];
    let body = client.get("/admin/echo", &query).await.unwrap();
    assert_eq!(body["query"]["page"], "2");
    assert_eq!(body["query"]["limit"], "10");
    assert_eq!(body["query"]["search"], "jane");
}

#[tokio::test]
async fn concurrent_401s_force_exactly_one_sign_out_and_redirect() {
    let srv = TestServer::spawn().await;
    let session = StubSession::with_token("t-expired");
    let (client, navigator) = client_for(&srv.base_url, session.clone());

    let (a, b, c) = tokio::join!(
        client.get("/admin/secure", &[]),
        client.get("/admin/secure", &[]),
        client.get("/admin/secure", &[]),
    );

    // Each caller still observes its own rejection.
    for result in [a, b, c] {
        match result {
            Err(AdminError::Server { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message.as_deref(), Some("token rejected"));
            }
            other => panic!("expected 401 server error, got {other:?}"),
        }
    }

    assert_eq!(session.sign_outs.load(Ordering::SeqCst), 1);
    assert_eq!(*navigator.targets.lock().unwrap(), vec!["/sign-in"]);
}

#[tokio::test]
async fn missing_items_map_to_not_found() {
    let srv = TestServer::spawn().await;
    let session = StubSession::with_token("t-123");
    let (client, navigator) = client_for(&srv.base_url, session.clone());

    let err = client.get("/admin/users/does-not-exist", &[]).await.unwrap_err();
    assert_eq!(err, AdminError::NotFound);

    // 404 is not an auth failure; no sign-out side effects.
    assert_eq!(session.sign_outs.load(Ordering::SeqCst), 0);
    assert!(navigator.targets.lock().unwrap().is_empty());
}

#[tokio::test]
async fn server_errors_carry_the_backend_message() {
    let srv = TestServer::spawn().await;
    let session = StubSession::with_token("t-123");
    let (client, _) = client_for(&srv.base_url, session);

    let err = client.get("/admin/boom", &[]).await.unwrap_err();
    assert_eq!(err, AdminError::server(500, Some("kaboom".to_string())));
}

#[tokio::test]
async fn empty_success_bodies_parse_as_null() {
    let srv = TestServer::spawn().await;
    let session = StubSession::with_token("t-123");
    let (client, _) = client_for(&srv.base_url, session);

    let body = client.delete("/admin/empty/1").await.unwrap();
    assert!(body.is_null());
}
