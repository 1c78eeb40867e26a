//! Authenticated HTTP client for the backend REST surface.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use reqwest::{Client, RequestBuilder, StatusCode, header};
use serde_json::Value;
use tracing::{info, warn};

use brandkit_auth::nav;
use brandkit_core::{AdminConfig, AdminError, AdminResult};
use brandkit_session::{Navigator, SessionSource};

/// HTTP client wrapper applying the two cross-cutting policies of this
/// core.
///
/// Request policy: read the session's bearer token before sending and
/// attach it as `Authorization: Bearer <token>`; a failed token fetch is
/// logged and the request proceeds without credentials.
///
/// Response policy: any 401 forces a sign-out with the session source and a
/// navigation to the sign-in surface, while the triggering call still fails
/// so caller-local handling runs. This is the only path that can push the
/// system out of an authenticated state asynchronously.
///
/// No retry, no backoff; timeouts are the transport's defaults.
pub struct AdminClient {
    http: Client,
    base_url: String,
    session: Arc<dyn SessionSource>,
    navigator: Arc<dyn Navigator>,
    signed_out: AtomicBool,
}

impl AdminClient {
    pub fn new(
        config: &AdminConfig,
        session: Arc<dyn SessionSource>,
        navigator: Arc<dyn Navigator>,
    ) -> AdminResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| AdminError::network(err.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            session,
            navigator,
            signed_out: AtomicBool::new(false),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> AdminResult<Value> {
        self.execute(self.http.get(self.url(path)).query(query)).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> AdminResult<Value> {
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    pub async fn patch(&self, path: &str, body: &Value) -> AdminResult<Value> {
        self.execute(self.http.patch(self.url(path)).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> AdminResult<Value> {
        self.execute(self.http.delete(self.url(path))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(&self, request: RequestBuilder) -> AdminResult<Value> {
        let request = self.with_bearer(request).await;

        let response = request
            .send()
            .await
            .map_err(|err| AdminError::network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::NOT_FOUND {
                return Err(AdminError::NotFound);
            }

            let message = read_server_message(response).await;
            if status == StatusCode::UNAUTHORIZED {
                self.force_sign_out().await;
            }
            return Err(AdminError::server(status.as_u16(), message));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| AdminError::network(err.to_string()))?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes)
            .map_err(|err| AdminError::network(format!("invalid response body: {err}")))
    }

    async fn with_bearer(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token().await {
            Ok(Some(token)) => request.bearer_auth(token),
            Ok(None) => request,
            Err(err) => {
                // Proceed without credentials; the response policy handles
                // the 401 this will likely cause.
                warn!(error = %err, "failed to fetch bearer token; sending request unauthenticated");
                request
            }
        }
    }

    /// Elevate a 401 into a single forced sign-out.
    ///
    /// The latch guarantees one sign-out and one navigation per client even
    /// when several concurrent requests each observe a 401.
    async fn force_sign_out(&self) {
        if self.signed_out.swap(true, Ordering::SeqCst) {
            return;
        }

        info!("received 401 from backend; forcing sign-out");
        if let Err(err) = self.session.sign_out().await {
            warn!(error = %err, "sign-out after 401 failed");
        }
        self.navigator.navigate(nav::SIGN_IN);
    }
}

/// Pull the `message` field out of an error body, when there is one.
async fn read_server_message(response: reqwest::Response) -> Option<String> {
    let bytes = response.bytes().await.ok()?;
    let body: Value = serde_json::from_slice(&bytes).ok()?;
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}
