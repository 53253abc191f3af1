//! The HTTP client every endpoint module goes through.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::AppConfig;

use crate::error::ApiError;

/// A handle on the Mantrify API. Cheap to clone; the underlying connection
/// pool is shared.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url())
    }

    /// Attach (or clear) the bearer token sent with every request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("{method} {path}");
        let request = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and return the raw body of a 2xx response.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("API request could not be sent: {e}");
            ApiError::Network(e)
        })?;
        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            let err = ApiError::from_body(status.as_u16(), &body);
            tracing::warn!("{err}");
            return Err(err);
        }
        Ok(body.to_vec())
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let body = self.send(request).await?;
        // An empty 2xx body decodes as an empty object.
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_slice(b"{}")?);
        }
        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("Unexpected API response: {e}");
            ApiError::Decode(e)
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send_json(self.request(Method::GET, path)).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(self.request(Method::POST, path).json(body))
            .await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send_json(self.request(Method::POST, path)).await
    }

    pub(crate) async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(self.request(Method::PATCH, path).json(body))
            .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send_json(self.request(Method::DELETE, path)).await
    }

    pub(crate) async fn delete_with<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(self.request(Method::DELETE, path).json(body))
            .await
    }
}

/// An axum server on an ephemeral port that records the first request it
/// receives and answers with a canned reply.
#[cfg(test)]
pub(crate) mod mock {
    use std::sync::{Arc, Mutex};

    use axum::body::to_bytes;
    use axum::extract::{Request, State};
    use axum::http::{header, HeaderMap, StatusCode};
    use axum::response::{IntoResponse, Response};
    use axum::Router;
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;
    use tokio::task::JoinHandle;

    use super::ApiClient;

    #[derive(Debug)]
    pub struct RecordedRequest {
        pub method: String,
        /// Path plus query string.
        pub path: String,
        pub headers: HeaderMap,
        pub body: Vec<u8>,
    }

    impl RecordedRequest {
        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers.get(name).and_then(|v| v.to_str().ok())
        }

        pub fn body_text(&self) -> String {
            String::from_utf8_lossy(&self.body).into_owned()
        }

        pub fn json(&self) -> serde_json::Value {
            serde_json::from_slice(&self.body).unwrap()
        }
    }

    #[derive(Clone)]
    struct Reply {
        status: StatusCode,
        content_type: String,
        body: Vec<u8>,
        recorder: Arc<Mutex<Option<oneshot::Sender<RecordedRequest>>>>,
    }

    async fn record(State(reply): State<Reply>, request: Request) -> Response {
        let (parts, body) = request.into_parts();
        let body = to_bytes(body, usize::MAX).await.unwrap().to_vec();
        let recorded = RecordedRequest {
            method: parts.method.to_string(),
            path: parts
                .uri
                .path_and_query()
                .map(|p| p.as_str().to_string())
                .unwrap_or_default(),
            headers: parts.headers,
            body,
        };
        if let Some(sender) = reply.recorder.lock().unwrap().take() {
            sender.send(recorded).ok();
        }
        (
            reply.status,
            [(header::CONTENT_TYPE, reply.content_type.clone())],
            reply.body.clone(),
        )
            .into_response()
    }

    /// Serve `status` with a JSON `body`.
    pub async fn serve_once(status: u16, body: &str) -> (ApiClient, JoinHandle<RecordedRequest>) {
        serve_raw(status, "application/json", body.as_bytes().to_vec()).await
    }

    pub async fn serve_raw(
        status: u16,
        content_type: &str,
        body: Vec<u8>,
    ) -> (ApiClient, JoinHandle<RecordedRequest>) {
        let (sender, receiver) = oneshot::channel();
        let reply = Reply {
            status: StatusCode::from_u16(status).unwrap(),
            content_type: content_type.to_string(),
            body,
            recorder: Arc::new(Mutex::new(Some(sender))),
        };
        let app = Router::new().fallback(record).with_state(reply);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        let handle = tokio::spawn(async move {
            let request = receiver.await.unwrap();
            server.abort();
            request
        });

        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        let client = ApiClient::new(format!("http://{addr}/")).with_http_client(http);
        (client, handle)
    }
}

#[cfg(test)]
mod tests {
    use super::mock::serve_once;
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url("/mantras/all"), "http://localhost:3000/mantras/all");
    }

    #[test]
    fn test_from_config() {
        let client = ApiClient::from_config(&AppConfig::default());
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.token(), None);
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let client = ApiClient::new("http://x").with_token(Some(String::new()));
        assert_eq!(client.token(), None);
    }

    #[tokio::test]
    async fn test_bearer_token_attached() {
        let (client, server) = serve_once(200, r#"{"ok":true}"#).await;
        let client = client.with_token(Some("secret".to_string()));
        let value: serde_json::Value = client.get("/ping").await.unwrap();
        assert_eq!(value["ok"], true);

        let request = server.await.unwrap();
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/ping");
        assert_eq!(request.header("authorization"), Some("Bearer secret"));
    }

    #[tokio::test]
    async fn test_no_token_no_authorization_header() {
        let (client, server) = serve_once(200, "{}").await;
        let _: serde_json::Value = client.get("/ping").await.unwrap();
        assert_eq!(server.await.unwrap().header("authorization"), None);
    }

    #[tokio::test]
    async fn test_error_status_carries_server_message() {
        let (client, server) = serve_once(403, r#"{"error":{"message":"Admins only"}}"#).await;
        let err = client.get::<serde_json::Value>("/admin/users").await.unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.server_message(), Some("Admins only"));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_undecodable_body_is_decode_error() {
        let (client, server) = serve_once(200, "not json").await;
        let err = client.get::<Vec<u32>>("/x").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        server.await.unwrap();
    }
}
