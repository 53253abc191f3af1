//! Meditation ("mantra") endpoints.

use reqwest::Method;
use serde::Deserialize;
use store::{CreateMantraRequest, Meditation, MeditationPatch};

use crate::client::ApiClient;
use crate::error::ApiError;

/// The list endpoint has shipped under two keys; either is accepted.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetAllMantrasResponse {
    mantras: Option<Vec<Meditation>>,
    mantras_array: Option<Vec<Meditation>>,
}

impl GetAllMantrasResponse {
    fn into_list(self) -> Vec<Meditation> {
        self.mantras.or(self.mantras_array).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMantraResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub queue_id: u64,
    #[serde(default)]
    pub file_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteMantraResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub mantra_id: u64,
    #[serde(default)]
    pub favorite: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMantraResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub mantra_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateMantraResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub mantra: Option<Meditation>,
}

/// `GET /mantras/all`. With `include_private` (and a token) the viewer's own
/// private meditations are included.
pub async fn get_all_mantras(
    client: &ApiClient,
    include_private: bool,
) -> Result<Vec<Meditation>, ApiError> {
    let path = if include_private {
        "/mantras/all?includePrivate=true"
    } else {
        "/mantras/all"
    };
    let response: GetAllMantrasResponse = client.get(path).await?;
    Ok(response.into_list())
}

/// `POST /mantras/create`. Queues audio generation; the file appears later.
pub async fn create_mantra(
    client: &ApiClient,
    request: &CreateMantraRequest,
) -> Result<CreateMantraResponse, ApiError> {
    client.post("/mantras/create", request).await
}

/// Direct URL of a meditation's audio, for unauthenticated playback.
pub fn stream_url(client: &ApiClient, id: u64) -> String {
    client.url(&format!("/mantras/{id}/stream"))
}

/// Download a meditation's audio with the session's credentials.
pub async fn fetch_stream(client: &ApiClient, id: u64) -> Result<Vec<u8>, ApiError> {
    client
        .send(client.request(Method::GET, &format!("/mantras/{id}/stream")))
        .await
}

/// `POST /mantras/favorite/:id/:true|false`
pub async fn favorite_mantra(
    client: &ApiClient,
    id: u64,
    is_favorite: bool,
) -> Result<FavoriteMantraResponse, ApiError> {
    client
        .post_empty(&format!("/mantras/favorite/{id}/{is_favorite}"))
        .await
}

/// `DELETE /mantras/:id`, owner only.
pub async fn delete_mantra(client: &ApiClient, id: u64) -> Result<DeleteMantraResponse, ApiError> {
    client.delete(&format!("/mantras/{id}")).await
}

/// `PATCH /mantras/:id` with only the fields present in `patch`.
pub async fn update_mantra(
    client: &ApiClient,
    patch: &MeditationPatch,
) -> Result<UpdateMantraResponse, ApiError> {
    client.patch(&format!("/mantras/{}", patch.id), patch).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{serve_once, serve_raw};
    use store::{MantraElement, Visibility};

    #[tokio::test]
    async fn test_get_all_mantras_public() {
        let (client, server) = serve_once(200, r#"{"mantras":[{"id":1,"title":"Calm","visibility":"public"}]}"#).await;
        let list = get_all_mantras(&client, false).await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title, "Calm");
        assert_eq!(server.await.unwrap().path, "/mantras/all");
    }

    #[tokio::test]
    async fn test_get_all_mantras_falls_back_to_mantras_array() {
        let (client, server) =
            serve_once(200, r#"{"mantrasArray":[{"id":2,"title":"Focus"}]}"#).await;
        let list = get_all_mantras(&client, true).await.unwrap();
        assert_eq!(list[0].id, 2);
        assert_eq!(server.await.unwrap().path, "/mantras/all?includePrivate=true");
    }

    #[tokio::test]
    async fn test_get_all_mantras_missing_list_is_empty() {
        let (client, server) = serve_once(200, "{}").await;
        assert!(get_all_mantras(&client, false).await.unwrap().is_empty());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_create_mantra_body() {
        let (client, server) =
            serve_once(201, r#"{"message":"queued","queueId":7,"filePath":"/out/7.mp3"}"#).await;
        let request = CreateMantraRequest {
            title: "Morning".to_string(),
            description: None,
            visibility: Visibility::Private,
            mantra_array: vec![MantraElement {
                id: 1,
                text: Some("Breathe".to_string()),
                speed: Some("1.0".to_string()),
                ..Default::default()
            }],
        };
        let response = create_mantra(&client, &request).await.unwrap();
        assert_eq!(response.queue_id, 7);

        let body = server.await.unwrap().json();
        assert_eq!(body["title"], "Morning");
        assert_eq!(body["visibility"], "private");
        assert!(body.get("description").is_none());
        assert_eq!(body["mantraArray"][0]["text"], "Breathe");
    }

    #[test]
    fn test_stream_url() {
        let client = ApiClient::new("https://api.example.com/");
        assert_eq!(stream_url(&client, 42), "https://api.example.com/mantras/42/stream");
    }

    #[tokio::test]
    async fn test_fetch_stream_sends_token_and_returns_bytes() {
        let (client, server) = serve_raw(200, "audio/mpeg", vec![0xFF, 0xFB, 0x90]).await;
        let client = client.with_token(Some("tok".to_string()));
        let bytes = fetch_stream(&client, 5).await.unwrap();
        assert_eq!(bytes, vec![0xFF, 0xFB, 0x90]);

        let request = server.await.unwrap();
        assert_eq!(request.path, "/mantras/5/stream");
        assert_eq!(request.header("authorization"), Some("Bearer tok"));
    }

    #[tokio::test]
    async fn test_favorite_path() {
        let (client, server) =
            serve_once(200, r#"{"message":"ok","mantraId":3,"favorite":false}"#).await;
        let response = favorite_mantra(&client, 3, false).await.unwrap();
        assert!(!response.favorite);
        let request = server.await.unwrap();
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/mantras/favorite/3/false");
    }

    #[tokio::test]
    async fn test_delete_mantra_not_found() {
        let (client, server) = serve_once(404, r#"{"error":{"message":"Not found"}}"#).await;
        let err = delete_mantra(&client, 9).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        let request = server.await.unwrap();
        assert_eq!(request.method, "DELETE");
        assert_eq!(request.path, "/mantras/9");
    }

    #[tokio::test]
    async fn test_update_mantra_sends_only_present_fields() {
        let (client, server) = serve_once(200, r#"{"message":"updated"}"#).await;
        let patch = MeditationPatch {
            id: 4,
            title: Some("Evening".to_string()),
            ..Default::default()
        };
        update_mantra(&client, &patch).await.unwrap();
        let request = server.await.unwrap();
        assert_eq!(request.method, "PATCH");
        assert_eq!(request.path, "/mantras/4");
        assert_eq!(request.json(), serde_json::json!({"title": "Evening"}));
    }
}
