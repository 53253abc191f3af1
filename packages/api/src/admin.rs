//! Administrator endpoints under `/admin`. All require an admin token.

use serde::{Deserialize, Serialize};
use store::{AdminUser, Meditation, QueueRecord};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::mantras::DeleteMantraResponse;

#[derive(Debug, Default, Deserialize)]
struct UsersResponse {
    #[serde(default)]
    users: Vec<AdminUser>,
}

#[derive(Debug, Default, Deserialize)]
struct MantrasResponse {
    #[serde(default)]
    mantras: Vec<Meditation>,
}

#[derive(Debug, Default, Deserialize)]
struct QueueResponse {
    #[serde(default)]
    queue: Vec<QueueRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteUserOptions {
    save_public_mantras_as_benevolent_user: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteQueueRecordResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub queue_id: u64,
}

pub async fn get_users(client: &ApiClient) -> Result<Vec<AdminUser>, ApiError> {
    let response: UsersResponse = client.get("/admin/users").await?;
    Ok(response.users)
}

/// `DELETE /admin/users/:id`. When `save_public_mantras` is given, the user's
/// public meditations are reassigned instead of deleted along with them.
/// No body is sent when it is `None`.
pub async fn delete_user(
    client: &ApiClient,
    id: u64,
    save_public_mantras: Option<bool>,
) -> Result<DeleteUserResponse, ApiError> {
    let path = format!("/admin/users/{id}");
    match save_public_mantras {
        Some(save) => {
            let body = DeleteUserOptions {
                save_public_mantras_as_benevolent_user: save,
            };
            client.delete_with(&path, &body).await
        }
        None => client.delete(&path).await,
    }
}

/// Every meditation, public and private, across all users.
pub async fn get_all_mantras(client: &ApiClient) -> Result<Vec<Meditation>, ApiError> {
    let response: MantrasResponse = client.get("/admin/mantras").await?;
    Ok(response.mantras)
}

pub async fn delete_mantra(client: &ApiClient, id: u64) -> Result<DeleteMantraResponse, ApiError> {
    client.delete(&format!("/admin/mantras/{id}")).await
}

pub async fn get_queuer_records(client: &ApiClient) -> Result<Vec<QueueRecord>, ApiError> {
    let response: QueueResponse = client.get("/admin/queuer").await?;
    Ok(response.queue)
}

pub async fn delete_queuer_record(
    client: &ApiClient,
    id: u64,
) -> Result<DeleteQueueRecordResponse, ApiError> {
    client.delete(&format!("/admin/queuer/{id}")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::serve_once;
    use store::QueueStatus;

    #[tokio::test]
    async fn test_get_users() {
        let (client, server) = serve_once(
            200,
            r#"{"users":[{"id":1,"email":"a@b.co","isAdmin":true,"hasPublicMantras":true,"isEmailVerified":true,"emailVerifiedAt":null,"createdAt":"2026-01-01T00:00:00Z","updatedAt":"2026-01-01T00:00:00Z"}]}"#,
        )
        .await;
        let users = get_users(&client).await.unwrap();
        assert!(users[0].has_public_mantras);
        assert_eq!(server.await.unwrap().path, "/admin/users");
    }

    #[tokio::test]
    async fn test_delete_user_with_save_option() {
        let (client, server) = serve_once(200, r#"{"message":"Deleted","userId":5}"#).await;
        let response = delete_user(&client, 5, Some(true)).await.unwrap();
        assert_eq!(response.user_id, 5);
        let request = server.await.unwrap();
        assert_eq!(request.method, "DELETE");
        assert_eq!(request.path, "/admin/users/5");
        assert_eq!(
            request.json(),
            serde_json::json!({"savePublicMantrasAsBenevolentUser": true})
        );
    }

    #[tokio::test]
    async fn test_delete_user_without_option_sends_no_body() {
        let (client, server) = serve_once(200, r#"{"message":"Deleted","userId":6}"#).await;
        delete_user(&client, 6, None).await.unwrap();
        assert!(server.await.unwrap().body.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_mantras() {
        let (client, server) =
            serve_once(200, r#"{"mantras":[{"id":3,"title":"Private one","visibility":"private"}]}"#).await;
        let mantras = get_all_mantras(&client).await.unwrap();
        assert!(!mantras[0].is_public());
        assert_eq!(server.await.unwrap().path, "/admin/mantras");
    }

    #[tokio::test]
    async fn test_delete_mantra_path() {
        let (client, server) = serve_once(200, r#"{"message":"Deleted","mantraId":3}"#).await;
        assert_eq!(delete_mantra(&client, 3).await.unwrap().mantra_id, 3);
        assert_eq!(server.await.unwrap().path, "/admin/mantras/3");
    }

    #[tokio::test]
    async fn test_queuer_records() {
        let (client, server) = serve_once(
            200,
            r#"{"queue":[{"id":1,"userId":2,"status":"elevenlabs","jobFilename":"job.json","createdAt":"","updatedAt":""}]}"#,
        )
        .await;
        let queue = get_queuer_records(&client).await.unwrap();
        assert_eq!(queue[0].status, QueueStatus::ElevenLabs);
        assert_eq!(server.await.unwrap().path, "/admin/queuer");
    }

    #[tokio::test]
    async fn test_delete_queuer_record_forbidden() {
        let (client, server) = serve_once(403, r#"{"error":{"message":"Forbidden"}}"#).await;
        let err = delete_queuer_record(&client, 1).await.unwrap_err();
        assert!(err.is_forbidden());
        assert_eq!(server.await.unwrap().path, "/admin/queuer/1");
    }
}
