//! Database backup management under `/database`.

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Deserialize;
use store::BackupFile;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::sounds::UploadFile;

#[derive(Debug, Default, Deserialize)]
struct BackupsListResponse {
    #[serde(default)]
    backups: Vec<BackupFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateBackupResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteBackupResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplenishResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub tables_imported: u32,
    #[serde(default)]
    pub total_rows: u64,
}

pub async fn get_backups_list(client: &ApiClient) -> Result<Vec<BackupFile>, ApiError> {
    let response: BackupsListResponse = client.get("/database/backups-list").await?;
    Ok(response.backups)
}

pub async fn create_backup(client: &ApiClient) -> Result<CreateBackupResponse, ApiError> {
    client.post_empty("/database/create-backup").await
}

/// `filename` as a single path segment.
fn backup_segment(filename: &str) -> String {
    urlencoding::encode(filename).into_owned()
}

/// Raw bytes of a backup archive.
pub async fn download_backup(client: &ApiClient, filename: &str) -> Result<Vec<u8>, ApiError> {
    let path = format!("/database/download-backup/{}", backup_segment(filename));
    client.send(client.request(Method::GET, &path)).await
}

pub async fn delete_backup(
    client: &ApiClient,
    filename: &str,
) -> Result<DeleteBackupResponse, ApiError> {
    client
        .delete(&format!("/database/delete-backup/{}", backup_segment(filename)))
        .await
}

/// Restore the database from a backup `.zip`, uploaded as the `file` field.
pub async fn replenish_database(
    client: &ApiClient,
    archive: UploadFile,
) -> Result<ReplenishResponse, ApiError> {
    let part = Part::bytes(archive.bytes)
        .file_name(archive.name)
        .mime_str("application/zip")?;
    let form = Form::new().part("file", part);
    let request = client
        .request(Method::POST, "/database/replenish-database")
        .multipart(form);
    client.send_json(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::{serve_once, serve_raw};

    #[tokio::test]
    async fn test_backups_list() {
        let (client, server) = serve_once(
            200,
            r#"{"backups":[{"filename":"backup_1.zip","size":2048,"createdAt":"2026-01-01T00:00:00Z"}],"count":1}"#,
        )
        .await;
        let backups = get_backups_list(&client).await.unwrap();
        assert_eq!(backups[0].filename, "backup_1.zip");
        assert_eq!(backups[0].size, Some(2048));
        assert_eq!(server.await.unwrap().path, "/database/backups-list");
    }

    #[tokio::test]
    async fn test_create_backup() {
        let (client, server) =
            serve_once(201, r#"{"message":"Backup created","filename":"backup_2.zip"}"#).await;
        let response = create_backup(&client).await.unwrap();
        assert_eq!(response.filename.as_deref(), Some("backup_2.zip"));
        let request = server.await.unwrap();
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/database/create-backup");
    }

    #[tokio::test]
    async fn test_download_backup_bytes() {
        let (client, server) = serve_raw(200, "application/zip", b"PK\x03\x04".to_vec()).await;
        let bytes = download_backup(&client, "backup_1.zip").await.unwrap();
        assert_eq!(bytes, b"PK\x03\x04");
        assert_eq!(
            server.await.unwrap().path,
            "/database/download-backup/backup_1.zip"
        );
    }

    #[tokio::test]
    async fn test_delete_backup_path() {
        let (client, server) = serve_once(200, r#"{"message":"Deleted"}"#).await;
        delete_backup(&client, "backup_1.zip").await.unwrap();
        let request = server.await.unwrap();
        assert_eq!(request.method, "DELETE");
        assert_eq!(request.path, "/database/delete-backup/backup_1.zip");
    }

    #[test]
    fn test_backup_segment_escapes_reserved_characters() {
        assert_eq!(backup_segment("backup_1.zip"), "backup_1.zip");
        assert_eq!(backup_segment("my backup#2?.zip"), "my%20backup%232%3F.zip");
        assert_eq!(backup_segment("../etc/passwd"), "..%2Fetc%2Fpasswd");
    }

    #[tokio::test]
    async fn test_delete_backup_encodes_filename() {
        let (client, server) = serve_once(200, r#"{"message":"Deleted"}"#).await;
        delete_backup(&client, "nightly backup#1.zip").await.unwrap();
        assert_eq!(
            server.await.unwrap().path,
            "/database/delete-backup/nightly%20backup%231.zip"
        );
    }

    #[tokio::test]
    async fn test_replenish_database() {
        let (client, server) = serve_once(
            200,
            r#"{"message":"Database replenished","tablesImported":6,"totalRows":1234}"#,
        )
        .await;
        let archive = UploadFile {
            name: "backup_1.zip".to_string(),
            bytes: b"PK\x03\x04".to_vec(),
        };
        let response = replenish_database(&client, archive).await.unwrap();
        assert_eq!(response.tables_imported, 6);
        assert_eq!(response.total_rows, 1234);

        let request = server.await.unwrap();
        assert_eq!(request.path, "/database/replenish-database");
        assert!(request
            .body_text()
            .contains(r#"name="file"; filename="backup_1.zip""#));
    }
}
