//! Sound file library: listing, multipart upload with progress, deletion.

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Deserialize;
use store::SoundFile;

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetSoundFilesResponse {
    #[serde(default)]
    sound_files: Vec<SoundFile>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSoundFileResponse {
    #[serde(default)]
    pub message: String,
    pub sound_file: Option<SoundFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSoundFileResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub sound_file_id: u64,
}

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Progress callback: receives whole percentages, 0 through 100.
#[cfg(not(target_arch = "wasm32"))]
pub trait ProgressFn: FnMut(u8) + Send + Sync + 'static {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: FnMut(u8) + Send + Sync + 'static> ProgressFn for T {}

/// Progress callback: receives whole percentages, 0 through 100.
#[cfg(target_arch = "wasm32")]
pub trait ProgressFn: FnMut(u8) + 'static {}
#[cfg(target_arch = "wasm32")]
impl<T: FnMut(u8) + 'static> ProgressFn for T {}

/// `round(loaded * 100 / total)`, or `None` while the total is unknown.
pub fn upload_percent(loaded: u64, total: u64) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let percent = (loaded.min(total) as f64 * 100.0 / total as f64).round();
    Some(percent as u8)
}

/// `GET /sounds/sound_files`
pub async fn get_sound_files(client: &ApiClient) -> Result<Vec<SoundFile>, ApiError> {
    let response: GetSoundFilesResponse = client.get("/sounds/sound_files").await?;
    Ok(response.sound_files)
}

/// `POST /sounds/upload` as `multipart/form-data` with fields `file`,
/// optional `name` and optional `description`.
pub async fn upload_sound_file(
    client: &ApiClient,
    file: UploadFile,
    name: Option<&str>,
    description: Option<&str>,
    on_progress: impl ProgressFn,
) -> Result<UploadSoundFileResponse, ApiError> {
    let part = file_part(file, on_progress)?;
    let mut form = Form::new().part("file", part);
    if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
        form = form.text("name", name.trim().to_string());
    }
    if let Some(description) = description.filter(|d| !d.trim().is_empty()) {
        form = form.text("description", description.trim().to_string());
    }

    let request = client.request(Method::POST, "/sounds/upload").multipart(form);
    client.send_json(request).await
}

#[cfg(not(target_arch = "wasm32"))]
const UPLOAD_CHUNK: usize = 64 * 1024;

/// Streams the file in chunks, reporting progress as each chunk is sent.
#[cfg(not(target_arch = "wasm32"))]
fn file_part(file: UploadFile, mut on_progress: impl ProgressFn) -> Result<Part, ApiError> {
    use futures::stream::{self, StreamExt};

    let total = file.bytes.len() as u64;
    let chunks: Vec<Vec<u8>> = file
        .bytes
        .chunks(UPLOAD_CHUNK)
        .map(<[u8]>::to_vec)
        .collect();
    let mut loaded = 0u64;
    on_progress(0);
    let body = stream::iter(chunks).map(move |chunk| {
        loaded += chunk.len() as u64;
        if let Some(percent) = upload_percent(loaded, total) {
            on_progress(percent);
        }
        Ok::<_, std::io::Error>(chunk)
    });

    Ok(Part::stream_with_length(reqwest::Body::wrap_stream(body), total)
        .file_name(file.name)
        .mime_str("audio/mpeg")?)
}

/// The browser fetch API exposes no upload events, so progress jumps from 0
/// to 100 once the body has been handed over.
#[cfg(target_arch = "wasm32")]
fn file_part(file: UploadFile, mut on_progress: impl ProgressFn) -> Result<Part, ApiError> {
    on_progress(0);
    let part = Part::bytes(file.bytes)
        .file_name(file.name)
        .mime_str("audio/mpeg")?;
    on_progress(100);
    Ok(part)
}

/// `DELETE /sounds/sound_file/:id`
pub async fn delete_sound_file(
    client: &ApiClient,
    id: u64,
) -> Result<DeleteSoundFileResponse, ApiError> {
    client.delete(&format!("/sounds/sound_file/{id}")).await
}
