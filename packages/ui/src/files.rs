//! Files picked through `<input type="file">`.

use api::UploadFile;
use dioxus::html::FileData;
use dioxus::prelude::*;

/// First file selected by a file input change event.
pub fn picked_file(evt: &FormEvent) -> Option<FileData> {
    evt.files().into_iter().next()
}

pub async fn read_upload(file: &FileData) -> Result<UploadFile, String> {
    let bytes = file.read_bytes().await.map_err(|e| {
        tracing::error!("Could not read {}: {e}", file.name());
        "Could not read the selected file.".to_string()
    })?;
    Ok(UploadFile {
        name: file.name(),
        bytes: bytes.to_vec(),
    })
}
