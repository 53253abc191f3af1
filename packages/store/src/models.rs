//! # Domain models mirrored from the Mantrify API
//!
//! Plain data transfer objects. They derive `Serialize + Deserialize` with the
//! server's camelCase field names so they can be decoded straight from API
//! responses and persisted to browser storage unchanged.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | The signed-in account carried by the session. |
//! | [`AdminUser`] | A row of the admin user listing, with verification and ownership flags. |
//! | [`Meditation`] | A meditation ("mantra") and its ordered [`MantraElement`] script. |
//! | [`MantraElement`] | One script segment: spoken text, a pause, or a sound file. |
//! | [`SoundFile`] | An uploaded audio asset usable in scripts. |
//! | [`QueueRecord`] | A server-side render job with its [`QueueStatus`]. |
//! | [`BackupFile`] | A database backup archive listed by the admin dashboard. |
//!
//! None of these carry client-side invariants; the server owns the data.

use serde::{Deserialize, Deserializer, Serialize};

/// The account attached to the current session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_email_verified: bool,
}

impl User {
    /// Username when set, email otherwise.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.email)
    }
}

/// A user as listed on the admin dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: u64,
    #[serde(default)]
    pub username: Option<String>,
    pub email: String,
    #[serde(default)]
    pub is_email_verified: bool,
    #[serde(default)]
    pub email_verified_at: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub has_public_mantras: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Who can see a meditation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }

    /// Parse a form value; anything other than "private" is public.
    pub fn from_form_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("private") {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }
}

/// One segment of a meditation script.
///
/// Exactly one of `text`, `pause_duration` or `sound_file` is expected to be
/// set. Numeric values travel as strings, which is how the form captures them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MantraElement {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_string"
    )]
    pub speed: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_string"
    )]
    pub pause_duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_file: Option<String>,
}

/// A meditation as returned by the library and admin listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meditation {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub mantra_array: Vec<MantraElement>,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub visibility: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, alias = "listens")]
    pub listen_count: u64,
    #[serde(default)]
    pub is_favorite: Option<bool>,
    #[serde(default)]
    pub is_owned: Option<bool>,
    #[serde(default)]
    pub owner_user_id: Option<u64>,
}

impl Meditation {
    pub fn is_public(&self) -> bool {
        self.visibility.eq_ignore_ascii_case("public")
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite.unwrap_or(false)
    }

    pub fn is_owned(&self) -> bool {
        self.is_owned.unwrap_or(false)
    }
}

/// An uploaded sound file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoundFile {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub filename: String,
}

/// Render pipeline stage of a queued meditation job. Stages this client
/// does not know are kept verbatim in [`QueueStatus::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QueueStatus {
    Queued,
    Started,
    ElevenLabs,
    Concatenator,
    Done,
    Other(String),
}

impl QueueStatus {
    pub fn as_str(&self) -> &str {
        match self {
            QueueStatus::Queued => "queued",
            QueueStatus::Started => "started",
            QueueStatus::ElevenLabs => "elevenlabs",
            QueueStatus::Concatenator => "concatenator",
            QueueStatus::Done => "done",
            QueueStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for QueueStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "queued" => QueueStatus::Queued,
            "started" => QueueStatus::Started,
            "elevenlabs" => QueueStatus::ElevenLabs,
            "concatenator" => QueueStatus::Concatenator,
            "done" => QueueStatus::Done,
            _ => QueueStatus::Other(raw),
        }
    }
}

impl From<QueueStatus> for String {
    fn from(status: QueueStatus) -> Self {
        match status {
            QueueStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// A row of the render job queue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueRecord {
    pub id: u64,
    pub user_id: u64,
    pub status: QueueStatus,
    pub job_filename: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// A database backup archive stored on the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupFile {
    pub filename: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Accept either a JSON string or a JSON number for a string-typed field.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meditation_accepts_listens_alias() {
        let json = r#"{
            "id": 7,
            "title": "Evening clarity",
            "mantraArray": [{"id": 1, "text": "Breathe"}, {"id": 2, "pause_duration": 5}],
            "filename": "evening.mp3",
            "visibility": "Public",
            "listens": 12,
            "isOwned": true
        }"#;
        let meditation: Meditation = serde_json::from_str(json).unwrap();
        assert_eq!(meditation.listen_count, 12);
        assert!(meditation.is_public());
        assert!(meditation.is_owned());
        assert!(!meditation.is_favorite());
        assert_eq!(meditation.mantra_array[1].pause_duration.as_deref(), Some("5"));
    }

    #[test]
    fn test_mantra_element_omits_unset_fields() {
        let element = MantraElement {
            id: 3,
            sound_file: Some("rain.mp3".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "sound_file": "rain.mp3"}));
    }

    #[test]
    fn test_queue_status_wire_names() {
        let record: QueueRecord = serde_json::from_str(
            r#"{"id": 1, "userId": 4, "status": "elevenlabs", "jobFilename": "job.json"}"#,
        )
        .unwrap();
        assert_eq!(record.status, QueueStatus::ElevenLabs);
        assert_eq!(record.status.as_str(), "elevenlabs");
    }

    #[test]
    fn test_unknown_queue_status_is_kept_verbatim() {
        let queue: Vec<QueueRecord> = serde_json::from_str(
            r#"[
                {"id": 1, "userId": 4, "status": "failed", "jobFilename": "a.json"},
                {"id": 2, "userId": 4, "status": "done", "jobFilename": "b.json"}
            ]"#,
        )
        .unwrap();
        assert_eq!(queue[0].status, QueueStatus::Other("failed".to_string()));
        assert_eq!(queue[1].status, QueueStatus::Done);
        assert_eq!(serde_json::to_value(&queue[0]).unwrap()["status"], "failed");
    }

    #[test]
    fn test_visibility_from_form_value() {
        assert_eq!(Visibility::from_form_value("private"), Visibility::Private);
        assert_eq!(Visibility::from_form_value("public"), Visibility::Public);
        assert_eq!(Visibility::from_form_value(""), Visibility::Public);
    }

    #[test]
    fn test_user_display_name_falls_back_to_email() {
        let user: User = serde_json::from_str(r#"{"id": 1, "email": "a@b.co"}"#).unwrap();
        assert_eq!(user.display_name(), "a@b.co");
        assert!(!user.is_admin);
    }
}
