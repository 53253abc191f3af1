//! User-facing text for API failures.
//!
//! Each screen has a few status codes it explains specifically; everything
//! else shows the server's message or a screen-specific fallback.

use api::ApiError;

pub fn login_error(err: &ApiError) -> String {
    match err.status() {
        Some(401) => "Invalid email or password".to_string(),
        Some(403) => "Please verify your email before logging in".to_string(),
        _ => err.message_or("Login failed. Please try again."),
    }
}

pub fn register_error(err: &ApiError) -> String {
    match err.status() {
        Some(409) => "An account with this email already exists".to_string(),
        _ => err.message_or("Registration failed. Please try again."),
    }
}

pub fn upload_sound_error(err: &ApiError) -> String {
    match err.status() {
        Some(409) => "A sound file with this name already exists.".to_string(),
        Some(413) => "File size must be less than 50MB.".to_string(),
        _ => err.message_or("Unable to upload sound file."),
    }
}

pub fn delete_meditation_error(err: &ApiError) -> String {
    match err.status() {
        Some(403) => "You can only delete your own meditations.".to_string(),
        Some(404) => "Meditation not found.".to_string(),
        _ => "Unable to delete meditation. Please try again.".to_string(),
    }
}

/// Error for a failed admin listing. `subject` is the plural noun shown to
/// the user, e.g. `"sound files"`.
pub fn fetch_error(err: &ApiError, subject: &str) -> String {
    if err.is_forbidden() {
        format!("You do not have permission to view {subject}.")
    } else {
        err.message_or(&format!("Unable to load {subject}."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16, message: Option<&str>) -> ApiError {
        ApiError::Status {
            status: code,
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn test_login_error_by_status() {
        assert_eq!(login_error(&status(401, Some("nope"))), "Invalid email or password");
        assert_eq!(
            login_error(&status(403, None)),
            "Please verify your email before logging in"
        );
        assert_eq!(login_error(&status(500, Some("Database down"))), "Database down");
        assert_eq!(login_error(&status(500, None)), "Login failed. Please try again.");
    }

    #[test]
    fn test_register_conflict() {
        assert_eq!(
            register_error(&status(409, Some("Conflict"))),
            "An account with this email already exists"
        );
        assert_eq!(
            register_error(&status(400, None)),
            "Registration failed. Please try again."
        );
    }

    #[test]
    fn test_upload_sound_error() {
        assert_eq!(
            upload_sound_error(&status(409, None)),
            "A sound file with this name already exists."
        );
        assert_eq!(upload_sound_error(&status(413, None)), "File size must be less than 50MB.");
        assert_eq!(upload_sound_error(&status(500, None)), "Unable to upload sound file.");
    }

    #[test]
    fn test_delete_meditation_error_ignores_server_text() {
        assert_eq!(
            delete_meditation_error(&status(403, Some("Forbidden"))),
            "You can only delete your own meditations."
        );
        assert_eq!(delete_meditation_error(&status(404, None)), "Meditation not found.");
        assert_eq!(
            delete_meditation_error(&status(500, Some("boom"))),
            "Unable to delete meditation. Please try again."
        );
    }

    #[test]
    fn test_fetch_error_permission() {
        assert_eq!(
            fetch_error(&status(401, None), "users"),
            "You do not have permission to view users."
        );
        assert_eq!(
            fetch_error(&status(403, Some("Admin only")), "backups"),
            "You do not have permission to view backups."
        );
        assert_eq!(
            fetch_error(&status(500, None), "queue records"),
            "Unable to load queue records."
        );
        assert_eq!(fetch_error(&status(500, Some("Timeout")), "users"), "Timeout");
    }
}
