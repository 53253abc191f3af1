//! Errors returned by every API call.

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("Request failed with status {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }

    /// Server-supplied message, if the error body carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Message to show the user: the server's, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    pub(crate) fn from_body(status: u16, body: &[u8]) -> Self {
        ApiError::Status {
            status,
            message: error_message(body),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
    message: Option<String>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

/// Pulls `error.message` (or a top-level `message`) out of an error body.
fn error_message(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    parsed
        .error
        .and_then(|e| e.message)
        .or(parsed.message)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_error_message() {
        let err = ApiError::from_body(409, br#"{"error":{"code":"CONFLICT","message":"Name taken"}}"#);
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.server_message(), Some("Name taken"));
        assert_eq!(err.message_or("fallback"), "Name taken");
    }

    #[test]
    fn test_top_level_message() {
        let err = ApiError::from_body(400, br#"{"message":"Bad input"}"#);
        assert_eq!(err.server_message(), Some("Bad input"));
    }

    #[test]
    fn test_unparseable_body_uses_fallback() {
        let err = ApiError::from_body(500, b"<html>oops</html>");
        assert_eq!(err.server_message(), None);
        assert_eq!(err.message_or("Something went wrong"), "Something went wrong");
        assert!(!err.is_forbidden());
    }

    #[test]
    fn test_forbidden_statuses() {
        assert!(ApiError::from_body(401, b"").is_forbidden());
        assert!(ApiError::from_body(403, b"{}").is_forbidden());
    }
}
