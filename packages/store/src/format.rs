//! Display formatting for table cells.

use chrono::DateTime;

use crate::models::QueueStatus;

/// Render an RFC 3339 timestamp as `"Jan 5, 2026 14:30"` (UTC).
/// Unparseable input is shown as-is; empty input as a dash.
pub fn format_date_time(value: &str) -> String {
    if value.trim().is_empty() {
        return "—".to_string();
    }
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.naive_utc().format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => value.to_string(),
    }
}

pub fn format_queue_status(status: &QueueStatus) -> &str {
    match status {
        QueueStatus::Queued => "Queued",
        QueueStatus::Started => "Started",
        QueueStatus::ElevenLabs => "ElevenLabs",
        QueueStatus::Concatenator => "Concatenator",
        QueueStatus::Done => "Done",
        QueueStatus::Other(raw) => raw,
    }
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}
