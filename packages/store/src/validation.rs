//! # Client-side field validators
//!
//! Every form in the front-end checks its input with these functions before
//! calling the API. Each validator returns `Ok(())` or a [`ValidationError`]
//! whose `Display` text is the message shown next to the field.
//!
//! Numeric fields are typed as text, so [`parse_float`] reproduces the
//! browser's lenient `parseFloat`: leading whitespace is skipped and the
//! longest numeric prefix wins (`"1.2x"` parses as `1.2`).

use once_cell::sync::Lazy;
use regex::Regex;

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 300;
pub const SPEED_MIN: f64 = 0.7;
pub const SPEED_MAX: f64 = 1.3;
pub const PAUSE_MAX_SECS: f64 = 300.0;
/// 50 MiB.
pub const MP3_MAX_BYTES: u64 = 50 * 1024 * 1024;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static FLOAT_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|\d+\.?\d*(?:[eE][+-]?\d+)?|\.\d+(?:[eE][+-]?\d+)?)")
        .expect("valid float regex")
});

/// A failed field check. The display text is user-facing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Title is required")]
    TitleRequired,
    #[error("Title must be less than 100 characters")]
    TitleTooLong,
    #[error("Description must be {max} characters or less")]
    DescriptionTooLong { max: usize },
    #[error("Speed must be a number")]
    SpeedNotNumber,
    #[error("Speed must be between 0.7 and 1.3")]
    SpeedOutOfRange,
    #[error("Duration must be a number")]
    DurationNotNumber,
    #[error("Duration must be greater than 0")]
    DurationNotPositive,
    #[error("Duration must be less than 300 seconds")]
    DurationTooLong,
    #[error("Text is required")]
    TextRequired,
    #[error("Select a sound file")]
    SoundFileRequired,
    #[error("Only .mp3 files are allowed")]
    NotMp3,
    #[error("File size must be less than 50MB")]
    FileTooLarge,
    #[error("Only .zip backups can be restored")]
    NotZip,
}

pub type Validation = Result<(), ValidationError>;

/// Parse the leading number of `input` the way a browser's `parseFloat` does.
pub fn parse_float(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let matched = FLOAT_PREFIX_RE.find(trimmed)?.as_str();
    match matched.trim_start_matches(['+', '-']) {
        "Infinity" if matched.starts_with('-') => Some(f64::NEG_INFINITY),
        "Infinity" => Some(f64::INFINITY),
        _ => matched.parse().ok(),
    }
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// No password policy is enforced client-side.
pub fn validate_password(_password: &str) -> Validation {
    Ok(())
}

pub fn validate_password_match(password: &str, confirm_password: &str) -> Validation {
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Length in UTF-16 code units, the unit browser form limits count in.
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

pub fn validate_meditation_title(title: &str) -> Validation {
    if title.trim().is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if text_length(title) > TITLE_MAX_CHARS {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Validation {
    if text_length(description) > DESCRIPTION_MAX_CHARS {
        return Err(ValidationError::DescriptionTooLong {
            max: DESCRIPTION_MAX_CHARS,
        });
    }
    Ok(())
}

/// Text-to-speech speed multiplier, inclusive bounds.
pub fn validate_speed(speed: &str) -> Validation {
    let value = parse_float(speed).ok_or(ValidationError::SpeedNotNumber)?;
    if !(SPEED_MIN..=SPEED_MAX).contains(&value) {
        return Err(ValidationError::SpeedOutOfRange);
    }
    Ok(())
}

/// Pause length in seconds: strictly positive, at most five minutes.
pub fn validate_pause_duration(duration: &str) -> Validation {
    let value = parse_float(duration).ok_or(ValidationError::DurationNotNumber)?;
    if value <= 0.0 {
        return Err(ValidationError::DurationNotPositive);
    }
    if value > PAUSE_MAX_SECS {
        return Err(ValidationError::DurationTooLong);
    }
    Ok(())
}

pub fn validate_mp3_file(file_name: &str, size_bytes: u64) -> Validation {
    if !file_name.to_lowercase().ends_with(".mp3") {
        return Err(ValidationError::NotMp3);
    }
    if size_bytes > MP3_MAX_BYTES {
        return Err(ValidationError::FileTooLarge);
    }
    Ok(())
}

pub fn validate_backup_file(file_name: &str) -> Validation {
    if !file_name.to_lowercase().ends_with(".zip") {
        return Err(ValidationError::NotZip);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_float_matches_browser_semantics() {
        assert_eq!(parse_float("1.0"), Some(1.0));
        assert_eq!(parse_float("  0.75"), Some(0.75));
        assert_eq!(parse_float("1.2abc"), Some(1.2));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("3."), Some(3.0));
        assert_eq!(parse_float("-2"), Some(-2.0));
        assert_eq!(parse_float("1e2"), Some(100.0));
        assert_eq!(parse_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("."), None);
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("you@example.com"));
        assert!(validate_email("a.b+c@sub.domain.org"));
        assert!(!validate_email("you@example"));
        assert!(!validate_email("you example@x.com"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_validate_password_has_no_policy() {
        assert!(validate_password("").is_ok());
        assert!(validate_password("x").is_ok());
    }

    #[test]
    fn test_validate_password_match() {
        assert!(validate_password_match("secret", "secret").is_ok());
        let err = validate_password_match("secret", "Secret").unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[test]
    fn test_validate_meditation_title() {
        assert_eq!(validate_meditation_title("   "), Err(ValidationError::TitleRequired));
        assert!(validate_meditation_title("Evening clarity").is_ok());
        assert!(validate_meditation_title(&"a".repeat(100)).is_ok());
        assert_eq!(
            validate_meditation_title(&"a".repeat(101)),
            Err(ValidationError::TitleTooLong)
        );
    }

    #[test]
    fn test_title_length_counts_utf16_units() {
        // Each of these emoji is one char but two UTF-16 units.
        assert!(validate_meditation_title(&"🧘".repeat(50)).is_ok());
        assert_eq!(
            validate_meditation_title(&"🧘".repeat(51)),
            Err(ValidationError::TitleTooLong)
        );
        assert!(validate_meditation_title(&"é".repeat(100)).is_ok());
    }

    #[test]
    fn test_validate_description_limit() {
        assert!(validate_description(&"d".repeat(300)).is_ok());
        let err = validate_description(&"d".repeat(301)).unwrap_err();
        assert_eq!(err.to_string(), "Description must be 300 characters or less");
    }

    #[test]
    fn test_validate_speed_bounds_are_inclusive() {
        assert!(validate_speed("0.7").is_ok());
        assert!(validate_speed("1.3").is_ok());
        assert_eq!(validate_speed("0.69"), Err(ValidationError::SpeedOutOfRange));
        assert_eq!(validate_speed("1.31"), Err(ValidationError::SpeedOutOfRange));
        assert_eq!(validate_speed("fast"), Err(ValidationError::SpeedNotNumber));
    }

    #[test]
    fn test_validate_pause_duration() {
        assert_eq!(
            validate_pause_duration("0"),
            Err(ValidationError::DurationNotPositive)
        );
        assert!(validate_pause_duration("0.1").is_ok());
        assert!(validate_pause_duration("300").is_ok());
        assert_eq!(
            validate_pause_duration("300.5"),
            Err(ValidationError::DurationTooLong)
        );
        assert_eq!(
            validate_pause_duration(""),
            Err(ValidationError::DurationNotNumber)
        );
    }

    #[test]
    fn test_validate_mp3_file() {
        assert!(validate_mp3_file("Rain.MP3", 1024).is_ok());
        assert!(validate_mp3_file("rain.mp3", MP3_MAX_BYTES).is_ok());
        assert_eq!(
            validate_mp3_file("rain.mp3", MP3_MAX_BYTES + 1),
            Err(ValidationError::FileTooLarge)
        );
        assert_eq!(validate_mp3_file("rain.wav", 10), Err(ValidationError::NotMp3));
    }

    #[test]
    fn test_validate_backup_file() {
        assert!(validate_backup_file("backup_2026.zip").is_ok());
        assert_eq!(validate_backup_file("backup.tar"), Err(ValidationError::NotZip));
    }

    proptest! {
        #[test]
        fn prop_speed_accepted_iff_in_range(value in -5.0f64..5.0) {
            let accepted = validate_speed(&value.to_string()).is_ok();
            prop_assert_eq!(accepted, (SPEED_MIN..=SPEED_MAX).contains(&value));
        }

        #[test]
        fn prop_pause_accepted_iff_in_range(value in -100.0f64..600.0) {
            let accepted = validate_pause_duration(&value.to_string()).is_ok();
            prop_assert_eq!(accepted, value > 0.0 && value <= PAUSE_MAX_SECS);
        }

        #[test]
        fn prop_mp3_size_limit(size in 0u64..(2 * MP3_MAX_BYTES)) {
            let accepted = validate_mp3_file("track.mp3", size).is_ok();
            prop_assert_eq!(accepted, size <= MP3_MAX_BYTES);
        }

        #[test]
        fn prop_whitespace_never_a_valid_email(s in "\\s*") {
            prop_assert!(!validate_email(&s));
        }
    }
}
