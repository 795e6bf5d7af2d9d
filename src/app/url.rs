//! URL validation and normalization utilities.

use log::warn;
use url::Url;

use crate::config::{DEFAULT_SCHEME, MAX_URL_LENGTH};
use crate::error_handling::InputError;

/// Validates and normalizes a short link given on the command line.
///
/// Adds an `http://` prefix if no scheme is present, then requires an http or
/// https URL with a host. Input longer than [`MAX_URL_LENGTH`] is rejected
/// before and after normalization.
pub fn validate_and_normalize_url(input: &str) -> Result<Url, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    if trimmed.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            trimmed.len(),
            MAX_URL_LENGTH,
            trimmed.chars().take(50).collect::<String>()
        );
        return Err(InputError::TooLong {
            len: trimmed.len(),
            max: MAX_URL_LENGTH,
        });
    }

    let normalized = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME}://{trimmed}")
    };

    if normalized.len() > MAX_URL_LENGTH {
        return Err(InputError::TooLong {
            len: normalized.len(),
            max: MAX_URL_LENGTH,
        });
    }

    let parsed = Url::parse(&normalized)?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(InputError::UnsupportedScheme(other.to_string())),
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(parsed),
        _ => Err(InputError::MissingHost),
    }
}
