//! Error mapping helpers for the Trello gateway.

use reqwest::StatusCode;

use crate::error::ExportError;

const MAX_BODY_CHARS: usize = 160;

/// Checks if a Trello error status indicates rejected credentials.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Maps a non-success response to an [`ExportError`].
///
/// Trello answers most failures with a short plain-text body such as
/// `invalid key`, which is carried into the message.
pub(super) fn map_http_error(operation: &str, status: StatusCode, body: &str) -> ExportError {
    let message = truncate_for_message(body.trim(), MAX_BODY_CHARS);
    if status == StatusCode::TOO_MANY_REQUESTS {
        ExportError::RateLimitExceeded {
            message: format!("{operation} failed: {message}"),
        }
    } else if is_auth_failure(status) {
        ExportError::Authentication {
            message: format!("{operation} failed: Trello returned {status} {message}"),
        }
    } else {
        ExportError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}

/// Maps a transport or decoding failure to an [`ExportError`].
///
/// The request URL is stripped first because it carries the key and token.
pub(super) fn map_reqwest_error(operation: &str, error: reqwest::Error) -> ExportError {
    let redacted = error.without_url();
    if redacted.is_decode() {
        ExportError::Api {
            message: format!("{operation} returned an unexpected response: {redacted}"),
        }
    } else {
        ExportError::Network {
            message: format!("{operation} failed: {redacted}"),
        }
    }
}

pub(super) fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output = String::new();
    let mut chars = message.chars();

    for _ in 0..max_chars {
        let Some(character) = chars.next() else {
            return output;
        };
        output.push(character);
    }

    if chars.next().is_some() {
        output.push_str("...");
    }

    output
}
