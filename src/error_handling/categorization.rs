//! Error categorization.
//!
//! Maps transport-level `reqwest::Error`s onto [`FetchError`] so the boundary
//! layer can pick a response status.

use super::types::FetchError;

/// Categorizes a `reqwest::Error` raised while fetching `url`.
///
/// Timeouts are reported as their own variant (mapped to 504), errors that
/// carry an HTTP status keep it, and everything else is a generic transport
/// failure.
pub fn categorize_reqwest_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        return FetchError::Timeout {
            url: url.to_string(),
        };
    }

    if let Some(status) = error.status() {
        return FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        };
    }

    if error.is_connect() {
        log::debug!("Connection error for {url}: {error}");
    } else if error.is_redirect() {
        log::debug!("Redirect error for {url}: {error}");
    } else if error.is_body() || error.is_decode() {
        log::debug!("Body error for {url}: {error}");
    }

    FetchError::Request {
        url: url.to_string(),
        source: error,
    }
}

/// Checks an upstream status code against the redirect mode.
///
/// Any status >= 400 is an error. With redirects followed, a 3xx that
/// reqwest could not follow (no `Location`) is not an error: the core is
/// simply not run for it.
pub fn check_upstream_status(url: &str, status: u16) -> Result<(), FetchError> {
    if status >= 400 {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }
    Ok(())
}
