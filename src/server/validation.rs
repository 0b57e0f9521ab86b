//! Request URL validation.

use crate::error_handling::ApiError;

/// Maximum accepted URL length, the common browser limit.
const MAX_URL_LENGTH: usize = 2083;

/// Validates the URL of a parse request.
///
/// The URL must be absolute, use `http` or `https`, have a host and fit in
/// `MAX_URL_LENGTH`. The returned `Url` is normalized (e.g. an empty path
/// becomes `/`), and its string form is what `final_url` is compared with.
pub fn validate_request_url(raw: &str) -> Result<url::Url, ApiError> {
    if raw.len() > MAX_URL_LENGTH {
        return Err(ApiError::InvalidRequest(format!(
            "url: exceeds maximum length ({} > {})",
            raw.len(),
            MAX_URL_LENGTH
        )));
    }

    let parsed = url::Url::parse(raw.trim())
        .map_err(|e| ApiError::InvalidRequest(format!("url: invalid URL '{raw}': {e}")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ApiError::InvalidRequest(format!(
                "url: unsupported scheme '{other}', expected http or https"
            )))
        }
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ApiError::InvalidRequest(format!(
            "url: missing host in '{raw}'"
        )));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::validate_request_url;

    #[test]
    fn test_validate_request_url_normalizes_path() {
        let url = validate_request_url("https://example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_validate_request_url_keeps_query() {
        let url = validate_request_url("http://example.com:8080/p?q=1").unwrap();
        assert_eq!(url.as_str(), "http://example.com:8080/p?q=1");
    }

    #[test]
    fn test_validate_request_url_rejects_relative() {
        assert!(validate_request_url("example.com/path").is_err());
    }

    #[test]
    fn test_validate_request_url_rejects_other_schemes() {
        let err = validate_request_url("ftp://example.com/file").unwrap_err();
        assert_eq!(err.status_code(), 422);
        assert!(err.to_string().contains("ftp"));
    }

    #[test]
    fn test_validate_request_url_rejects_too_long() {
        let long = format!("https://example.com/{}", "a".repeat(3000));
        assert!(validate_request_url(&long).is_err());
    }

    #[test]
    fn test_validate_request_url_rejects_garbage() {
        assert!(validate_request_url("not a url at all!!!").is_err());
    }
}
