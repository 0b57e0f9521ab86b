//! API key authentication.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use super::types::AppState;
use crate::config::API_KEY_HEADER;
use crate::error_handling::ApiError;

/// Checks a provided API key against the configured one.
///
/// - no key configured: 500, the server is misconfigured
/// - no key provided: 401
/// - wrong key: 403
pub fn authenticate(expected: Option<&str>, provided: Option<&str>) -> Result<(), ApiError> {
    let expected = expected.ok_or(ApiError::ApiKeyNotConfigured)?;
    let provided = provided.ok_or(ApiError::MissingApiKey(API_KEY_HEADER))?;
    if provided != expected {
        return Err(ApiError::InvalidApiKey);
    }
    Ok(())
}

/// Middleware rejecting requests without a valid `X-API-Key` header.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());
    authenticate(state.api_key.as_deref(), provided)?;
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_accepts_matching_key() {
        assert!(authenticate(Some("secret"), Some("secret")).is_ok());
    }

    #[test]
    fn test_authenticate_missing_key() {
        let err = authenticate(Some("secret"), None).unwrap_err();
        assert!(matches!(err, ApiError::MissingApiKey(_)));
        assert_eq!(err.status_code(), 401);
    }

    #[test]
    fn test_authenticate_wrong_key() {
        let err = authenticate(Some("secret"), Some("guess")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidApiKey));
        assert_eq!(err.status_code(), 403);
    }

    #[test]
    fn test_authenticate_unconfigured_server() {
        // Checked before the header so a misconfigured server never leaks 401/403
        let err = authenticate(None, Some("anything")).unwrap_err();
        assert!(matches!(err, ApiError::ApiKeyNotConfigured));
        assert_eq!(err.status_code(), 500);
    }
}
