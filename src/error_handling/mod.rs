//! Error handling.
//!
//! This module provides:
//! - Error type definitions for startup, fetching, parse trees and selectors
//! - Categorization of transport errors into response status codes
//!
//! Errors fall into two groups:
//! - **Request-level**: fetch and authentication failures, answered with an
//!   error status and a `detail` message
//! - **Selector-level**: parse tree and selector failures, recorded as the
//!   failing selector's value inside an otherwise successful response

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, check_upstream_status};
pub use types::{ApiError, FetchError, InitializationError, ParseTreeError, SelectorError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(ApiError::ApiKeyNotConfigured.status_code(), 500);
        assert_eq!(ApiError::MissingApiKey("X-API-Key").status_code(), 401);
        assert_eq!(ApiError::InvalidApiKey.status_code(), 403);
        assert_eq!(
            ApiError::InvalidRequest("bad url".to_string()).status_code(),
            422
        );
        assert_eq!(ApiError::Internal("boom".to_string()).status_code(), 500);
    }

    #[test]
    fn test_api_error_fetch_status_passthrough() {
        let err = ApiError::from(FetchError::Status {
            url: "https://x.test/".to_string(),
            status: 404,
        });
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_missing_api_key_message_names_header() {
        let err = ApiError::MissingApiKey("X-API-Key");
        assert!(err.to_string().contains("'X-API-Key'"));
    }

    #[test]
    fn test_selector_error_wraps_parse_tree_error() {
        let err = SelectorError::from(ParseTreeError::EmptyDocument);
        assert_eq!(err.to_string(), "Document is empty");
    }
}
