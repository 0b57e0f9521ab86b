//! HTTP request building.

use reqwest::header::{HeaderName, HeaderValue};

use crate::config::BROWSER_REQUEST_HEADERS;

/// Browser-like request headers for upstream fetches.
///
/// Pages are fetched the way a desktop browser would request them, so the
/// markup the selectors run against matches what a user sees. The User-Agent
/// itself is set on the client.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        mut builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        for (name, value) in BROWSER_REQUEST_HEADERS {
            builder = builder.header(
                HeaderName::from_static(*name),
                HeaderValue::from_static(*value),
            );
        }
        builder
    }
}
