//! HTTP header name constants.

/// Request header carrying the pre-shared API key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Headers sent with every upstream request, in addition to the User-Agent.
/// They mimic a desktop browser so pages render the same markup a user sees.
pub const BROWSER_REQUEST_HEADERS: &[(&str, &str)] = &[
    (
        "accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
    ),
    ("accept-language", "en-US,en;q=0.9"),
    ("upgrade-insecure-requests", "1"),
];
