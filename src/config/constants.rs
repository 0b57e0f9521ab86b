//! Configuration constants.
//!
//! This module defines the defaults used when no CLI flag or environment
//! variable overrides them.

/// Default address the HTTP server binds to
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
/// Default port the HTTP server listens on
pub const DEFAULT_PORT: u16 = 8000;

/// Upstream fetch timeout in seconds
/// Covers connect, redirects and body download of the target page
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Maximum number of redirect hops to follow when `follow_redirects` is on
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Default User-Agent string for upstream requests.
///
/// Users can override this via the `--user-agent` CLI flag or the
/// `PAGE_EXTRACT_USER_AGENT` environment variable.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Prefix of the value recorded for a selector that failed to evaluate
pub const SELECTOR_ERROR_PREFIX: &str = "Processing error";

/// Maximum length of a per-selector error message in characters.
/// Longer messages (e.g. regex compile errors that echo a huge pattern) are cut
pub const MAX_SELECTOR_ERROR_LENGTH: usize = 1000;

/// Maximum HTML preview length in characters for debug logging
pub const MAX_HTML_PREVIEW_CHARS: usize = 500;
