//! Page fetching.
//!
//! The extraction core never performs I/O. Everything network related
//! (timeouts, redirect policy, status checks, charset decoding) sits behind
//! the [`Fetcher`] trait, implemented for production by [`HttpFetcher`].

mod decode;
mod http;
mod request;
mod types;

use async_trait::async_trait;

use crate::error_handling::FetchError;

// Re-export public API
pub use decode::decode_body;
pub use http::HttpFetcher;
pub use types::FetchResult;

/// Fetch collaborator used by the request flow.
///
/// Implementations enforce their own timeout and report it as
/// [`FetchError::Timeout`]. A response with status >= 400 is an error;
/// anything below is returned as a [`FetchResult`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url`, following redirects only when `follow_redirects` is set.
    async fn fetch(&self, url: &str, follow_redirects: bool) -> Result<FetchResult, FetchError>;
}
