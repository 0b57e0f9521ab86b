//! reqwest-backed fetcher.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, LOCATION};

use super::decode::decode_body;
use super::request::RequestHeaders;
use super::types::FetchResult;
use super::Fetcher;
use crate::config::Config;
use crate::error_handling::{
    categorize_reqwest_error, check_upstream_status, FetchError, InitializationError,
};
use crate::initialization::{init_client, init_redirect_client};

/// Fetches pages with two shared `reqwest` clients: one that follows
/// redirects (bounded hops) and one that stops at the first response.
///
/// Both clients carry the configured timeout and User-Agent.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    no_redirect_client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds both clients from the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if a client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self {
            client: init_client(config)?,
            no_redirect_client: init_redirect_client(config)?,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, follow_redirects: bool) -> Result<FetchResult, FetchError> {
        let client = if follow_redirects {
            &self.client
        } else {
            &self.no_redirect_client
        };

        let response = RequestHeaders::apply_to_request_builder(client.get(url))
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(url, e))?;

        let status_code = response.status().as_u16();
        let final_url = response.url().to_string();
        log::debug!("Fetched {url}: status {status_code}, final url {final_url}");

        check_upstream_status(url, status_code)?;

        let redirect_location = if !follow_redirects && (300..400).contains(&status_code) {
            response
                .headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        } else {
            None
        };

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map_err(|e| categorize_reqwest_error(url, e))?
            .to_vec();
        let text = decode_body(&body, content_type.as_deref());
        log::debug!("Body length for {url}: {} bytes", body.len());
        log::trace!(
            "Body preview for {url}: {}",
            text.chars()
                .take(crate::config::MAX_HTML_PREVIEW_CHARS)
                .collect::<String>()
        );

        Ok(FetchResult {
            status_code,
            body,
            text,
            final_url,
            redirect_location,
        })
    }
}
