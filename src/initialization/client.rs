//! HTTP client initialization.
//!
//! This module provides functions to initialize the upstream HTTP clients with
//! the configured timeout, User-Agent and redirect handling.

use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the HTTP client used when a request follows redirects.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Timeout from the configuration
/// - Redirect following limited to `max_redirects` hops
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .redirect(Policy::limited(config.max_redirects))
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()
}

/// Initializes the HTTP client used when a request does not follow redirects.
///
/// Redirects are disabled so a 3xx response comes back as-is, with its
/// `Location` header available to the caller.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_redirect_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .redirect(Policy::none())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clients_build_from_default_config() {
        let config = Config::default();
        assert!(init_client(&config).is_ok());
        assert!(init_redirect_client(&config).is_ok());
    }
}
