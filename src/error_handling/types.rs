//! Error type definitions.
//!
//! This module defines the error types used throughout the application, from
//! startup failures down to a single selector that could not be evaluated.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error binding the HTTP server listener.
    #[error("Failed to bind server to {addr}: {source}")]
    BindError {
        /// Address that could not be bound
        addr: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// A parse tree could not be built from the fetched document.
///
/// Only the selector that asked for the tree is affected; the failure is
/// memoized so later selectors of the same kind report it without retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseTreeError {
    /// The document has no markup at all.
    #[error("Document is empty")]
    EmptyDocument,
}

/// Failure of a single selector.
///
/// Rendered into the response as that selector's value; never aborts a batch.
#[derive(Error, Debug)]
pub enum SelectorError {
    /// The CSS selector does not parse.
    #[error("invalid CSS selector '{selector}': {reason}")]
    InvalidCss {
        /// Selector as submitted
        selector: String,
        /// Parser message
        reason: String,
    },

    /// The XPath expression does not compile.
    #[error("invalid XPath expression '{expression}': {reason}")]
    InvalidXPath {
        /// Expression as submitted
        expression: String,
        /// Compiler message
        reason: String,
    },

    /// The XPath expression compiled but failed at evaluation (e.g. an unknown function).
    #[error("XPath evaluation failed for '{expression}': {reason}")]
    XPathEvaluation {
        /// Expression as submitted
        expression: String,
        /// Evaluator message
        reason: String,
    },

    /// The regular expression does not compile.
    #[error("invalid regex '{pattern}': {source}")]
    InvalidRegex {
        /// Pattern as submitted
        pattern: String,
        /// Compile error
        #[source]
        source: regex::Error,
    },

    /// The parse tree the selector needs could not be built.
    #[error(transparent)]
    ParseTree(#[from] ParseTreeError),
}

/// Errors raised while fetching the target page.
///
/// These never reach the extraction core; the boundary layer turns them into
/// an error response whose status comes from [`FetchError::status_code`].
#[derive(Error, Debug)]
pub enum FetchError {
    /// The upstream did not answer within the configured timeout.
    #[error("Failed to load URL: timed out ({url})")]
    Timeout {
        /// Requested URL
        url: String,
    },

    /// The upstream answered with an error status.
    #[error("Error fetching URL {url}: upstream responded with an error (status code: {status})")]
    Status {
        /// Requested URL
        url: String,
        /// Upstream status code
        status: u16,
    },

    /// Any other transport failure (DNS, connect, TLS, body read, redirect loop).
    #[error("Error fetching URL {url}: {source}")]
    Request {
        /// Requested URL
        url: String,
        /// Underlying reqwest error
        #[source]
        source: ReqwestError,
    },
}

impl FetchError {
    /// HTTP status the service answers with for this failure.
    ///
    /// - timeout: 504
    /// - upstream error status: that status (502 if it is not a valid code)
    /// - transport error carrying a status: that status
    /// - anything else: 500
    pub fn status_code(&self) -> u16 {
        match self {
            FetchError::Timeout { .. } => 504,
            FetchError::Status { status, .. } => {
                if (100..=999).contains(status) {
                    *status
                } else {
                    502
                }
            }
            FetchError::Request { source, .. } => {
                source.status().map(|s| s.as_u16()).unwrap_or(500)
            }
        }
    }
}

/// Errors surfaced by the HTTP API as `{"detail": ...}` responses.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server was started without an API key.
    #[error("Internal server error: API key is not configured.")]
    ApiKeyNotConfigured,

    /// The request carried no API key header.
    #[error("API key required in header '{0}'")]
    MissingApiKey(&'static str),

    /// The request carried a wrong API key.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// The request body was well-formed JSON but semantically invalid.
    #[error("{0}")]
    InvalidRequest(String),

    /// The target page could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// An unexpected fault while processing the request.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::ApiKeyNotConfigured => 500,
            ApiError::MissingApiKey(_) => 401,
            ApiError::InvalidApiKey => 403,
            ApiError::InvalidRequest(_) => 422,
            ApiError::Fetch(e) => e.status_code(),
            ApiError::Internal(_) => 500,
        }
    }
}
