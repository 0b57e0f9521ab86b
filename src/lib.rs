//! page_extract library: fetch a page and extract values with named selectors
//!
//! This library provides an HTTP service (and the engine behind it) that
//! fetches one web page and evaluates a set of named CSS, XPath or regex
//! selectors against it, returning a key to value mapping. A failing selector
//! never fails the batch; its error text becomes its value.
//!
//! # Example
//!
//! ```no_run
//! use page_extract::{init_state, start_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     api_key: Some("secret".to_string()),
//!     port: 8080,
//!     ..Default::default()
//! };
//!
//! let state = init_state(&config)?;
//! start_server(&config, state).await?;
//! # Ok(())
//! # }
//! ```
//!
//! The engine can also be used without the server:
//!
//! ```
//! use page_extract::extract::{run, ExtractedValue, ParseOptions, SelectorDefinition, SelectorKind, SelectorMap};
//!
//! let html = "<html><body><h1>Hello</h1></body></html>";
//! let mut selectors = SelectorMap::new();
//! selectors.insert("title".to_string(), SelectorDefinition::new(SelectorKind::Css, "h1", false));
//!
//! let data = run(html.as_bytes(), html, &selectors, &ParseOptions::default());
//! assert_eq!(data["title"], Some(ExtractedValue::Single("Hello".to_string())));
//! ```
//!
//! # Requirements
//!
//! The server and the fetcher require a Tokio runtime. The extraction engine
//! is synchronous.

#![warn(missing_docs)]
#![cfg_attr(test, deny(missing_docs))]

pub mod config;
pub mod error_handling;
pub mod extract;
pub mod fetch;
pub mod initialization;
pub mod server;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use error_handling::{ApiError, FetchError, InitializationError, SelectorError};
pub use fetch::{FetchResult, Fetcher, HttpFetcher};
pub use server::{build_router, init_state, start_server, AppState, ParseRequest, ParseResponse};
