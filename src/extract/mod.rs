//! Selector evaluation engine.
//!
//! Given the bytes of one fetched document and a set of named selectors, this
//! module produces the mapping from selector name to extracted value:
//! - CSS selectors run on a `scraper` DOM
//! - XPath expressions run on an `sxd_document` DOM built by `sxd_html`
//! - regular expressions run on the decoded text
//!
//! Each DOM is built at most once per batch and only when a selector needs
//! it. Everything here is synchronous and holds no global state; a batch can
//! run on any thread.

mod batch;
mod cache;
mod css;
mod evaluator;
mod normalize;
mod pattern;
mod types;
mod xpath;

// Re-export public API
pub use batch::{run, run_with_cache, should_parse};
pub use cache::ParseTreeCache;
pub use evaluator::evaluate;
pub use normalize::normalize;
pub use types::{
    ExtractedValue, ExtractionOutcome, ParseOptions, ResultMap, SelectorDefinition, SelectorKind,
    SelectorMap,
};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
