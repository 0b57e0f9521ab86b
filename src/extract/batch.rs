//! Batch orchestration.
//!
//! Runs every selector of a request against one document, in submission
//! order, sharing one [`ParseTreeCache`] across the batch.

use super::cache::ParseTreeCache;
use super::evaluator::evaluate;
use super::normalize::normalize;
use super::types::{ExtractionOutcome, ParseOptions, ResultMap, SelectorMap};

/// Decides whether a fetched response is extracted at all.
///
/// True for 2xx, and for 3xx when redirects were not followed (the caller
/// asked to look at the redirect response itself).
pub fn should_parse(status_code: u16, follow_redirects: bool) -> bool {
    (200..300).contains(&status_code)
        || (!follow_redirects && (300..400).contains(&status_code))
}

/// Evaluates `selectors` against one document and returns the result map.
///
/// `body` is the raw response body and `raw_text` its decoded text. A failing
/// selector is recorded as its key's value and does not stop the batch.
pub fn run(
    body: &[u8],
    raw_text: &str,
    selectors: &SelectorMap,
    options: &ParseOptions,
) -> ResultMap {
    let mut cache = ParseTreeCache::new();
    run_with_cache(body, raw_text, selectors, options, &mut cache)
}

/// Same as [`run`], with a caller-owned cache.
///
/// The cache must belong to the same document; it is useful to inspect how
/// many trees a batch built.
pub fn run_with_cache(
    body: &[u8],
    raw_text: &str,
    selectors: &SelectorMap,
    options: &ParseOptions,
    cache: &mut ParseTreeCache,
) -> ResultMap {
    let mut results = ResultMap::with_capacity(selectors.len());
    let mut failures = 0usize;

    for (key, definition) in selectors {
        let text_only = definition.effective_text_only(options);
        let outcome = evaluate(definition, cache, raw_text, body, text_only);

        if let ExtractionOutcome::Failed(message) = &outcome {
            failures += 1;
            log::warn!(
                "Selector '{}' ({}: '{}') failed: {}",
                key,
                definition.kind,
                definition.pattern,
                message
            );
        }

        let value = normalize(outcome, definition.get_all, definition.kind);
        results.insert(key.clone(), value);
    }

    log::debug!(
        "Evaluated {} selectors ({} failed); built {} CSS and {} XPath trees",
        selectors.len(),
        failures,
        cache.css_builds(),
        cache.xpath_builds()
    );

    results
}
