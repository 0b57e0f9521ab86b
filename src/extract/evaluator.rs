//! Selector evaluation.
//!
//! Dispatches one selector definition to its backend and turns any failure
//! into data, so a bad selector only affects its own key.

use super::cache::ParseTreeCache;
use super::css::select_css;
use super::pattern::find_matches;
use super::types::{ExtractionOutcome, SelectorDefinition, SelectorKind};
use super::xpath::select_xpath;
use crate::config::{MAX_SELECTOR_ERROR_LENGTH, SELECTOR_ERROR_PREFIX};
use crate::error_handling::SelectorError;

/// Evaluates one selector against the document.
///
/// CSS and XPath selectors get their tree from `cache`, building it on first
/// use. Regex selectors scan `raw_text` directly. `effective_text_only` is
/// ignored by regex.
///
/// Never fails: errors come back as [`ExtractionOutcome::Failed`].
pub fn evaluate(
    definition: &SelectorDefinition,
    cache: &mut ParseTreeCache,
    raw_text: &str,
    raw_bytes: &[u8],
    effective_text_only: bool,
) -> ExtractionOutcome {
    match dispatch(definition, cache, raw_text, raw_bytes, effective_text_only) {
        Ok(values) => ExtractionOutcome::Matches(values),
        Err(e) => ExtractionOutcome::Failed(format_selector_error(&e)),
    }
}

fn dispatch(
    definition: &SelectorDefinition,
    cache: &mut ParseTreeCache,
    raw_text: &str,
    raw_bytes: &[u8],
    text_only: bool,
) -> Result<Vec<String>, SelectorError> {
    let SelectorDefinition {
        kind,
        pattern,
        get_all,
        ..
    } = definition;

    match kind {
        SelectorKind::Css => {
            let tree = cache.css_tree(raw_text)?;
            select_css(tree, pattern, *get_all, text_only)
        }
        SelectorKind::XPath => {
            let tree = cache.xpath_tree(raw_bytes, raw_text)?;
            select_xpath(tree, pattern, *get_all, text_only)
        }
        SelectorKind::Regex => find_matches(raw_text, pattern, *get_all),
    }
}

/// Renders a selector failure as the value shown for its key.
pub(crate) fn format_selector_error(error: &SelectorError) -> String {
    let message = format!("{}: {}", SELECTOR_ERROR_PREFIX, error);
    if message.chars().count() > MAX_SELECTOR_ERROR_LENGTH {
        let truncated: String = message.chars().take(MAX_SELECTOR_ERROR_LENGTH).collect();
        format!("{truncated}...")
    } else {
        message
    }
}
