//! Regular expression backend.
//!
//! Regex selectors scan the decoded document text and never touch a parse
//! tree.

use regex::Regex;

use crate::error_handling::SelectorError;

/// Runs `pattern` over `text`.
///
/// Each match yields capture group 1 when the pattern has one, otherwise the
/// whole match. A group 1 that did not take part in a match yields nothing.
/// Values are trimmed and empty ones dropped. Without `get_all`, scanning
/// stops at the first match that yields a value.
pub(crate) fn find_matches(
    text: &str,
    pattern: &str,
    get_all: bool,
) -> Result<Vec<String>, SelectorError> {
    let regex = Regex::new(pattern).map_err(|source| SelectorError::InvalidRegex {
        pattern: pattern.to_string(),
        source,
    })?;

    let group = if regex.captures_len() > 1 { 1 } else { 0 };
    let mut values = Vec::new();

    for captures in regex.captures_iter(text) {
        if !get_all && !values.is_empty() {
            break;
        }
        if let Some(extracted) = captures.get(group) {
            let cleaned = extracted.as_str().trim();
            if !cleaned.is_empty() {
                values.push(cleaned.to_string());
            }
        }
    }

    Ok(values)
}
