//! Result shape normalization.

use super::types::{ExtractedValue, ExtractionOutcome, SelectorKind};

/// Shapes a selector outcome into its response value.
///
/// - no values: `None` (serialized as `null`)
/// - one value, `get_all` off, not a regex: the bare string
/// - otherwise: the full list
///
/// Regex results keep their list shape even for a single match. A failed
/// outcome is treated as a one-element list holding the error message.
pub fn normalize(
    outcome: ExtractionOutcome,
    get_all: bool,
    kind: SelectorKind,
) -> Option<ExtractedValue> {
    let mut values = outcome.into_values();
    match values.len() {
        0 => None,
        1 if !get_all && kind != SelectorKind::Regex => values.pop().map(ExtractedValue::Single),
        _ => Some(ExtractedValue::Multiple(values)),
    }
}
