//! Extraction data model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Which backend evaluates a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SelectorKind {
    /// CSS selector, evaluated against the scraper DOM
    Css,
    /// XPath 1.0 expression, evaluated against the sxd DOM
    XPath,
    /// Regular expression, evaluated against the decoded document text
    Regex,
}

/// A named extraction rule as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorDefinition {
    /// Backend to use
    #[serde(rename = "type")]
    pub kind: SelectorKind,

    /// Selector, expression or pattern text
    #[serde(rename = "value")]
    pub pattern: String,

    /// Extract every match instead of only the first
    #[serde(default)]
    pub get_all: bool,

    /// Per-selector override of [`ParseOptions::text_only`]; ignored by regex
    #[serde(default)]
    pub text_only: Option<bool>,
}

impl SelectorDefinition {
    /// Creates a definition with no `text_only` override.
    pub fn new(kind: SelectorKind, pattern: impl Into<String>, get_all: bool) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
            get_all,
            text_only: None,
        }
    }

    /// Sets the `text_only` override.
    pub fn with_text_only(mut self, text_only: bool) -> Self {
        self.text_only = Some(text_only);
        self
    }

    /// Resolves `text_only` against the batch default.
    pub fn effective_text_only(&self, options: &ParseOptions) -> bool {
        self.text_only.unwrap_or(options.text_only)
    }
}

fn default_true() -> bool {
    true
}

/// Batch-level options, one per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Extract plain text (true) or element markup (false)
    #[serde(default = "default_true")]
    pub text_only: bool,

    /// Follow upstream 3xx responses
    #[serde(default = "default_true")]
    pub follow_redirects: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            text_only: true,
            follow_redirects: true,
        }
    }
}

/// Raw result of one selector before shape normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// Trimmed, non-empty extracted strings in document order
    Matches(Vec<String>),
    /// The selector could not be evaluated; carries the displayable message
    Failed(String),
}

impl ExtractionOutcome {
    /// Flattens the outcome into the list of strings shown to the caller.
    ///
    /// A failure becomes a single-element list holding its message.
    pub fn into_values(self) -> Vec<String> {
        match self {
            ExtractionOutcome::Matches(values) => values,
            ExtractionOutcome::Failed(message) => vec![message],
        }
    }
}

/// Normalized value of one selector in the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractedValue {
    /// One string (`get_all` false, or a CSS/XPath failure)
    Single(String),
    /// List of strings (`get_all` true, or a regex failure)
    Multiple(Vec<String>),
}

/// Selector key to normalized value (`None` serializes as `null`).
///
/// Iteration order follows the order of the submitted selectors.
pub type ResultMap = IndexMap<String, Option<ExtractedValue>>;

/// Ordered selector set of one batch.
pub type SelectorMap = IndexMap<String, SelectorDefinition>;
