//! Request-scoped parse tree cache.
//!
//! A batch may contain many CSS and XPath selectors. Building a DOM is the
//! expensive part of evaluating them, so each tree is built on first use and
//! shared by every later selector of the same kind. The cache lives for one
//! batch only and is dropped with it.

use scraper::Html;
use sxd_document::Package;

use crate::error_handling::ParseTreeError;

/// Lazily built CSS and XPath trees for one document.
///
/// Each tree is constructed at most once. A failed XPath build is memoized as
/// well, so later XPath selectors report the same error without re-parsing.
#[derive(Default)]
pub struct ParseTreeCache {
    css: Option<Html>,
    xpath: Option<Result<Package, ParseTreeError>>,
    css_builds: usize,
    xpath_builds: usize,
}

impl ParseTreeCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the CSS-queryable tree, parsing `text` on first call.
    ///
    /// html5ever recovers from any markup, so this never fails today; the
    /// `Result` keeps both accessors interchangeable for the evaluator.
    pub fn css_tree(&mut self, text: &str) -> Result<&Html, ParseTreeError> {
        let builds = &mut self.css_builds;
        Ok(self.css.get_or_insert_with(|| {
            *builds += 1;
            log::debug!("Building CSS tree ({} bytes)", text.len());
            Html::parse_document(text)
        }))
    }

    /// Returns the XPath-queryable tree, building it on first call.
    ///
    /// The tree is built from `body` when it is valid UTF-8, otherwise from
    /// the transport-decoded `text`.
    pub fn xpath_tree(&mut self, body: &[u8], text: &str) -> Result<&Package, ParseTreeError> {
        let builds = &mut self.xpath_builds;
        self.xpath
            .get_or_insert_with(|| {
                *builds += 1;
                build_xpath_tree(body, text)
            })
            .as_ref()
            .map_err(|e| e.clone())
    }

    /// Number of times a CSS tree was built.
    pub fn css_builds(&self) -> usize {
        self.css_builds
    }

    /// Number of times an XPath tree build was attempted.
    pub fn xpath_builds(&self) -> usize {
        self.xpath_builds
    }
}

fn build_xpath_tree(body: &[u8], text: &str) -> Result<Package, ParseTreeError> {
    let source = match std::str::from_utf8(body) {
        Ok(utf8) => utf8.strip_prefix('\u{feff}').unwrap_or(utf8),
        Err(_) => text,
    };

    if source.trim().is_empty() {
        log::debug!("Refusing to build XPath tree from an empty document");
        return Err(ParseTreeError::EmptyDocument);
    }

    log::debug!("Building XPath tree ({} bytes)", source.len());
    Ok(sxd_html::parse_html(source))
}
