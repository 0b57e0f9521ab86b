//! CSS selector backend.

use scraper::{Html, Selector};

use crate::error_handling::SelectorError;

/// Runs a CSS selector against a parsed document.
///
/// Only the first matched element is considered unless `get_all` is set.
/// With `text_only`, each element yields its trimmed text and is dropped when
/// that text is empty; otherwise each element yields its outer HTML, which is
/// always kept.
pub(crate) fn select_css(
    document: &Html,
    selector: &str,
    get_all: bool,
    text_only: bool,
) -> Result<Vec<String>, SelectorError> {
    let parsed = Selector::parse(selector).map_err(|e| SelectorError::InvalidCss {
        selector: selector.to_string(),
        reason: e.to_string(),
    })?;

    let limit = if get_all { usize::MAX } else { 1 };

    let values = document
        .select(&parsed)
        .take(limit)
        .filter_map(|element| {
            if text_only {
                let text = element.text().collect::<String>();
                let text = text.trim();
                if text.is_empty() {
                    None
                } else {
                    Some(text.to_string())
                }
            } else {
                Some(element.html())
            }
        })
        .collect();

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn test_select_css_text_joins_descendants() {
        let document = doc(r#"<div id="t">Hello <b>World</b></div>"#);
        let values = select_css(&document, "#t", false, true).unwrap();
        assert_eq!(values, vec!["Hello World"]);
    }

    #[test]
    fn test_select_css_outer_html() {
        let document = doc(r#"<div id="t">Hello <b>World</b></div>"#);
        let values = select_css(&document, "#t", false, false).unwrap();
        assert_eq!(values, vec![r#"<div id="t">Hello <b>World</b></div>"#]);
    }

    #[test]
    fn test_select_css_first_only_even_if_empty() {
        // The limit applies to elements, not to kept values
        let document = doc("<ul><li>  </li><li>two</li></ul>");
        let values = select_css(&document, "li", false, true).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_select_css_get_all_drops_empty_text() {
        let document = doc("<ul><li>one</li><li> </li><li>three</li></ul>");
        let values = select_css(&document, "li", true, true).unwrap();
        assert_eq!(values, vec!["one", "three"]);
    }

    #[test]
    fn test_select_css_html_keeps_empty_elements() {
        let document = doc("<ul><li></li><li>two</li></ul>");
        let values = select_css(&document, "li", true, false).unwrap();
        assert_eq!(values, vec!["<li></li>", "<li>two</li>"]);
    }

    #[test]
    fn test_select_css_invalid_selector() {
        let document = doc("<p>x</p>");
        let err = select_css(&document, "p[", false, true).unwrap_err();
        assert!(matches!(err, SelectorError::InvalidCss { .. }));
        assert!(err.to_string().contains("p["));
    }

    #[test]
    fn test_select_css_no_match() {
        let document = doc("<p>x</p>");
        let values = select_css(&document, "h1", true, true).unwrap();
        assert!(values.is_empty());
    }
}
