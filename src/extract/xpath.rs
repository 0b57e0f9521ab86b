//! XPath backend.
//!
//! Expressions are evaluated with `sxd_xpath` against the HTML tree built by
//! `sxd_html`. A result can be a node-set (elements, attributes, text nodes)
//! or a plain string, number or boolean.

use std::fmt::Write as _;

use sxd_document::dom::{ChildOfElement, Element};
use sxd_document::Package;
use sxd_xpath::nodeset::Node;
use sxd_xpath::{Context, Factory, Value};

use crate::error_handling::SelectorError;

/// Elements serialized without an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose text is written unescaped.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Evaluates an XPath expression against a parsed document.
///
/// Each item of the result yields at most one value:
/// - element, `text_only`: trimmed text content, dropped when empty
/// - element, markup: trimmed serialized element plus its tail text, always kept
/// - anything else: trimmed string value, dropped when empty
///
/// Without `get_all`, evaluation stops at the first kept value; dropped items
/// do not count against the limit.
pub(crate) fn select_xpath(
    package: &Package,
    expression: &str,
    get_all: bool,
    text_only: bool,
) -> Result<Vec<String>, SelectorError> {
    let xpath = Factory::new()
        .build(expression)
        .map_err(|e| SelectorError::InvalidXPath {
            expression: expression.to_string(),
            reason: format!("{:?}", e),
        })?
        .ok_or_else(|| SelectorError::InvalidXPath {
            expression: expression.to_string(),
            reason: "expression is empty".to_string(),
        })?;

    let document = package.as_document();
    let context = Context::new();
    let value = xpath
        .evaluate(&context, document.root())
        .map_err(|e| SelectorError::XPathEvaluation {
            expression: expression.to_string(),
            reason: format!("{:?}", e),
        })?;

    let limit = if get_all { usize::MAX } else { 1 };
    let mut values = Vec::new();

    match value {
        Value::Nodeset(nodes) => {
            for node in nodes.document_order() {
                if values.len() >= limit {
                    break;
                }
                if let Some(extracted) = node_value(node, text_only) {
                    values.push(extracted);
                }
            }
        }
        scalar => {
            let text = scalar.string();
            let text = text.trim();
            if !text.is_empty() {
                values.push(text.to_string());
            }
        }
    }

    Ok(values)
}

fn node_value(node: Node<'_>, text_only: bool) -> Option<String> {
    let value = match node {
        Node::Element(element) if !text_only => {
            let mut markup = String::new();
            write_element(&mut markup, element);
            write_tail(&mut markup, element);
            return Some(markup.trim().to_string());
        }
        other => other.string_value(),
    };

    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Serializes an element the way lxml's `tostring` renders HTML.
fn write_element(out: &mut String, element: Element<'_>) {
    let name = element.name().local_part();
    out.push('<');
    out.push_str(name);
    for attribute in element.attributes() {
        let _ = write!(
            out,
            " {}=\"{}\"",
            attribute.name().local_part(),
            escape(attribute.value(), true)
        );
    }
    out.push('>');

    let children = element.children();
    if children.is_empty() && VOID_ELEMENTS.contains(&name) {
        return;
    }

    let raw_text = RAW_TEXT_ELEMENTS.contains(&name);
    for child in children {
        match child {
            ChildOfElement::Element(child) => write_element(out, child),
            ChildOfElement::Text(text) if raw_text => out.push_str(text.text()),
            ChildOfElement::Text(text) => out.push_str(&escape(text.text(), false)),
            ChildOfElement::Comment(comment) => {
                let _ = write!(out, "<!--{}-->", comment.text());
            }
            ChildOfElement::ProcessingInstruction(pi) => {
                let _ = write!(out, "<?{} {}?>", pi.target(), pi.value().unwrap_or(""));
            }
        }
    }

    let _ = write!(out, "</{}>", name);
}

/// Appends the text directly following `element`, up to the next non-text sibling.
fn write_tail(out: &mut String, element: Element<'_>) {
    for sibling in element.following_siblings() {
        match sibling {
            ChildOfElement::Text(text) => out.push_str(&escape(text.text(), false)),
            _ => break,
        }
    }
}

fn escape(text: &str, attribute: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if attribute => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
