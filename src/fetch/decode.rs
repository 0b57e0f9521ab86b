//! Response body decoding.

use std::sync::LazyLock;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;

/// How far into the body a `<meta>` charset declaration is looked for.
const META_SNIFF_BYTES: usize = 1024;

/// `<meta charset=...>` and `<meta http-equiv ... content="...; charset=...">`.
static META_CHARSET: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?charset\s*=\s*["']?\s*([a-z0-9_.:\-]+)"#).ok()
});

/// Decodes a response body to text with a best-guess encoding.
///
/// The encoding is chosen in this order:
/// - a byte order mark
/// - the `charset` parameter of `Content-Type`
/// - a `<meta>` charset declaration near the start of the document
/// - UTF-8, when the body is valid UTF-8
/// - a content-sniffed guess from `chardetng`
///
/// Malformed sequences become U+FFFD, so decoding never fails.
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);

    // decode() lets a BOM override the detected encoding
    let (text, used, had_errors) = encoding.decode(body);
    if had_errors {
        log::debug!(
            "Body contained malformed {} sequences; replaced with U+FFFD",
            used.name()
        );
    }
    text.into_owned()
}

fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some(encoding) = content_type
        .and_then(charset_from_content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return encoding;
    }

    if let Some(encoding) = charset_from_meta(body) {
        log::trace!("Using charset {} declared in <meta>", encoding.name());
        return encoding;
    }

    if std::str::from_utf8(body).is_ok() {
        return UTF_8;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(body, true);
    let guessed = detector.guess(None, true);
    log::debug!("No declared charset; guessed {}", guessed.name());
    guessed
}

/// Extracts the `charset` parameter of a `Content-Type` value.
fn charset_from_content_type(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches('"'))
        } else {
            None
        }
    })
}

/// Finds a charset declared by a `<meta>` tag in the first bytes of `body`.
///
/// A declared UTF-16 means UTF-8, as in browsers: the bytes read so far were
/// ASCII-compatible.
fn charset_from_meta(body: &[u8]) -> Option<&'static Encoding> {
    let head = &body[..body.len().min(META_SNIFF_BYTES)];
    let captures = META_CHARSET.as_ref()?.captures(head)?;
    let label = captures.get(1)?.as_bytes();
    Encoding::for_label(label).map(Encoding::output_encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_body_utf8_default() {
        assert_eq!(decode_body("héllo".as_bytes(), None), "héllo");
    }

    #[test]
    fn test_decode_body_header_charset() {
        let body = b"caf\xe9";
        assert_eq!(
            decode_body(body, Some("text/html; charset=ISO-8859-1")),
            "café"
        );
    }

    #[test]
    fn test_decode_body_quoted_charset() {
        let body = b"caf\xe9";
        assert_eq!(
            decode_body(body, Some("text/html; Charset=\"windows-1252\"")),
            "café"
        );
    }

    #[test]
    fn test_decode_body_invalid_utf8_replaced() {
        let text = decode_body(b"ok \xff\xfe end", Some("text/html; charset=utf-8"));
        assert!(text.starts_with("ok "));
        assert!(text.ends_with(" end"));
        assert!(text.contains('\u{fffd}'));
    }

    #[test]
    fn test_decode_body_unknown_charset_falls_back_to_utf8() {
        assert_eq!(
            decode_body("ünï".as_bytes(), Some("text/html; charset=klingon")),
            "ünï"
        );
    }

    #[test]
    fn test_decode_body_bom_wins_over_header() {
        let mut body = vec![0xEF, 0xBB, 0xBF];
        body.extend_from_slice("naïve".as_bytes());
        assert_eq!(
            decode_body(&body, Some("text/html; charset=iso-8859-1")),
            "naïve"
        );
    }

    #[test]
    fn test_charset_from_content_type() {
        assert_eq!(
            charset_from_content_type("text/html; charset=utf-8"),
            Some("utf-8")
        );
        assert_eq!(charset_from_content_type("text/html"), None);
        assert_eq!(
            charset_from_content_type("text/html; boundary=x; charset=koi8-r"),
            Some("koi8-r")
        );
    }

    fn windows_1251(text: &str) -> Vec<u8> {
        let (bytes, _, had_errors) = encoding_rs::WINDOWS_1251.encode(text);
        assert!(!had_errors);
        bytes.into_owned()
    }

    #[test]
    fn test_decode_body_meta_charset_without_header_charset() {
        let body = windows_1251(r#"<html><head><meta charset="windows-1251"></head><body><p>Привет мир</p></body></html>"#);
        let text = decode_body(&body, Some("text/html"));
        assert!(text.contains("<p>Привет мир</p>"));
    }

    #[test]
    fn test_decode_body_http_equiv_charset() {
        let body = windows_1251(
            r#"<meta http-equiv="Content-Type" content="text/html; charset=windows-1251"><p>Привет</p>"#,
        );
        assert!(decode_body(&body, None).contains("<p>Привет</p>"));
    }

    #[test]
    fn test_decode_body_header_charset_wins_over_meta() {
        let body = b"<meta charset=\"windows-1251\"><p>caf\xe9</p>";
        let text = decode_body(body, Some("text/html; charset=iso-8859-1"));
        assert!(text.contains("café"));
    }

    #[test]
    fn test_decode_body_meta_utf16_means_utf8() {
        let body = "<meta charset=\"utf-16\"><p>ünï</p>".as_bytes();
        assert!(decode_body(body, None).contains("<p>ünï</p>"));
    }

    #[test]
    fn test_decode_body_sniffs_undeclared_cyrillic() {
        let sentence = "Съешь же ещё этих мягких французских булок, да выпей же чаю. \
                        Это обычная страница магазина с ценами и описанием товаров.";
        let body = windows_1251(&format!("<html><body><p>{sentence}</p></body></html>"));
        let text = decode_body(&body, Some("text/html"));
        assert!(text.contains(sentence));
    }

    #[test]
    fn test_meta_charset_only_within_sniff_window() {
        let mut body = vec![b' '; META_SNIFF_BYTES];
        body.extend_from_slice(b"<meta charset=\"koi8-r\">");
        assert_eq!(charset_from_meta(&body), None);
        assert_eq!(
            charset_from_meta(b"<META CHARSET=KOI8-R>"),
            Some(encoding_rs::KOI8_R)
        );
    }

    #[test]
    fn test_meta_declared_cyrillic_page_extracts_in_every_backend() {
        use crate::extract::{
            run, ExtractedValue, ParseOptions, SelectorDefinition, SelectorKind, SelectorMap,
        };

        let body = windows_1251(r#"<html><head><meta charset="windows-1251"></head><body><p>Привет мир</p></body></html>"#);
        let text = decode_body(&body, Some("text/html"));

        let mut selectors = SelectorMap::new();
        for (key, kind, pattern) in [
            ("css", SelectorKind::Css, "p"),
            ("xpath", SelectorKind::XPath, "//p"),
            ("re", SelectorKind::Regex, "<p>(.*)</p>"),
        ] {
            selectors.insert(key.to_string(), SelectorDefinition::new(kind, pattern, false));
        }

        let results = run(&body, &text, &selectors, &ParseOptions::default());
        let expected = "Привет мир".to_string();
        assert_eq!(results["css"], Some(ExtractedValue::Single(expected.clone())));
        assert_eq!(results["xpath"], Some(ExtractedValue::Single(expected.clone())));
        assert_eq!(results["re"], Some(ExtractedValue::Multiple(vec![expected])));
    }
}
