//! Validator helper functions
//!
//! Regex-level checks for `xsd:language` and `xsd:anyURI`, plus the
//! whiteSpace collapse step anyURI relies on.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

// =============================================================================
// White Space
// =============================================================================

/// The `collapse` whiteSpace facet: tabs and line breaks become spaces, runs
/// of spaces shrink to one, and the ends are trimmed
fn collapse_white_space(s: &str) -> String {
    s.split(['\t', '\n', '\r', ' '])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// Language
// =============================================================================

static LANGUAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]{1,8}(-[a-zA-Z0-9]{1,8})*$").unwrap());

/// Check whether `literal` is a valid `xsd:language` tag
pub fn is_valid_language_literal(literal: &str) -> bool {
    LANGUAGE.is_match(literal)
}

// =============================================================================
// anyURI
// =============================================================================

/// Placeholder base against which relative references are resolved
static RELATIVE_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse("http://relative.invalid/").unwrap());

/// Check whether `literal` is a valid `xsd:anyURI`
///
/// The whiteSpace facet of anyURI is `collapse`; remaining spaces are escaped
/// as `%20` before parsing. Both absolute URIs and relative references are
/// accepted, no absolutization is performed.
pub fn is_valid_any_uri_literal(literal: &str) -> bool {
    let candidate = collapse_white_space(literal).replace(' ', "%20");

    match Url::parse(&candidate) {
        Ok(_) => true,
        Err(url::ParseError::RelativeUrlWithoutBase) => RELATIVE_BASE.join(&candidate).is_ok(),
        Err(_) => false,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_white_space() {
        assert_eq!(collapse_white_space("  a \t\n b  "), "a b");
        assert_eq!(collapse_white_space("a\r\nb"), "a b");
        assert_eq!(collapse_white_space(" \t "), "");
    }

    #[test]
    fn test_language() {
        assert!(is_valid_language_literal("nl"));
        assert!(is_valid_language_literal("en-US"));
        assert!(is_valid_language_literal("zh-Hans-CN"));
        assert!(!is_valid_language_literal(""));
        assert!(!is_valid_language_literal("123"));
        assert!(!is_valid_language_literal("toolongtag"));
        assert!(!is_valid_language_literal("en-"));
        assert!(!is_valid_language_literal("en_US"));
    }

    #[test]
    fn test_any_uri() {
        assert!(is_valid_any_uri_literal("http://example.com"));
        assert!(is_valid_any_uri_literal("https://example.com/a b"));
        assert!(is_valid_any_uri_literal("urn:isbn:0451450523"));
        assert!(is_valid_any_uri_literal("relative/path"));
        assert!(is_valid_any_uri_literal("#fragment"));
        assert!(is_valid_any_uri_literal("  https://example.com/\n"));
        assert!(!is_valid_any_uri_literal("http://[::1"));
    }
}
