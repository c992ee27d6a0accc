//! Query-string parameter extraction for mdeck.
//!
//! This crate implements the lookup a slide deck page performs against its
//! own URL: find the first `name=value` pair in the query string,
//! percent-decode the value, and fall back to the default deck whenever that
//! fails to produce something usable.
//!
//! # Behavior
//!
//! - The value is the first run of characters after `name=` containing none
//!   of `&`, `#`, or `=`
//! - An absent parameter, an empty value, a value that percent-decodes to
//!   invalid UTF-8, and a value that decodes to the empty string are all
//!   equivalent: the default deck name is returned
//! - Extraction never fails from the caller's point of view
//!
//! # Usage
//!
//! ```rust
//! use deck_query::extract;
//!
//! assert_eq!(extract("?slide=category-theory", "slide"), "category-theory");
//! assert_eq!(extract("?foo=bar", "slide"), "monoids");
//! assert_eq!(extract("?slide=100%25", "slide"), "100%");
//! ```

use percent_encoding::percent_decode_str;
use regex_lite::Regex;

/// Deck selected when the query string does not name one.
pub const DEFAULT_DECK: &str = "monoids";

/// Returns the decoded value of the `name` parameter in `search`, or
/// [`DEFAULT_DECK`] when the parameter is absent, empty, or undecodable.
///
/// `name` is interpolated into the match pattern without escaping, so a name
/// containing regex metacharacters has undefined matching behavior (a name
/// that does not even compile as a pattern counts as "no match"). Known
/// limitation; callers pass literal parameter names.
pub fn extract(search: &str, name: &str) -> String {
    raw_value(search, name)
        .and_then(decode)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_DECK.to_string())
}

fn raw_value<'a>(search: &'a str, name: &str) -> Option<&'a str> {
    let pattern = Regex::new(&format!("{}=([^&#=]*)", name)).ok()?;
    pattern
        .captures(search)
        .and_then(|captures| captures.get(1))
        .map(|capture| capture.as_str())
        .filter(|value| !value.is_empty())
}

fn decode(raw: &str) -> Option<String> {
    percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}
