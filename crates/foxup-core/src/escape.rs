//! HTML escaping of raw line text.

use std::borrow::Cow;

/// Escape `&`, `"`, `'`, `>` and `<` so raw text can be emitted as HTML.
///
/// Lines without any of those characters are returned borrowed.
#[inline]
pub fn escape_html(raw: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(raw)
}
