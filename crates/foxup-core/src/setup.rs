//! Settings block at the top of a document.
//!
//! A document may start with `key: value` lines. The first line that does
//! not have that shape ends the block; a blank line is the usual terminator.

/// A recognised setting line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting<'a> {
    /// `lang: <code>`
    Language(&'a str),
    /// `title: <text>`
    Title(&'a str),
    /// Any other key. Accepted and ignored.
    Other { key: &'a str, value: &'a str },
}

/// Parse a settings line.
///
/// Returns `None` when the line has no `": "` separator, which ends setup.
/// The value stops at a second `": "` if there is one.
pub fn parse_setting(line: &str) -> Option<Setting<'_>> {
    let (key, rest) = line.split_once(": ")?;
    let value = rest.split(": ").next().unwrap_or(rest);

    Some(match key {
        "lang" => Setting::Language(value),
        "title" => Setting::Title(value),
        _ => Setting::Other { key, value },
    })
}
