//! Line splitter for the document state machine.
//!
//! FoxUp is strictly line oriented: every line is processed on its own, in
//! order. `Lines` walks the input with `memchr` newline scanning and hands out
//! borrowed lines with their source span and 1-based line number.

use memchr::memchr;

use crate::span::Span;

/// A single input line, without its line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line text with trailing `\r`/`\n` characters removed.
    pub text: &'a str,
    /// Byte span of `text` in the original input.
    pub span: Span,
    /// 1-based line number.
    pub number: u32,
}

/// Iterator over the lines of an input document.
///
/// A trailing newline does not produce a final empty line, matching the way
/// files are read line by line.
pub struct Lines<'a> {
    input: &'a str,
    offset: usize,
    number: u32,
}

impl<'a> Lines<'a> {
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            number: 0,
        }
    }

    /// Check if all input has been consumed.
    #[inline(always)]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        if self.is_eof() {
            return None;
        }

        let start = self.offset;
        let bytes = self.input.as_bytes();

        let end = match memchr(b'\n', &bytes[start..]) {
            Some(pos) => start + pos,
            None => bytes.len(),
        };
        self.offset = if end < bytes.len() { end + 1 } else { end };
        self.number += 1;

        // `\r` and `\n` are ASCII, so trimming them keeps char boundaries intact.
        let text = self.input[start..end].trim_end_matches(['\r', '\n']);

        Some(Line {
            text,
            span: Span::new(start as u32, (start + text.len()) as u32),
            number: self.number,
        })
    }
}

/// Split `input` into lines.
#[inline]
pub fn lines(input: &str) -> Lines<'_> {
    Lines::new(input)
}
