//! Inline command interpreter.
//!
//! A line is plain text until a `*` switches it into command mode. In command
//! mode every character is a command:
//!
//! - `*` leaves command mode and emits a literal `*` (so `**` escapes it)
//! - `.` leaves command mode silently
//! - a registered command runs its handler, taking any digits right after it
//!   as its numeric argument
//! - a stray digit is ignored
//! - anything else is reported as an unknown command
//!
//! Command mode and the close-tag stack are local to one line. Whatever is
//! still open when the line ends is dropped.

use memchr::memchr;

use crate::error::Diagnostic;
use crate::registry::{self, TagStack};

/// Whether the scanner is reading literal text or commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Text,
    Command,
}

/// Result of converting one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutput {
    pub html: String,
    /// Stack left after the last command on the line.
    pub stack: TagStack,
    /// Mode the line ended in. The caller discards it.
    pub mode: Mode,
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert a line, starting in text mode with an empty stack.
///
/// `line` must already be HTML-escaped.
#[inline]
pub fn convert_line(line: &str) -> LineOutput {
    convert_from(line, Mode::Text, TagStack::new())
}

/// Convert `line` starting from the given mode and stack.
pub fn convert_from(line: &str, mode: Mode, stack: TagStack) -> LineOutput {
    let mut scanner = Scanner {
        line,
        pos: 0,
        column: 0,
        html: String::with_capacity(line.len() + 16),
        diagnostics: Vec::new(),
    };
    let (mode, stack) = scanner.run(mode, stack);

    LineOutput {
        html: scanner.html,
        stack,
        mode,
        diagnostics: scanner.diagnostics,
    }
}

struct Scanner<'a> {
    line: &'a str,
    pos: usize,
    /// Character column of `pos`.
    column: usize,
    html: String,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Scanner<'a> {
    fn run(&mut self, mut mode: Mode, mut stack: TagStack) -> (Mode, TagStack) {
        while self.pos < self.line.len() {
            (mode, stack) = match mode {
                Mode::Text => (self.text(), stack),
                Mode::Command => self.command(stack),
            };
        }
        (mode, stack)
    }

    /// Copy literal text up to the next `*` and enter command mode after it.
    fn text(&mut self) -> Mode {
        let rest = &self.line[self.pos..];
        let (literal, mode) = match memchr(b'*', rest.as_bytes()) {
            Some(star) => (&rest[..star], Mode::Command),
            None => (rest, Mode::Text),
        };
        self.html.push_str(literal);
        self.pos += literal.len();
        self.column += literal.chars().count();
        if mode == Mode::Command {
            self.pos += 1;
            self.column += 1;
        }
        mode
    }

    /// Handle a single command character.
    fn command(&mut self, stack: TagStack) -> (Mode, TagStack) {
        let Some(c) = self.line[self.pos..].chars().next() else {
            return (Mode::Command, stack);
        };
        let at = self.column;
        self.pos += c.len_utf8();
        self.column += 1;

        match c {
            '*' => {
                self.html.push('*');
                (Mode::Text, stack)
            }
            '.' => (Mode::Text, stack),
            _ => match registry::lookup(c) {
                Some(cmd) => {
                    let arg = self.argument();
                    let expansion = (cmd.handler)(arg, stack);
                    if expansion.missing_argument {
                        self.diagnostics
                            .push(Diagnostic::missing_argument(c, cmd.name, at));
                    }
                    self.html.push_str(&expansion.markup);
                    (Mode::Command, expansion.stack)
                }
                None if c.is_numeric() => (Mode::Command, stack),
                None => {
                    self.diagnostics.push(Diagnostic::unknown_command(c, at));
                    // Placeholder keeps later `R<n>` counts in step with the commands written.
                    (Mode::Command, stack.push(""))
                }
            },
        }
    }

    /// Consume the ASCII digits after a command.
    ///
    /// Returns `None` when there are no digits. Values past `u64::MAX` saturate.
    fn argument(&mut self) -> Option<u64> {
        let digits = &self.line.as_bytes()[self.pos..];
        let len = digits.iter().take_while(|b| b.is_ascii_digit()).count();
        self.pos += len;
        self.column += len;

        if len == 0 {
            return None;
        }
        Some(digits[..len].iter().fold(0u64, |n, d| {
            n.saturating_mul(10).saturating_add(u64::from(d - b'0'))
        }))
    }
}
