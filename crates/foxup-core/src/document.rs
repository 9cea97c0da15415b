//! Line-by-line document conversion.
//!
//! A [`Converter`] starts in the setup phase, collecting `lang` and `title`
//! settings. The first line that is not a setting switches it to the body
//! phase and is then converted like any other body line. Body lines go
//! through the special-block tracker, the inline interpreter, and the tracker
//! again, and the three results are appended to the document.
//!
//! Only the special-block state carries over from one line to the next.

use crate::error::Diagnostics;
use crate::escape::escape_html;
use crate::inline;
use crate::lexer::{self, Line};
use crate::setup::{parse_setting, Setting};
use crate::span::Span;
use crate::specials::Special;
use crate::style::generate_css;

/// Paragraph separator appended for a blank line.
pub const PARAGRAPH_BREAK: &str = "</p>\n<p>";

/// Which part of the document is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Setup,
    Body,
}

/// Whether anything was emitted since the last paragraph opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Paragraph {
    Empty,
    Filled,
}

/// A converted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// HTML fragments in output order. The first one opens a paragraph.
    pub fragments: Vec<String>,
    /// Escaped `lang` setting, if given.
    pub language: Option<String>,
    /// Escaped `title` setting, if given.
    pub title: Option<String>,
    /// Generated stylesheet.
    pub style: String,
}

impl Document {
    /// Fragments joined into the body markup.
    pub fn body(&self) -> String {
        self.fragments.join("\n")
    }
}

/// A document together with the diagnostics raised while converting it.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub document: Document,
    pub diagnostics: Diagnostics,
}

impl Conversion {
    /// Check if the document converted without diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Incremental converter for one document.
#[derive(Debug)]
pub struct Converter {
    phase: Phase,
    special: Special,
    paragraph: Paragraph,
    language: Option<String>,
    title: Option<String>,
    style: String,
    fragments: Vec<String>,
    diagnostics: Diagnostics,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    pub fn new() -> Self {
        Self {
            phase: Phase::Setup,
            special: Special::None,
            paragraph: Paragraph::Empty,
            language: None,
            title: None,
            style: String::new(),
            fragments: vec!["<p>".to_string()],
            diagnostics: Diagnostics::new(),
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn special(&self) -> Special {
        self.special
    }

    /// Fragments produced so far.
    #[inline]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Convert one line. `line.text` is the raw, unescaped text.
    pub fn push_line(&mut self, line: Line<'_>) {
        let text = escape_html(line.text);
        match self.phase {
            Phase::Setup => self.setup_line(&text, line.number, line.span),
            Phase::Body => self.body_line(&text, line.number, line.span),
        }
    }

    /// Convert every line of `input`.
    pub fn push_str(&mut self, input: &str) {
        for line in lexer::lines(input) {
            self.push_line(line);
        }
    }

    /// Finish the document.
    ///
    /// Input that ends during setup still gets a stylesheet built from the
    /// settings seen so far.
    pub fn finish(mut self) -> Conversion {
        if self.phase == Phase::Setup {
            self.enter_body();
        }

        Conversion {
            document: Document {
                fragments: self.fragments,
                language: self.language,
                title: self.title,
                style: self.style,
            },
            diagnostics: self.diagnostics,
        }
    }

    fn setup_line(&mut self, text: &str, number: u32, span: Span) {
        match parse_setting(text) {
            Some(Setting::Language(code)) => self.language = Some(code.to_string()),
            Some(Setting::Title(title)) => self.title = Some(title.to_string()),
            Some(Setting::Other { key, .. }) => {
                tracing::debug!(line = number, key, "ignoring unknown setting");
            }
            None => {
                self.enter_body();
                self.body_line(text, number, span);
            }
        }
    }

    fn enter_body(&mut self) {
        self.style = generate_css(
            self.title.as_deref().unwrap_or(""),
            self.language.as_deref().unwrap_or(""),
        );
        self.phase = Phase::Body;
        tracing::debug!(
            language = self.language.as_deref().unwrap_or(""),
            title = self.title.as_deref().unwrap_or(""),
            "setup finished"
        );
    }

    fn body_line(&mut self, text: &str, number: u32, span: Span) {
        if text.is_empty() && !self.special.is_active() {
            if self.paragraph == Paragraph::Filled {
                self.fragments.push(PARAGRAPH_BREAK.to_string());
                self.paragraph = Paragraph::Empty;
            }
            return;
        }

        let (before, special) = self.special.before(text);
        if special != self.special {
            tracing::debug!(line = number, from = ?self.special, to = ?special, "special block changed");
        }
        self.special = special;

        let output = inline::convert_line(text);
        for diagnostic in output.diagnostics {
            let diagnostic = diagnostic.at_line(number, span);
            tracing::warn!(
                line = number,
                command = %diagnostic.command,
                "{}",
                diagnostic.message
            );
            self.diagnostics.push(diagnostic);
        }

        self.fragments.push(before.to_string());
        self.fragments.push(output.html);
        self.fragments.push(self.special.after().to_string());
        self.paragraph = Paragraph::Filled;
    }
}

/// Convert a whole document.
pub fn convert(input: &str) -> Conversion {
    let mut converter = Converter::new();
    converter.push_str(input);
    converter.finish()
}
