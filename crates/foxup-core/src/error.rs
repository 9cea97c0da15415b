use crate::span::Span;
use std::fmt;
use std::path::PathBuf;

/// Categories of non-fatal conversion problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A command character with no registered handler
    UnknownCommand,
    /// A command that requires a numeric argument was given none
    MissingArgument,
}

impl DiagnosticKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            DiagnosticKind::UnknownCommand => "unknown-command",
            DiagnosticKind::MissingArgument => "missing-argument",
        }
    }
}

/// A problem found while converting a line.
///
/// Diagnostics never stop conversion; the offending command is skipped (or
/// replaced by a placeholder) and the rest of the line is still rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable message
    pub message: String,
    pub kind: DiagnosticKind,
    /// The command character involved
    pub command: char,
    /// 1-based line number, set once the line is known
    pub line: Option<u32>,
    /// 0-based character column within the escaped line text
    pub column: usize,
    /// Source span of the whole line
    pub span: Option<Span>,
}

impl Diagnostic {
    /// Create a diagnostic for an unregistered command character.
    pub fn unknown_command(command: char, column: usize) -> Self {
        Self {
            message: format!("unknown command: {}", command),
            kind: DiagnosticKind::UnknownCommand,
            command,
            line: None,
            column,
            span: None,
        }
    }

    /// Create a diagnostic for a command missing its required argument.
    pub fn missing_argument(command: char, name: &str, column: usize) -> Self {
        Self {
            message: format!("command {} ({}) lacks a parameter, ignoring", command, name),
            kind: DiagnosticKind::MissingArgument,
            command,
            line: None,
            column,
            span: None,
        }
    }

    /// Attach the line this diagnostic was found on.
    pub fn at_line(mut self, line: u32, span: Span) -> Self {
        self.line = Some(line);
        self.span = Some(span);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(line) = self.line {
            write!(f, " at line {}, column {}", line, self.column + 1)?;
        }
        Ok(())
    }
}

/// Diagnostics collected while converting one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Count diagnostics of the given kind.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.items.iter().filter(|d| d.kind == kind).count()
    }
}

/// Failure to deliver a finished document to its destination.
///
/// This is the only error that ends the processing of a document.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF renderer '{program}' failed: {reason}")]
    Renderer { program: String, reason: String },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_location_once_known() {
        let d = Diagnostic::unknown_command('x', 3);
        assert_eq!(d.to_string(), "unknown command: x");

        let d = d.at_line(7, Span::new(10, 20));
        assert_eq!(d.to_string(), "unknown command: x at line 7, column 4");
        assert_eq!(d.span, Some(Span::new(10, 20)));
    }

    #[test]
    fn counts_by_kind() {
        let mut all = Diagnostics::new();
        all.push(Diagnostic::unknown_command('q', 0));
        all.push(Diagnostic::missing_argument('s', "size", 1));
        all.push(Diagnostic::unknown_command('z', 2));

        assert_eq!(all.len(), 3);
        assert_eq!(all.count(DiagnosticKind::UnknownCommand), 2);
        assert_eq!(all.count(DiagnosticKind::MissingArgument), 1);
    }
}
