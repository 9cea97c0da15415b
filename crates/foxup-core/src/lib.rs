//! # FoxUp Core
//!
//! Converter for the FoxUp markup language into HTML.
//!
//! FoxUp is line oriented. A document may open with `key: value` settings
//! (`lang` and `title`), ended by the first other line. Body text is plain
//! until a `*` enters command mode, where single letters apply formatting
//! and `.` returns to text.
//!
//! ## Quick Start
//!
//! ```rust
//! use foxup_core::{assemble, convert, StringSink};
//!
//! let input = "title: Notes\n\nSome *b.bold*R. text";
//! let conversion = convert(input);
//! assert!(conversion.is_clean());
//!
//! let html = assemble(&conversion.document, &mut StringSink).unwrap();
//! assert!(html.contains("Some <b>bold</b> text"));
//! ```
//!
//! ## Commands
//!
//! | Command | Effect |
//! |---------|--------|
//! | `b` | bold |
//! | `i` | italic |
//! | `s<px>` | font size in pixels |
//! | `\|` | table cell boundary; a line containing `*\|.` anywhere starts a table row |
//! | `R[n]` | close the last `n` opened commands, or all of them |
//!
//! ## Diagnostics
//!
//! Unknown commands and missing arguments never stop conversion:
//!
//! ```rust
//! use foxup_core::convert;
//!
//! let conversion = convert("*q.text");
//! assert_eq!(conversion.diagnostics.len(), 1);
//! assert!(conversion.document.body().contains("text"));
//! ```

pub mod assemble;
pub mod document;
pub mod error;
pub mod escape;
pub mod inline;
pub mod lexer;
pub mod registry;
pub mod setup;
pub mod span;
pub mod specials;
pub mod style;

pub use assemble::{assemble, render_html, PdfRenderer, PdfSink, Sink, StringSink};
pub use document::{convert, Conversion, Converter, Document, Phase};
pub use error::{Diagnostic, DiagnosticKind, Diagnostics, SinkError};
pub use registry::TagStack;
pub use specials::Special;
