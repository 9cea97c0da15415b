//! Final document assembly and delivery.
//!
//! The converter only produces fragments and a stylesheet. This module joins
//! them into a standalone HTML page and hands the result to a [`Sink`]
//! picked by the caller: returned as a string, written to a file, or passed
//! to an external PDF renderer.

use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::error::SinkError;

/// Wrap body markup and a stylesheet in a minimal HTML page.
pub fn wrap_html(style: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>",
        style, body
    )
}

/// The complete HTML page for a document.
pub fn render_html(document: &Document) -> String {
    wrap_html(&document.style, &document.body())
}

/// Destination for a finished document.
pub trait Sink {
    /// What delivery gives back to the caller.
    type Output;

    fn deliver(&mut self, document: &Document) -> Result<Self::Output, SinkError>;
}

/// Hand `document` to `sink`.
pub fn assemble<S: Sink>(document: &Document, sink: &mut S) -> Result<S::Output, SinkError> {
    tracing::debug!(fragments = document.fragments.len(), "assembling document");
    sink.deliver(document)
}

/// Returns the HTML page as a string.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringSink;

impl Sink for StringSink {
    type Output = String;

    fn deliver(&mut self, document: &Document) -> Result<String, SinkError> {
        Ok(render_html(document))
    }
}

/// External program or library that turns HTML into a PDF file.
pub trait PdfRenderer {
    /// Render `body` styled by `stylesheet` into `target`.
    fn render(&self, body: &str, stylesheet: &str, target: &Path) -> Result<(), SinkError>;
}

/// Sends the body and stylesheet to a [`PdfRenderer`].
#[derive(Debug, Clone)]
pub struct PdfSink<R> {
    renderer: R,
    target: PathBuf,
}

impl<R: PdfRenderer> PdfSink<R> {
    pub fn new(renderer: R, target: impl Into<PathBuf>) -> Self {
        Self {
            renderer,
            target: target.into(),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }
}

impl<R: PdfRenderer> Sink for PdfSink<R> {
    type Output = PathBuf;

    fn deliver(&mut self, document: &Document) -> Result<PathBuf, SinkError> {
        self.renderer
            .render(&document.body(), &document.style, &self.target)?;
        Ok(self.target.clone())
    }
}
