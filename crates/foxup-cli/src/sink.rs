//! Output destinations that touch the filesystem or other programs.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use foxup_core::assemble::wrap_html;
use foxup_core::{render_html, Document, PdfRenderer, Sink, SinkError};

/// Output path for `input` with `extension` appended, e.g. `notes.fu.html`.
pub(crate) fn output_path(input: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Writes the HTML page to a file.
#[derive(Debug, Clone)]
pub(crate) struct HtmlFileSink {
    path: PathBuf,
}

impl HtmlFileSink {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Sink for HtmlFileSink {
    type Output = PathBuf;

    fn deliver(&mut self, document: &Document) -> Result<PathBuf, SinkError> {
        fs::write(&self.path, render_html(document)).map_err(|source| SinkError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(self.path.clone())
    }
}

/// Renders PDFs with an external program called as `<program> - <target>`,
/// with the HTML page on stdin. WeasyPrint accepts this form.
#[derive(Debug, Clone)]
pub(crate) struct CommandRenderer {
    program: String,
}

impl CommandRenderer {
    pub(crate) fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn failure(&self, reason: impl Into<String>) -> SinkError {
        SinkError::Renderer {
            program: self.program.clone(),
            reason: reason.into(),
        }
    }
}

impl PdfRenderer for CommandRenderer {
    fn render(&self, body: &str, stylesheet: &str, target: &Path) -> Result<(), SinkError> {
        let page = wrap_html(stylesheet, body);

        let mut child = Command::new(&self.program)
            .arg("-")
            .arg(target)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.failure(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(page.as_bytes()) {
                drop(stdin);
                let status = child.wait().map_err(|e| self.failure(e.to_string()))?;
                return Err(self.failure(format!("failed to send page ({e}), {status}")));
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|e| self.failure(e.to_string()))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.failure(format!("{}: {}", output.status, stderr.trim())));
        }

        tracing::debug!(program = %self.program, target = %target.display(), "rendered PDF");
        Ok(())
    }
}
