//! FoxUp CLI - Convert FoxUp documents to HTML or PDF
//!
//! Usage:
//!   foxup [OPTIONS] <FILE>...
//!
//! Every file is converted on its own and written next to the input as
//! `<FILE>.html` or `<FILE>.pdf`.

mod error;
mod sink;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use foxup_core::{assemble, convert, render_html, Diagnostic, PdfSink};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use error::CliError;
use sink::{output_path, CommandRenderer, HtmlFileSink};

/// FoxUp - convert FoxUp markup documents to HTML or PDF.
#[derive(Debug, Parser)]
#[command(name = "foxup", version, about)]
struct Cli {
    /// Documents to convert.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html, env = "FOXUP_FORMAT")]
    format: OutputFormat,

    /// Print the HTML page to stdout instead of writing a file.
    #[arg(long, conflicts_with = "json")]
    stdout: bool,

    /// Program used to render PDFs, called as `<PROGRAM> - <OUTPUT>`.
    #[arg(long, env = "FOXUP_PDF_RENDERER", default_value = "weasyprint")]
    pdf_renderer: String,

    /// Print a JSON report of outputs and diagnostics.
    #[arg(short, long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Html,
    Pdf,
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

/// Convert every file. Returns `Ok(false)` if any of them failed.
fn run(cli: &Cli) -> Result<bool, CliError> {
    if cli.stdout && cli.format == OutputFormat::Pdf {
        return Err(CliError::Validation(
            "--stdout only works with --format html".to_string(),
        ));
    }

    let mut reports = Vec::with_capacity(cli.files.len());
    let mut all_ok = true;

    for file in &cli.files {
        tracing::info!("Parsing {}", file.display());
        match convert_file(cli, file) {
            Ok(report) => reports.push(report),
            Err(e) => {
                all_ok = false;
                eprintln!("error: {}", e);
                reports.push(FileReport::failed(file, &e));
            }
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(all_ok)
}

fn convert_file(cli: &Cli, file: &Path) -> Result<FileReport, CliError> {
    let input = fs::read_to_string(file).map_err(|source| CliError::Read {
        path: file.to_path_buf(),
        source,
    })?;

    let conversion = convert(&input);
    let document = &conversion.document;

    let output = match cli.format {
        OutputFormat::Html if cli.stdout => {
            println!("{}", render_html(document));
            None
        }
        OutputFormat::Html => {
            let mut sink = HtmlFileSink::new(output_path(file, "html"));
            Some(assemble(document, &mut sink)?)
        }
        OutputFormat::Pdf => {
            let renderer = CommandRenderer::new(cli.pdf_renderer.as_str());
            let mut sink = PdfSink::new(renderer, output_path(file, "pdf"));
            Some(assemble(document, &mut sink)?)
        }
    };

    if let Some(path) = &output {
        tracing::info!("Wrote {}", path.display());
    }

    Ok(FileReport {
        file: file.display().to_string(),
        output: output.map(|p| p.display().to_string()),
        error: None,
        diagnostics: conversion.diagnostics.iter().map(JsonDiagnostic::from).collect(),
    })
}

// =============================================================================
// JSON Output
// =============================================================================

#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    output: Option<String>,
    error: Option<String>,
    diagnostics: Vec<JsonDiagnostic>,
}

impl FileReport {
    fn failed(file: &Path, error: &CliError) -> Self {
        Self {
            file: file.display().to_string(),
            output: None,
            error: Some(error.to_string()),
            diagnostics: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonDiagnostic {
    kind: &'static str,
    message: String,
    command: char,
    line: Option<u32>,
    column: usize,
}

impl From<&Diagnostic> for JsonDiagnostic {
    fn from(d: &Diagnostic) -> Self {
        Self {
            kind: d.kind.as_str(),
            message: d.message.clone(),
            command: d.command,
            line: d.line,
            column: d.column + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("foxup").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_html() {
        let cli = cli(&["a.fu", "b.fu"]);
        assert_eq!(cli.format, OutputFormat::Html);
        assert_eq!(cli.files, vec![PathBuf::from("a.fu"), PathBuf::from("b.fu")]);
        assert!(!cli.stdout);
    }

    #[test]
    fn parses_pdf_options() {
        let cli = cli(&["--format", "pdf", "--pdf-renderer", "my-renderer", "doc.fu"]);
        assert_eq!(cli.format, OutputFormat::Pdf);
        assert_eq!(cli.pdf_renderer, "my-renderer");
    }

    #[test]
    fn requires_a_file() {
        assert!(Cli::try_parse_from(["foxup"]).is_err());
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["foxup", "--format", "docx", "a.fu"]).is_err());
    }

    #[test]
    fn stdout_with_pdf_is_rejected() {
        let cli = cli(&["--stdout", "--format", "pdf", "a.fu"]);
        assert!(matches!(run(&cli), Err(CliError::Validation(_))));
    }

    #[test]
    fn converts_file_next_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes.fu");
        fs::write(&input, "title: Notes\n\n*b.Hi*R.\n*q.odd").unwrap();

        let cli = cli(&[input.to_str().unwrap()]);
        let report = convert_file(&cli, &input).unwrap();

        let expected = dir.path().join("notes.fu.html");
        assert_eq!(report.output, Some(expected.display().to_string()));
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].kind, "unknown-command");
        assert_eq!(report.diagnostics[0].line, Some(4));

        let html = fs::read_to_string(expected).unwrap();
        assert!(html.contains("<b>Hi</b>"));
    }

    #[test]
    fn missing_input_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("absent.fu");
        let cli = cli(&[input.to_str().unwrap()]);

        let err = convert_file(&cli, &input).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
        assert!(err.to_string().starts_with("failed to read"));
    }

    #[test]
    fn report_serializes_to_json() {
        let conversion = convert("*s.x");
        let report = FileReport {
            file: "a.fu".to_string(),
            output: None,
            error: None,
            diagnostics: conversion.diagnostics.iter().map(JsonDiagnostic::from).collect(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["diagnostics"][0]["kind"], "missing-argument");
        assert_eq!(json["diagnostics"][0]["command"], "s");
        assert_eq!(json["diagnostics"][0]["column"], 2);
    }
}
