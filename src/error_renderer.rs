//! Error rendering using ariadne
//!
//! This module renders evaluation errors with the offending part of the
//! expression underlined, the error code and any help text.

use crate::{Diagnostic, Error, Span};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;
use std::ops::Range;

const SOURCE_ID: &str = "<expression>";

/// Render an error against its source expression to stderr
///
/// # Example
/// ```no_run
/// use simulator::{evaluate_expression, render_error};
///
/// let source = "(1 + 2";
/// if let Err(e) = evaluate_expression(source) {
///     render_error(&e, source);
/// }
/// ```
pub fn render_error(error: &Error, source: &str) {
    render_error_to_writer(error, source, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
///
/// This is useful when you want to control where the error is written,
/// such as to a file, a buffer, or a custom output stream.
pub fn render_error_to(
    error: &Error,
    source: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    render_error_to_writer(error, source, writer, use_color)
}

/// Render an error to a String (useful for logs, web UIs, etc.)
pub fn render_error_to_string(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
///
/// This is the same as `render_error_to_string` but without ANSI color codes,
/// making the output easier to compare in tests.
pub fn render_error_to_string_no_color(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    source: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    render_diagnostic(source, &error.to_diagnostic(source), writer, use_color)
}

fn render_diagnostic(
    source: &str,
    diag: &Diagnostic,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let span = label_range(source, &diag.span);
    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_message(&diag.message)
        .with_config(ariadne::Config::default().with_color(use_color));

    if let Some(code) = &diag.code {
        report = report.with_code(code);
    }

    report = report.with_label(
        Label::new((SOURCE_ID, span))
            .with_message(&diag.message)
            .with_color(colors.next()),
    );

    for help_msg in &diag.help {
        report = report.with_help(help_msg);
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}

/// Character range for the label. An empty span at the end of input is
/// widened to the last character so that it stays visible.
fn label_range(source: &str, span: &Span) -> Range<usize> {
    // ariadne counts characters, not bytes.
    let start = source[..span.start()].chars().count();
    if !span.is_empty() {
        return start..source[..span.end()].chars().count();
    }
    match source.chars().count() {
        0 => 0..0,
        len if start >= len => len - 1..len,
        _ => start..start + 1,
    }
}
