//! Output formatting for check-requirements.
//!
//! Text output is streamed through [`TextReporter`] while the run is in
//! progress. JSON and JUnit output describe a finished run and go through
//! [`OutputFormatter`].

use crate::cli::args::OutputFormat;
use crate::engine::result::{CheckResult, ResultSummary, ValidationReport};
use crate::engine::validator::ReportSink;
use serde::Serialize;
use std::io::Write;

pub const ALL_PASSED: &str = "All checks passed.";
pub const SOME_FAILED: &str = "One or more checks failed.";

/// `[OK] <file> - <label>` / `[FAIL] <file> - <label>`
pub fn format_line(result: &CheckResult) -> String {
    format!("[{}] {} - {}", result.mark(), result.file_name, result.label)
}

/// Closing line of a text report
pub fn summary_line(report: &ValidationReport) -> &'static str {
    if report.all_passed() {
        ALL_PASSED
    } else {
        SOME_FAILED
    }
}

/// Streams text lines to a writer as results arrive
pub struct TextReporter<W: Write> {
    out: W,
    quiet: bool,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W, quiet: bool) -> Self {
        TextReporter { out, quiet }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextReporter<W> {
    fn emit(&mut self, result: &CheckResult) {
        if self.quiet && result.passed {
            return;
        }
        // A closed stdout must not abort the run.
        let _ = writeln!(self.out, "{}", format_line(result));
    }

    fn finish(&mut self, report: &ValidationReport) {
        let _ = writeln!(self.out, "\n{}", summary_line(report));
        let _ = self.out.flush();
    }
}

/// Trait for formatters of a finished run
pub trait OutputFormatter {
    /// Format a validation report into a string
    fn format(&self, report: &ValidationReport) -> String;
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: ResultSummary,
    all_passed: bool,
    results: &'a [CheckResult],
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let document = JsonReport {
            summary: report.summary(),
            all_passed: report.all_passed(),
            results: &report.results,
        };
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };
        // Plain strings and integers always serialize.
        rendered.unwrap_or_default()
    }
}

/// JUnit XML formatter
pub struct JunitFormatter;

impl JunitFormatter {
    pub fn new() -> Self {
        JunitFormatter
    }

    fn escape_xml(s: &str) -> String {
        let mut result = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => result.push_str("&amp;"),
                '<' => result.push_str("&lt;"),
                '>' => result.push_str("&gt;"),
                '"' => result.push_str("&quot;"),
                '\'' => result.push_str("&apos;"),
                c => result.push(c),
            }
        }
        result
    }
}

impl Default for JunitFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JunitFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let summary = report.summary();
        let mut output = String::new();

        output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        output.push_str(&format!(
            "<testsuite name=\"check-requirements\" tests=\"{}\" failures=\"{}\">\n",
            summary.total, summary.failed
        ));

        for result in &report.results {
            let classname = Self::escape_xml(&result.file_name);
            let name = Self::escape_xml(&result.label);
            if result.passed {
                output.push_str(&format!(
                    "  <testcase classname=\"{}\" name=\"{}\"/>\n",
                    classname, name
                ));
            } else {
                output.push_str(&format!(
                    "  <testcase classname=\"{}\" name=\"{}\">\n",
                    classname, name
                ));
                output.push_str(&format!(
                    "    <failure message=\"{} - {}\"/>\n",
                    classname, name
                ));
                output.push_str("  </testcase>\n");
            }
        }

        output.push_str("</testsuite>");
        output
    }
}

/// Formatter for end-of-run output, `None` for streamed text
pub fn get_formatter(format: OutputFormat) -> Option<Box<dyn OutputFormatter>> {
    match format {
        OutputFormat::Text => None,
        OutputFormat::Json => Some(Box::new(JsonFormatter::new(true))),
        OutputFormat::Junit => Some(Box::new(JunitFormatter::new())),
    }
}
