//! Output formatting integration tests.
//!
//! All formatters must describe the same run.

use crate::fixtures::{Project, UNSORTED_SCRIPT};
use check_requirements::cli::output::{
    format_line, summary_line, JsonFormatter, JunitFormatter, OutputFormatter, TextReporter,
};
use check_requirements::{validate, validate_with_sink};

#[test]
fn test_streamed_text_matches_report() {
    let project = Project::conformant();
    project.write("2-export_to_JSON.py", UNSORTED_SCRIPT);

    let mut reporter = TextReporter::new(Vec::new(), false);
    let report = validate_with_sink(project.config(), &mut reporter).unwrap();
    let streamed = String::from_utf8(reporter.into_inner()).unwrap();

    let mut expected: String = report
        .results
        .iter()
        .map(|r| format!("{}\n", format_line(r)))
        .collect();
    expected.push_str(&format!("\n{}\n", summary_line(&report)));
    assert_eq!(streamed, expected);
}

#[test]
fn test_formatters_agree_on_failures() {
    let project = Project::conformant();
    project.write("2-export_to_JSON.py", UNSORTED_SCRIPT);
    let report = validate(project.config()).unwrap();
    let failed = report.summary().failed as usize;

    let text: Vec<String> = report.results.iter().map(format_line).collect();
    assert_eq!(text.iter().filter(|l| l.starts_with("[FAIL]")).count(), failed);

    let junit = JunitFormatter::new().format(&report);
    assert_eq!(junit.matches("<failure").count(), failed);

    let json: serde_json::Value =
        serde_json::from_str(&JsonFormatter::new(true).format(&report)).unwrap();
    let json_failed = json["results"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|r| r["passed"] == false)
        .count();
    assert_eq!(json_failed, failed);
}
