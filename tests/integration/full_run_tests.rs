//! Full run integration tests.
//!
//! Runs the validator library against scratch projects and checks
//! ordering, aggregation and failure handling.

use crate::fixtures::{Project, CONFORMANT_SCRIPT, UNSORTED_SCRIPT};
use check_requirements::engine::validator::RequirementsValidator;
use check_requirements::{validate, CheckError, CheckResult, FileCheck, DEFAULT_TARGET_FILES};

const GIT_LABEL: &str = "git executable mode";

fn results_for<'a>(results: &'a [CheckResult], file: &str) -> Vec<&'a CheckResult> {
    results.iter().filter(|r| r.file_name == file).collect()
}

#[test]
fn test_conformant_project_passes() {
    let project = Project::conformant();
    let report = validate(project.config()).unwrap();

    assert_eq!(report.results.len(), 1 + 4 * FileCheck::ALL.len());
    for result in &report.results {
        if result.label != GIT_LABEL {
            assert!(result.passed, "{} - {} failed", result.file_name, result.label);
        }
    }

    if project.has_git("test_conformant_project_passes") {
        assert!(report.all_passed());
        assert_eq!(report.exit_code(), 0);
    }
}

#[test]
fn test_report_order_is_deterministic() {
    let project = Project::conformant();
    let first = validate(project.config()).unwrap();
    let second = validate(project.config()).unwrap();
    assert_eq!(first, second);

    assert_eq!(first.results[0], CheckResult::new("README.md", "exists", true));
    let files: Vec<&str> = first.results[1..]
        .chunks(FileCheck::ALL.len())
        .map(|chunk| chunk[0].file_name.as_str())
        .collect();
    assert_eq!(files, DEFAULT_TARGET_FILES.to_vec());
}

#[test]
fn test_missing_readme_still_checks_every_file() {
    let project = Project::conformant();
    project.remove("README.md");

    let report = validate(project.config()).unwrap();

    assert_eq!(report.results.len(), 1 + 4 * FileCheck::ALL.len());
    assert_eq!(report.results[0], CheckResult::new("README.md", "exists", false));
    assert_eq!(report.exit_code(), 1);

    if project.has_git("test_missing_readme_still_checks_every_file") {
        let failures = report.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].file_name, "README.md");
    }
}

#[test]
fn test_unsorted_imports_fail_independently() {
    let project = Project::conformant();
    project.write("0-gather_data_from_an_API.py", UNSORTED_SCRIPT);

    let report = validate(project.config()).unwrap();
    let file = results_for(&report.results, "0-gather_data_from_an_API.py");

    assert_eq!(file.len(), FileCheck::ALL.len());
    for result in file {
        match result.label.as_str() {
            "alphabetical imports" => assert!(!result.passed),
            GIT_LABEL => {}
            _ => assert!(result.passed, "{} should pass", result.label),
        }
    }
    assert!(!report.all_passed());
}

#[test]
fn test_each_content_rule_fails_on_its_own() {
    let cases = [
        ("shebang", CONFORMANT_SCRIPT.replacen("#!/usr/bin/python3", "#!/usr/bin/env python3", 1)),
        ("trailing newline", CONFORMANT_SCRIPT.trim_end().to_string()),
        (
            "module docstring",
            CONFORMANT_SCRIPT.replacen(
                "\"\"\"Export a specific employee's TODO list to CSV format.\"\"\"\n",
                "",
                1,
            ),
        ),
        (
            "__main__ guard",
            CONFORMANT_SCRIPT.replace("if __name__ == \"__main__\":", "if True:"),
        ),
        (
            "dict get usage",
            CONFORMANT_SCRIPT.replace("user.get(\"username\")", "user[\"username\"]"),
        ),
    ];

    for (label, script) in cases {
        let project = Project::new();
        project.write("script.py", &script);
        let validator = RequirementsValidator::new(project.config());
        let file = validator.validate_file("script.py").unwrap();

        for result in &file.results {
            if result.label == label {
                assert!(!result.passed, "{} should fail", label);
            } else if result.label != GIT_LABEL {
                assert!(result.passed, "{} should pass while {} fails", result.label, label);
            }
        }
    }
}

#[test]
fn test_untracked_or_plain_mode_fails_git_check() {
    let project = Project::new();
    if !project.has_git("test_untracked_or_plain_mode_fails_git_check") {
        return;
    }
    project.write("tracked.py", CONFORMANT_SCRIPT);
    project.write("plain.py", CONFORMANT_SCRIPT);
    project.write("untracked.py", CONFORMANT_SCRIPT);
    project.track_executable("tracked.py");
    std::process::Command::new("git")
        .args(["add", "--", "plain.py"])
        .current_dir(project.path())
        .output()
        .unwrap();

    let validator = RequirementsValidator::new(project.config());
    let git_result = |name: &str| {
        let file = validator.validate_file(name).unwrap();
        file.results
            .iter()
            .find(|r| r.label == GIT_LABEL)
            .map(|r| r.passed)
            .unwrap()
    };

    assert!(git_result("tracked.py"));
    assert!(!git_result("plain.py"));
    assert!(!git_result("untracked.py"));
}

#[test]
fn test_missing_target_is_fatal() {
    let project = Project::conformant();
    project.remove("2-export_to_JSON.py");

    match validate(project.config()) {
        Err(CheckError::Io { path, .. }) => {
            assert!(path.ends_with("2-export_to_JSON.py"));
        }
        other => panic!("expected I/O error, got {:?}", other),
    }
}

#[test]
fn test_custom_target_list() {
    let project = Project::new();
    project.write("README.md", "# API\n");
    project.write("only.py", CONFORMANT_SCRIPT);

    let mut config = project.config();
    config.target_files = vec!["only.py".to_string()];
    let report = validate(config).unwrap();

    assert_eq!(report.results.len(), 1 + FileCheck::ALL.len());
    assert!(report.results[1..].iter().all(|r| r.file_name == "only.py"));
}
