//! Result aggregation and reporting.
//!
//! Collects check results and generates summaries.

use serde::Serialize;

/// Outcome of one check against one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    #[serde(rename = "file")]
    pub file_name: String,
    #[serde(rename = "check")]
    pub label: String,
    pub passed: bool,
}

impl CheckResult {
    pub fn new(file_name: impl Into<String>, label: impl Into<String>, passed: bool) -> Self {
        CheckResult {
            file_name: file_name.into(),
            label: label.into(),
            passed,
        }
    }

    /// `OK` or `FAIL`
    pub fn mark(&self) -> &'static str {
        if self.passed {
            "OK"
        } else {
            "FAIL"
        }
    }
}

/// All results for one file, in battery order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file_name: String,
    pub results: Vec<CheckResult>,
}

impl FileReport {
    pub fn new(file_name: impl Into<String>) -> Self {
        FileReport {
            file_name: file_name.into(),
            results: Vec::new(),
        }
    }

    /// Record the outcome of a check
    pub fn record(&mut self, label: &str, passed: bool) {
        self.results
            .push(CheckResult::new(self.file_name.clone(), label, passed));
    }

    /// Every check for this file passed
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }
}

/// Result summary statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub passed: u32,
    pub failed: u32,
    pub total: u32,
}

/// Validation report containing all check results in emission order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub results: Vec<CheckResult>,
}

impl ValidationReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single result
    pub fn add_result(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Fold a finished file into the report
    pub fn add_file(&mut self, file: FileReport) {
        self.results.extend(file.results);
    }

    /// Every check in the run passed
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// Get only failed checks
    pub fn failures(&self) -> Vec<&CheckResult> {
        self.results.iter().filter(|r| !r.passed).collect()
    }

    /// Calculate summary statistics
    pub fn summary(&self) -> ResultSummary {
        let mut summary = ResultSummary::default();

        for result in &self.results {
            summary.total += 1;
            if result.passed {
                summary.passed += 1;
            } else {
                summary.failed += 1;
            }
        }

        summary
    }

    /// Process exit code for this report: 0 when everything passed
    pub fn exit_code(&self) -> u8 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}
