//! Requirements validator.
//!
//! Runs the README existence check, then the fixed battery of
//! [`FileCheck`]s against every configured target file, in order.
//!
//! # Failure handling
//!
//! - Failed check: recorded as `passed = false`, the run continues
//! - Git query failure: the executable check fails, the run continues
//! - Missing file, non-UTF-8 content, unparseable leading docstring:
//!   the run stops with a [`CheckError`]
//!
//! Results are handed to a [`ReportSink`] one file at a time, so lines
//! produced before a fatal error have already been delivered.

use crate::checks::docstring::check_module_docstring;
use crate::checks::{content, imports, FileCheck, README_LABEL};
use crate::engine::result::{CheckResult, FileReport, ValidationReport};
use crate::platform::git;
use crate::{CheckError, ValidatorConfig};
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Receives results as the validator produces them
pub trait ReportSink {
    /// Called once per check result, in report order
    fn emit(&mut self, result: &CheckResult);

    /// Called once after the last result of a completed run
    fn finish(&mut self, _report: &ValidationReport) {}
}

/// Sink that discards everything
pub struct NullSink;

impl ReportSink for NullSink {
    fn emit(&mut self, _result: &CheckResult) {}
}

impl ReportSink for Vec<CheckResult> {
    fn emit(&mut self, result: &CheckResult) {
        self.push(result.clone());
    }
}

/// Validator over a fixed configuration
pub struct RequirementsValidator {
    config: ValidatorConfig,
}

impl RequirementsValidator {
    /// Create a new validator with the given configuration
    pub fn new(config: ValidatorConfig) -> Self {
        RequirementsValidator { config }
    }

    /// Run every check, streaming results into `sink`
    pub fn run(&self, sink: &mut dyn ReportSink) -> Result<ValidationReport, CheckError> {
        info!(
            "validating {} file(s) in {}",
            self.config.target_files.len(),
            self.config.project_dir.display()
        );

        let mut report = ValidationReport::new();

        let readme = self.check_readme();
        sink.emit(&readme);
        report.add_result(readme);

        for file_name in &self.config.target_files {
            let file = self.validate_file(file_name)?;
            for result in &file.results {
                sink.emit(result);
            }
            debug!("{}: passed={}", file.file_name, file.passed());
            report.add_file(file);
        }

        sink.finish(&report);
        Ok(report)
    }

    /// README existence check
    pub fn check_readme(&self) -> CheckResult {
        let path = self.config.project_dir.join(&self.config.readme_file);
        CheckResult::new(self.config.readme_file.clone(), README_LABEL, path.is_file())
    }

    /// Run the whole battery against one file
    pub fn validate_file(&self, file_name: &str) -> Result<FileReport, CheckError> {
        let path = self.config.project_dir.join(file_name);
        let text = read_text(&path)?;

        let mut file = FileReport::new(file_name);
        for check in FileCheck::ALL {
            let passed = self.evaluate(check, &path, file_name, &text)?;
            file.record(check.label(), passed);
        }
        Ok(file)
    }

    fn evaluate(
        &self,
        check: FileCheck,
        path: &Path,
        file_name: &str,
        text: &str,
    ) -> Result<bool, CheckError> {
        let config = &self.config;
        let passed = match check {
            FileCheck::Shebang => content::check_shebang(text, &config.expected_shebang),
            FileCheck::TrailingNewline => content::check_trailing_newline(text),
            FileCheck::ModuleDocstring => {
                check_module_docstring(text).map_err(|e| CheckError::Parse {
                    path: path.to_path_buf(),
                    line: e.line,
                    message: e.message,
                })?
            }
            FileCheck::MainGuard => content::check_main_guard(text, &config.main_guard),
            FileCheck::DictGetUsage => content::check_get_usage(text, &config.get_pattern),
            FileCheck::ImportOrder => imports::check_import_order(text),
            FileCheck::ExecutableMode => {
                git::check_executable(&config.project_dir, file_name, &config.executable_mode)
            }
        };
        Ok(passed)
    }
}

/// Read a whole file as UTF-8 with `\r\n` and `\r` line ends turned
/// into `\n`
pub fn read_text(path: &Path) -> Result<String, CheckError> {
    let bytes = fs::read(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| CheckError::Decode {
        path: path.to_path_buf(),
    })?;
    Ok(normalize_newlines(&text))
}

/// Universal newlines: every `\r\n` and lone `\r` becomes `\n`
pub fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
