//! check-requirements library
//!
//! Style conformance validator for the API export scripts.
//!
//! The validator statically inspects a fixed list of Python scripts and
//! reports, per script:
//! - Shebang, trailing newline and module docstring
//! - `__main__` guard and `dict.get` usage
//! - Alphabetical ordering of the top-level import block
//! - Executable mode recorded in the git index
//!
//! It also checks that the project ships a `README.md`.
//!
//! # Example
//!
//! ```no_run
//! use check_requirements::{validate, ValidatorConfig};
//!
//! let config = ValidatorConfig::default();
//! let report = validate(config).expect("Validation aborted");
//! println!("Checks passed: {}", report.summary().passed);
//! ```

pub mod checks;
pub mod cli;
pub mod engine;
pub mod platform;
pub mod version;

use cli::args::ProjectArgs;
use engine::result::ValidationReport;
use engine::validator::{NullSink, ReportSink, RequirementsValidator};
use std::path::PathBuf;
use thiserror::Error;

// Re-exports for public API
pub use checks::FileCheck;
pub use engine::result::{CheckResult, FileReport, ResultSummary};

/// Scripts checked when no target list is given.
pub const DEFAULT_TARGET_FILES: [&str; 4] = [
    "0-gather_data_from_an_API.py",
    "1-export_to_CSV.py",
    "2-export_to_JSON.py",
    "3-dictionary_of_list_of_dictionaries.py",
];

pub const DEFAULT_SHEBANG: &str = "#!/usr/bin/python3";
pub const DEFAULT_README: &str = "README.md";
pub const DEFAULT_MAIN_GUARD: &str = "if __name__ == \"__main__\":";
pub const DEFAULT_GET_PATTERN: &str = ".get(";
pub const EXECUTABLE_MODE: &str = "100755";

/// Fatal errors that abort a validation run.
///
/// Only these stop the run. A failed check is never an error.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Target file missing or unreadable
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Target file is not valid UTF-8
    #[error("{} is not valid UTF-8", path.display())]
    Decode { path: PathBuf },
    /// Leading docstring could not be parsed
    #[error("syntax error in {} at line {line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

/// Immutable configuration for a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Directory holding the scripts and the README
    pub project_dir: PathBuf,
    /// Scripts to check, in report order
    pub target_files: Vec<String>,
    /// Documentation file that must exist
    pub readme_file: String,
    /// Exact first line every script must carry
    pub expected_shebang: String,
    /// Entry point guard every script must contain
    pub main_guard: String,
    /// Safe-lookup call every script must use at least once
    pub get_pattern: String,
    /// Git index mode of an executable file
    pub executable_mode: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        ValidatorConfig {
            project_dir: PathBuf::from("."),
            target_files: DEFAULT_TARGET_FILES.iter().map(|f| f.to_string()).collect(),
            readme_file: DEFAULT_README.to_string(),
            expected_shebang: DEFAULT_SHEBANG.to_string(),
            main_guard: DEFAULT_MAIN_GUARD.to_string(),
            get_pattern: DEFAULT_GET_PATTERN.to_string(),
            executable_mode: EXECUTABLE_MODE.to_string(),
        }
    }
}

impl ValidatorConfig {
    /// Create a default configuration rooted at `project_dir`
    pub fn for_dir(project_dir: impl Into<PathBuf>) -> Self {
        ValidatorConfig {
            project_dir: project_dir.into(),
            ..Default::default()
        }
    }

    /// Create configuration from command line arguments
    pub fn from_args(args: &ProjectArgs) -> Self {
        let mut config = ValidatorConfig::for_dir(&args.dir);
        if !args.targets.is_empty() {
            config.target_files = args.targets.clone();
        }
        config
    }
}

/// Run every check and return the collected report.
///
/// Nothing is printed. Use [`validate_with_sink`] to observe results as
/// they are produced.
pub fn validate(config: ValidatorConfig) -> Result<ValidationReport, CheckError> {
    validate_with_sink(config, &mut NullSink)
}

/// Run every check, handing each file's results to `sink` as soon as the
/// file is done.
///
/// # Errors
///
/// Returns a [`CheckError`] when a target file is missing, not UTF-8, or
/// has an unparseable leading docstring. Results already handed to the
/// sink stay delivered.
pub fn validate_with_sink(
    config: ValidatorConfig,
    sink: &mut dyn ReportSink,
) -> Result<ValidationReport, CheckError> {
    RequirementsValidator::new(config).run(sink)
}
