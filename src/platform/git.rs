//! Git index queries.
//!
//! The executable bit is read from the git index rather than the file
//! system so the result matches what a clone would get.
//!
//! # Graceful Degradation
//!
//! Every failure of the query maps to [`GitMode::Unknown`]:
//! - git not installed or not runnable
//! - not inside a repository, or the file is untracked
//! - non-zero exit status or non-UTF-8 output
//!
//! No function in this module returns an error or panics.

use log::debug;
use std::path::Path;
use std::process::Command;

/// Mode recorded for a file in the git index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitMode {
    /// Mode field of `git ls-files --stage`, e.g. `100644`
    Known(String),
    /// Query failed or the file is not tracked
    Unknown,
}

impl GitMode {
    /// Parse the output of `git ls-files --stage -- <file>`.
    ///
    /// The first whitespace separated field of the first entry is the mode.
    pub fn from_ls_files_output(output: &str) -> GitMode {
        match output.split_whitespace().next() {
            Some(mode) => GitMode::Known(mode.to_string()),
            None => GitMode::Unknown,
        }
    }

    /// Whether the recorded mode equals `mode`
    pub fn is(&self, mode: &str) -> bool {
        matches!(self, GitMode::Known(known) if known == mode)
    }
}

/// Query the index mode of `file_name`, run from `dir`.
pub fn query_mode(dir: &Path, file_name: &str) -> GitMode {
    let output = match Command::new("git")
        .args(["ls-files", "--stage", "--", file_name])
        .current_dir(dir)
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            debug!("git ls-files for {} could not run: {}", file_name, e);
            return GitMode::Unknown;
        }
    };

    if !output.status.success() {
        debug!(
            "git ls-files for {} exited with {}: {}",
            file_name,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return GitMode::Unknown;
    }

    let mode = match String::from_utf8(output.stdout) {
        Ok(stdout) => GitMode::from_ls_files_output(&stdout),
        Err(_) => GitMode::Unknown,
    };
    debug!("git index mode for {}: {:?}", file_name, mode);
    mode
}

/// The file is recorded with `executable_mode` in the git index.
/// Unknown mode fails the check.
pub fn check_executable(dir: &Path, file_name: &str, executable_mode: &str) -> bool {
    query_mode(dir, file_name).is(executable_mode)
}
