//! Scratch project directories for integration tests.
//!
//! A [`Project`] is a temporary directory holding scripts and, when git is
//! installed, a repository whose index records the scripts' modes.

use check_requirements::{ValidatorConfig, DEFAULT_TARGET_FILES};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// A script that passes every content check
pub const CONFORMANT_SCRIPT: &str = r#"#!/usr/bin/python3
"""Export a specific employee's TODO list to CSV format."""

import csv
import json
import sys
import urllib.request


BASE_URL = "https://jsonplaceholder.typicode.com"


def main():
    """Program entry point."""
    user = {"username": "Bret"}
    print(user.get("username"))


if __name__ == "__main__":
    main()
"#;

/// Conformant apart from `import sys` coming before `import os`
pub const UNSORTED_SCRIPT: &str = r#"#!/usr/bin/python3
"""Gather data from an API."""

import sys
import os


def main():
    """Program entry point."""
    print({}.get("name"))


if __name__ == "__main__":
    main()
"#;

pub struct Project {
    pub dir: TempDir,
    pub git: bool,
}

impl Project {
    /// Empty project, with a git repository if git is available
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let git = git(dir.path(), &["init", "--quiet"]);
        Project { dir, git }
    }

    /// Whether git-dependent assertions can run; prints a skip notice
    /// naming `test` when they cannot
    pub fn has_git(&self, test: &str) -> bool {
        if !self.git {
            eprintln!("{}: git not available, skipping index mode assertions", test);
        }
        self.git
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> ValidatorConfig {
        ValidatorConfig::for_dir(self.path())
    }

    pub fn write(&self, name: &str, text: &str) {
        fs::write(self.path().join(name), text).expect("write fixture");
    }

    pub fn remove(&self, name: &str) {
        fs::remove_file(self.path().join(name)).expect("remove fixture");
    }

    /// Track `name` in the index with the executable bit set
    pub fn track_executable(&self, name: &str) {
        if self.git {
            git(self.path(), &["add", "--", name]);
            git(self.path(), &["update-index", "--chmod=+x", "--", name]);
        }
    }

    /// README plus the four default scripts, all conformant and tracked
    pub fn conformant() -> Self {
        let project = Project::new();
        project.write("README.md", "# API\n");
        for name in DEFAULT_TARGET_FILES {
            project.write(name, CONFORMANT_SCRIPT);
            project.track_executable(name);
        }
        project
    }
}

fn git(dir: &Path, args: &[&str]) -> bool {
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
