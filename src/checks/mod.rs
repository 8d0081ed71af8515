//! Per-file conformance checks.
//!
//! Every check is a pure predicate over a script's content, except the
//! executable-mode check which asks git (see [`crate::platform::git`]).
//! The battery always runs in [`FileCheck::ALL`] order so reports are
//! reproducible for unchanged files.

pub mod content;
pub mod docstring;
pub mod imports;

use std::fmt;

/// One named check in the per-file battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCheck {
    Shebang,
    TrailingNewline,
    ModuleDocstring,
    MainGuard,
    DictGetUsage,
    ImportOrder,
    ExecutableMode,
}

impl FileCheck {
    /// The battery, in execution order
    pub const ALL: [FileCheck; 7] = [
        FileCheck::Shebang,
        FileCheck::TrailingNewline,
        FileCheck::ModuleDocstring,
        FileCheck::MainGuard,
        FileCheck::DictGetUsage,
        FileCheck::ImportOrder,
        FileCheck::ExecutableMode,
    ];

    /// Label used in report lines
    pub fn label(self) -> &'static str {
        match self {
            FileCheck::Shebang => "shebang",
            FileCheck::TrailingNewline => "trailing newline",
            FileCheck::ModuleDocstring => "module docstring",
            FileCheck::MainGuard => "__main__ guard",
            FileCheck::DictGetUsage => "dict get usage",
            FileCheck::ImportOrder => "alphabetical imports",
            FileCheck::ExecutableMode => "git executable mode",
        }
    }

    /// What the check requires, for `list`
    pub fn description(self) -> &'static str {
        match self {
            FileCheck::Shebang => "first line is the expected interpreter line",
            FileCheck::TrailingNewline => "file ends with a newline",
            FileCheck::ModuleDocstring => "file opens with a non-empty docstring",
            FileCheck::MainGuard => "file contains the __main__ entry point guard",
            FileCheck::DictGetUsage => "file uses dict.get() at least once",
            FileCheck::ImportOrder => "top-level imports are sorted case-insensitively",
            FileCheck::ExecutableMode => "git index records the file as 100755",
        }
    }
}

impl fmt::Display for FileCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label of the README existence check
pub const README_LABEL: &str = "exists";
