//! Command line arguments for check-requirements.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command to execute
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run validation checks (default)
    Check(CheckArgs),
    /// List the checks and target files
    List(ProjectArgs),
    /// Print version and build information
    Version,
}

/// Output format selection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `[OK|FAIL] <file> - <check>` lines
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
    /// JUnit XML for CI integration
    Junit,
}

/// Which project and which scripts
#[derive(ClapArgs, Debug, Clone, PartialEq)]
pub struct ProjectArgs {
    /// Directory holding the scripts and README.md
    #[arg(long, env = "CHECK_REQUIREMENTS_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Script to check (repeatable, replaces the built-in list)
    #[arg(long = "target", value_name = "FILE")]
    pub targets: Vec<String>,
}

impl Default for ProjectArgs {
    fn default() -> Self {
        ProjectArgs {
            dir: PathBuf::from("."),
            targets: Vec::new(),
        }
    }
}

/// Options of `check`
#[derive(ClapArgs, Debug, Clone, Default, PartialEq)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output format
    #[arg(long, value_enum, env = "CHECK_REQUIREMENTS_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only print failing checks (text format)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parsed command line arguments
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "check-requirements",
    about = "Check the API export scripts against the project conventions",
    args_conflicts_with_subcommands = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print version and build information
    #[arg(short = 'V', long = "version")]
    pub version: bool,

    #[command(flatten)]
    pub check: CheckArgs,
}

impl Args {
    /// The command to run; bare invocation means `check`
    pub fn into_command(self) -> Command {
        if self.version {
            return Command::Version;
        }
        self.command.unwrap_or(Command::Check(self.check))
    }
}
