//! check-requirements CLI entry point
//!
//! Validates the API export scripts against the project conventions.

use check_requirements::checks::{FileCheck, README_LABEL};
use check_requirements::cli::args::{Args, CheckArgs, Command, OutputFormat, ProjectArgs};
use check_requirements::cli::output::{get_formatter, TextReporter};
use check_requirements::engine::validator::NullSink;
use check_requirements::version::get_build_info;
use check_requirements::{validate_with_sink, ValidatorConfig};

use clap::Parser;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match Args::parse().into_command() {
        Command::Version => {
            println!("check-requirements {}", get_build_info());
            ExitCode::SUCCESS
        }
        Command::List(args) => {
            print_check_list(&args);
            ExitCode::SUCCESS
        }
        Command::Check(args) => run_checks(&args),
    }
}

fn print_check_list(args: &ProjectArgs) {
    let config = ValidatorConfig::from_args(args);

    println!("Project checks:");
    println!("  {:<22} {} is present", README_LABEL, config.readme_file);
    println!();
    println!("Per-file checks (in order):");
    for check in FileCheck::ALL {
        println!("  {:<22} {}", check.label(), check.description());
    }
    println!();
    println!("Target files:");
    for file in &config.target_files {
        println!("  {}", file);
    }
}

fn run_checks(args: &CheckArgs) -> ExitCode {
    let config = ValidatorConfig::from_args(&args.project);

    let result = match args.format {
        OutputFormat::Text => {
            let mut reporter = TextReporter::new(io::stdout().lock(), args.quiet);
            validate_with_sink(config, &mut reporter)
        }
        OutputFormat::Json | OutputFormat::Junit => validate_with_sink(config, &mut NullSink),
    };

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(3);
        }
    };

    if let Some(formatter) = get_formatter(args.format) {
        println!("{}", formatter.format(&report));
    }

    ExitCode::from(report.exit_code())
}
