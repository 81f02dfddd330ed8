mod catalog;
mod cli;
mod config;
mod error;
mod gpa;
mod grade;
mod report;
mod types;
mod wizard;

use crate::catalog::SubjectCatalog;
use crate::error::GpaError;
use crate::types::config::GpaConfig;
use crate::types::subject::{Level, Subject};
use crate::wizard::ElectiveStep;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_catalog(
    cli_path: Option<PathBuf>,
    config: &GpaConfig,
) -> Result<SubjectCatalog, GpaError> {
    match cli_path.or_else(|| config.catalog_path().cloned()) {
        Some(path) => SubjectCatalog::load(&path),
        None => SubjectCatalog::builtin(),
    }
}

fn print_subjects(heading: &str, subjects: &[&Subject]) {
    println!("{heading}:");
    if subjects.is_empty() {
        println!("- none");
    }
    for subject in subjects {
        println!("- {} ({}, {})", subject.name, subject.code, subject.category);
    }
}

fn run() -> Result<i32, GpaError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let config = config::load_config(&config_dir)?.unwrap_or_default();

    match cli.command {
        cli::Commands::Options(cmd) => {
            let catalog = load_catalog(cli.catalog, &config)?;
            let level = Level::try_from(cmd.level)?;
            match wizard::elective_options(&catalog, level) {
                ElectiveStep::NotRequired => {
                    println!("level {level}: no electives to choose, every subject is taken");
                    let sheet = wizard::score_sheet(&catalog, level, &[])?;
                    print_subjects("subjects", &sheet);
                }
                ElectiveStep::Choose(options) => {
                    print_subjects("compulsory", &options.compulsory);
                    print_subjects("science electives", &options.science);
                    print_subjects("humanities electives", &options.humanities);
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Sheet(cmd) => {
            let catalog = load_catalog(cli.catalog, &config)?;
            let level = Level::try_from(cmd.level)?;
            let sheet = wizard::score_sheet(&catalog, level, &cmd.electives)?;
            print_subjects(&format!("level {level} score sheet"), &sheet);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Calc(cmd) => {
            let catalog = load_catalog(cli.catalog, &config)?;
            let level = Level::try_from(cmd.level)?;
            let policy = config.policy();
            let result = wizard::compute_result(&catalog, &policy, level, &cmd.scores)?;

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&result, output_format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Grade(cmd) => {
            let grade = grade::convert_for("grade", cmd.score)?;
            println!("{} -> {} ({:.1})", cmd.score, grade.letter, grade.grade_point);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_invalid_input() {
                exit_code::INVALID_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
