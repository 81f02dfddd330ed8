use crate::wizard::ScoreEntry;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gpa-wizard",
    version,
    about = "Subject selection and weighted GPA calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Subject catalog CSV (overrides catalog.path from gpa.toml)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Directory holding gpa.toml (defaults to the current directory)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the compulsory subjects and electives offered at a level
    Options(OptionsCommand),
    /// List the subjects to enter scores for
    Sheet(SheetCommand),
    /// Compute the GPA from entered scores
    Calc(CalcCommand),
    /// Show the grade for a single score
    Grade(GradeCommand),
}

#[derive(Args)]
pub struct OptionsCommand {
    #[arg(value_parser = clap::value_parser!(u8).range(1..=4))]
    pub level: u8,
}

#[derive(Args)]
pub struct SheetCommand {
    #[arg(value_parser = clap::value_parser!(u8).range(1..=4))]
    pub level: u8,
    /// Elective subject code; repeat for each elective
    #[arg(short, long = "elective")]
    pub electives: Vec<String>,
}

#[derive(Args)]
pub struct CalcCommand {
    #[arg(value_parser = clap::value_parser!(u8).range(1..=4))]
    pub level: u8,
    /// Subject score as CODE=SCORE; repeat for each subject
    #[arg(short, long = "score", required = true)]
    pub scores: Vec<ScoreEntry>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct GradeCommand {
    #[arg(allow_negative_numbers = true)]
    pub score: i32,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
