pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "gwa-calc")]
#[command(about = "Grade-weighted average calculator")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compute the weighted average of the given rows and exit
    Calc(CalcArgs),
    /// Edit rows interactively, one command per line on stdin
    Shell(ShellArgs),
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Args)]
pub struct CalcArgs {
    /// A row as GRADE:UNITS or GRADE:UNITS:CODE; repeatable
    #[arg(short, long = "row")]
    pub rows: Vec<String>,

    /// CSV file with a sub_code,grade,units header
    #[arg(short, long)]
    pub input: Option<String>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Accept grades and units outside the form's ranges
    #[arg(long)]
    pub no_validate: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Args)]
pub struct ShellArgs {
    /// CSV file to preload the rows from
    #[arg(short, long)]
    pub input: Option<String>,

    /// Accept grades and units outside the form's ranges
    #[arg(long)]
    pub no_validate: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}
