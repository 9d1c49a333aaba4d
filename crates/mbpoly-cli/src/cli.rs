use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "mbpoly CLI - Evaluate the two-body polynomial energy of water dimer configurations.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate the polynomial energy for every configuration in a CSV file.
    Eval(EvalArgs),
}

/// Arguments for the `eval` subcommand.
#[derive(Args, Debug, Clone)]
pub struct EvalArgs {
    // --- Core Arguments ---
    /// Path to the coefficient file in TOML format (24 coefficients).
    /// Overrides `coefficients` from the config file.
    #[arg(short, long, value_name = "PATH")]
    pub coefficients: Option<PathBuf>,

    /// Path to the CSV file of configurations, one row of 15 coordinates per line.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output CSV file. Energies are printed to stdout if omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Output Overrides ---
    /// Number of decimal places written for each energy.
    #[arg(short, long, value_name = "INT")]
    pub precision: Option<usize>,

    /// Field delimiter of the output CSV (a single ASCII character).
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Omit the `index,energy` header line from the output.
    #[arg(long)]
    pub no_header: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S output.precision=8
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
