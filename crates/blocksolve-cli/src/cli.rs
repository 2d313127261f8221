use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu",
    version,
    about = "BlockSolve CLI - Discover groups of proteins and the chemical sets they jointly bind.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output and all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover blocks in a protein→chemical relation and print them by ascending weight.
    Solve(SolveArgs),
}

/// Arguments for the `solve` subcommand.
#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    // --- Core Arguments ---
    /// Path to the input relation file, one `proteinId,chemId,...` line per protein.
    #[arg(value_name = "PATH", default_value = "input.txt")]
    pub input: PathBuf,

    /// Write blocks to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Engine Overrides ---
    /// Minimum number of shared chemicals for a protein pair to form a block.
    #[arg(short, long, value_name = "INT")]
    pub min_overlap: Option<usize>,

    /// Skip the subset absorption pass, overriding the config file.
    #[arg(long)]
    pub no_absorption: bool,

    // --- Input/Output Overrides ---
    /// Skip malformed input lines with a warning instead of aborting.
    #[arg(long)]
    pub skip_malformed: bool,

    /// Print a `# weight N` header before each group of equally weighted blocks.
    #[arg(long)]
    pub weight_headers: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S discovery.min-overlap=3
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", action = ArgAction::Append)]
    pub set_values: Vec<String>,
}
