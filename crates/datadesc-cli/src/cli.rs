//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// datadesc: generate a dataset description (.names) file
#[derive(Parser)]
#[command(name = "datadesc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the data file (CSV/TSV)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory the <name>.names file is written into
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
