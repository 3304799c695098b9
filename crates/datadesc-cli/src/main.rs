//! datadesc CLI - write a names file describing a tabular dataset.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = logging::init_logging(cli.verbose, cli.quiet)
        .and_then(|()| commands::describe::run(cli.input, cli.output_dir, cli.verbose > 0));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
