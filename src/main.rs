//! targetmap CLI entry point.
//!
//! Parses command-line arguments and executes the selected subcommand:
//! - `extract` - build a component map from a target-definition file
//! - `list` - display a component map
//! - `register` - replay a component map as registration calls
//! - `validate` - check a component map before it ships

use clap::Parser;
use colored::Colorize;
use targetmap::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    if let Err(e) = cli.execute() {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
