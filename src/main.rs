//! CLI entry point for `check-fixes`.
//!
//! Thin shell over the library: parse the argument, check the export,
//! print the verdict line, exit with the matching status.

use check_fixes::prelude::*;
use check_fixes::Cli;
use clap::Parser;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let cli = Cli::parse();
    match check_fixes::check(&cli.fixes_path) {
        Ok(verdict) => {
            println!("{}", verdict.message());
            exit(verdict.exit_code());
        }
        Err(err) => {
            // Unreadable or malformed input exits 2 so CI can tell it
            // apart from a failing check.
            eprintln!("error: {:#}", err);
            exit(2);
        }
    }
}
