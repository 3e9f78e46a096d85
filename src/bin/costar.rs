// src/bin/costar.rs
use clap::Parser;
use colored::Colorize;
use env_logger::Env;

use costar_core::cli::{handlers, Cli};
use costar_core::exit::CostarExit;

fn main() -> CostarExit {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match handlers::execute(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            CostarExit::Error
        }
    }
}
