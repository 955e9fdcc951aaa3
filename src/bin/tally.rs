// src/bin/tally.rs
use clap::Parser;
use colored::Colorize;

use tally_core::cli::{handlers, Cli};
use tally_core::config::Config;
use tally_core::exit::TallyExit;
use tally_core::logging;

fn main() -> TallyExit {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let config = Config::load();
    if !config.report.color {
        colored::control::set_override(false);
    }

    match handlers::dispatch(&cli, config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            TallyExit::for_error(&e)
        }
    }
}
