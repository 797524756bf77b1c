// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use slide_access::args::Args;
use slide_access::config::Config;
use slide_access::logging;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);
    if !logging::init(config.verbosity) {
        eprintln!("Warning: a log subscriber was already installed");
    }

    match slide_access::run(&config) {
        Ok(report) if config.fail_on_deny && !report.all_granted() => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
