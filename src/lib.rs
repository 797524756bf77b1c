// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;

use anyhow::Context;
use slide_access_infra::{ConsoleDiagnostics, SilentDiagnostics, TracingDiagnostics};
use slide_access_ports::diagnostics::DiagnosticSink;
use slide_access_usecase::{AccessReport, SlideAccessChecker};

use crate::config::Config;
use crate::options::DiagnosticsMode;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Checks every configured visitor against every slide and prints the report.
///
/// # Errors
///
/// Fails if diagnostics or the report cannot be written. Denied visitors are
/// not errors; they are part of the returned report.
pub fn run(config: &Config) -> anyhow::Result<AccessReport> {
    tracing::debug!(
        slides = config.slides.len(),
        visitors = config.visitors.len(),
        format = ?config.format,
        diagnostics = ?config.diagnostics,
        "starting access run"
    );

    let sink = diagnostic_sink(config);
    let report = SlideAccessChecker::new(sink.as_ref())
        .run(&config.input())
        .context("checking slide access")?;

    presentation::print_report(&report, config.format).context("printing report")?;
    Ok(report)
}

fn diagnostic_sink(config: &Config) -> Box<dyn DiagnosticSink> {
    match config.diagnostics {
        DiagnosticsMode::Console if config.format.is_machine_readable() => {
            Box::new(ConsoleDiagnostics::stderr())
        }
        DiagnosticsMode::Console => Box::new(ConsoleDiagnostics::stdout()),
        DiagnosticsMode::Log => Box::new(TracingDiagnostics),
        DiagnosticsMode::Off => Box::new(SilentDiagnostics),
    }
}
