// src/presentation.rs
use std::io::{self, Write};

use slide_access_usecase::{AccessOutcome, AccessReport};

use crate::error::Result;
use crate::options::OutputFormat;

pub fn print_report(report: &AccessReport, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report, format)?;
    out.flush()?;
    Ok(())
}

pub fn write_report<W: Write>(out: &mut W, report: &AccessReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(out, report)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Jsonl => {
            for outcome in &report.outcomes {
                serde_json::to_writer(&mut *out, outcome)?;
                writeln!(out)?;
            }
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, report)?,
    }
    Ok(())
}

const HEADERS: [&str; 5] = ["SLIDE", "CATEGORY", "VISITOR", "RESULT", "REASON"];

fn table_row(outcome: &AccessOutcome) -> [String; 5] {
    [
        outcome.slide.clone(),
        outcome.category.to_string(),
        outcome.visitor.clone(),
        if outcome.granted { "granted" } else { "denied" }.to_string(),
        outcome.reason.clone().unwrap_or_default(),
    ]
}

fn write_table<W: Write>(out: &mut W, report: &AccessReport) -> io::Result<()> {
    let rows: Vec<[String; 5]> = report.outcomes.iter().map(table_row).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &HEADERS, &widths)?;
    let rule = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    writeln!(out, "{}", "-".repeat(rule))?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }

    writeln!(out)?;
    writeln!(out, "granted: {} · denied: {}", report.granted(), report.denied())
}

fn write_row<W: Write, S: AsRef<str>>(out: &mut W, cells: &[S], widths: &[usize]) -> io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())
}
