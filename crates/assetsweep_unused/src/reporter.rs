use std::io::{self, Write};

use colored::Colorize;
use log::debug;
use serde::Serialize;

use crate::types::{RemovalOutcome, SweepResult};

pub fn print_no_unused_message<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{} No unused assets found.", "✓".green().bold())?;
    writer.flush()?;
    Ok(())
}

/// Human-readable report: the unused list, what removal did, what was skipped
pub fn print_unused_report<W: Write>(writer: &mut W, result: &SweepResult) -> io::Result<()> {
    debug!("Printing report for {} unused assets", result.unused.len());

    if result.unused.is_empty() {
        print_no_unused_message(writer)?;
    } else {
        writeln!(writer, "{} Unused assets:", "⚠".yellow().bold())?;
        for asset in &result.unused {
            writeln!(writer, "{}", asset.key)?;
        }
    }

    if let Some(removal) = &result.removal
        && !removal.outcomes.is_empty()
    {
        writeln!(writer)?;
        for outcome in &removal.outcomes {
            match outcome {
                RemovalOutcome::Removed(asset) => {
                    writeln!(writer, "{} {}", "Removed:".red(), asset.key)?
                }
                RemovalOutcome::Kept(asset) => {
                    writeln!(writer, "{} {} (exclusion-listed)", "Kept:".dimmed(), asset.key)?
                }
                RemovalOutcome::Failed(error) => {
                    writeln!(writer, "{} {}", "✗".red().bold(), error)?
                }
            }
        }
    }

    if !result.skipped_sources.is_empty() || !result.skipped_paths.is_empty() {
        writeln!(writer)?;
        writeln!(
            writer,
            "{} Skipped {} source files and {} paths:",
            "!".yellow().bold(),
            result.skipped_sources.len(),
            result.skipped_paths.len()
        )?;
        for error in &result.skipped_sources {
            writeln!(writer, "  {}", error)?;
        }
        for reason in &result.skipped_paths {
            writeln!(writer, "  {}", reason)?;
        }
    }

    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    root: String,
    unused: Vec<&'a str>,
    removed: Vec<&'a str>,
    kept: Vec<&'a str>,
    failed: Vec<JsonFailure>,
    skipped_sources: Vec<JsonFailure>,
    skipped_paths: &'a [String],
    sources_scanned: usize,
    assets_scanned: usize,
    references_found: usize,
}

#[derive(Serialize)]
struct JsonFailure {
    path: String,
    error: String,
}

impl<'a> From<&'a SweepResult> for JsonReport<'a> {
    fn from(result: &'a SweepResult) -> Self {
        let failure = |e: &assetsweep_core::SweepError| JsonFailure {
            path: e.path().display().to_string(),
            error: e.to_string(),
        };
        let removal = result.removal.as_ref();

        JsonReport {
            root: result.root.display().to_string(),
            unused: result.unused.iter().map(|a| a.key.as_str()).collect(),
            removed: removal
                .map(|r| r.removed().map(|a| a.key.as_str()).collect())
                .unwrap_or_default(),
            kept: removal.map(|r| r.kept().map(|a| a.key.as_str()).collect()).unwrap_or_default(),
            failed: removal.map(|r| r.failed().map(failure).collect()).unwrap_or_default(),
            skipped_sources: result.skipped_sources.iter().map(failure).collect(),
            skipped_paths: &result.skipped_paths,
            sources_scanned: result.sources_scanned,
            assets_scanned: result.assets_scanned,
            references_found: result.references_found,
        }
    }
}

/// Machine-readable report as one pretty-printed JSON object
pub fn print_json_report<W: Write>(writer: &mut W, result: &SweepResult) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &JsonReport::from(result))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
