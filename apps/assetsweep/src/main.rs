use anyhow::Result;
use assetsweep_unused::{Config, LogEventSink};
use clap::Parser;
use colored::Colorize;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cfg = Config::parse();
    debug!("Parsed CLI arguments: {:?}", cfg);

    let start = Instant::now();
    let num_threads = rayon::current_num_threads();
    info!(
        "Running unused asset sweep (remove: {}, using {} threads)",
        cfg.remove_assets, num_threads
    );

    let result = assetsweep_unused::run_unused_assets_check(&cfg, &LogEventSink)?;
    debug!("Found {} unused assets", result.unused.len());

    let elapsed_ms = start.elapsed().as_millis();

    if cfg.json {
        assetsweep_unused::print_json_report(&mut stdout, &result)?;
    } else {
        assetsweep_unused::print_unused_report(&mut stdout, &result)?;
        writeln!(
            stdout,
            "\n{} Finished in {}ms on {} source files and {} assets (using {} threads).",
            "●".bright_blue(),
            elapsed_ms.to_string().cyan(),
            result.sources_scanned.to_string().cyan(),
            result.assets_scanned.to_string().cyan(),
            num_threads.to_string().cyan()
        )?;
    }
    stdout.flush()?;

    if result.has_failures() {
        // A deletion failed; the rest of the batch still ran
        std::process::exit(1);
    }

    Ok(())
}
