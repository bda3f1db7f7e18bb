//! tally - personal task ledger CLI
//!
//! A small command-line tool that appends, lists, closes, removes, and
//! reports on work items kept as line-delimited JSON in a per-user file.

use clap::Parser;
use tally::cli::Cli;
use tally::error::exit_codes;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version displays exit clean; real parse errors
            // (unknown subcommand, bad flags) share the failure code.
            let _ = err.print();
            let code = if err.use_stderr() {
                exit_codes::FAILURE
            } else {
                exit_codes::SUCCESS
            };
            std::process::exit(code);
        }
    };

    if let Err(err) = cli.run() {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}

/// Tracing is opt-in via RUST_LOG; empty, oversized, or invalid filter
/// strings fall back to off so startup never fails on a bad environment.
fn init_tracing() {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.len() > 1024 {
                return None;
            }
            EnvFilter::try_new(trimmed).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
