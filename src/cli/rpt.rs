//! tally rpt command implementation

use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::store::Store;
use crate::task;

const SECS_PER_DAY: i64 = 86_400;

pub struct RptOptions {
    pub config: Config,
    /// Days to look back; falls back to the configured default
    pub days: Option<i64>,
}

/// Print a dash-prefixed line for every task closed within the window.
///
/// Open tasks carry `closed_at == 0` and fall below any reasonable cutoff,
/// so no explicit open/closed check is needed.
pub fn run(opts: RptOptions, out: &mut impl Write) -> Result<()> {
    let days = opts.days.unwrap_or(opts.config.report_days);
    let cutoff = task::unix_now() - days * SECS_PER_DAY;

    let tasks = Store::new(&opts.config).load()?;
    for task in &tasks {
        if task.closed_at > cutoff {
            writeln!(out, "- {}", task.description)?;
        }
    }
    Ok(())
}
