//! Shared output formatting for tally CLI commands.

use std::io::Write;

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::id::TASK_ID_LEN;
use crate::task::Task;

/// Width of the short ID column (seven hex chars plus the `..` marker)
const SHORT_ID_WIDTH: usize = 9;

/// Render epoch seconds as a local human-readable timestamp
pub fn format_opened(ts: i64) -> String {
    match DateTime::from_timestamp(ts, 0) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        None => ts.to_string(),
    }
}

/// Write the column-aligned task table.
///
/// Closed tasks are skipped unless `show_all` is set; `long_id` switches
/// the ID column between the truncated and the full form.
pub fn write_table(
    out: &mut impl Write,
    tasks: &[Task],
    long_id: bool,
    show_all: bool,
) -> Result<()> {
    let id_width = if long_id { TASK_ID_LEN } else { SHORT_ID_WIDTH };

    writeln!(
        out,
        "{:<id_width$}  {:<16}  {:<6}  {}",
        "ID", "OPENED", "STATUS", "TASK"
    )?;

    for task in tasks {
        if !show_all && !task.is_open() {
            continue;
        }
        let id = if long_id {
            task.task_id.clone()
        } else {
            task.short_id()
        };
        writeln!(
            out,
            "{:<id_width$}  {:<16}  {:<6}  {}",
            id,
            format_opened(task.opened_at),
            task.status_label(),
            task.description
        )?;
    }
    Ok(())
}
