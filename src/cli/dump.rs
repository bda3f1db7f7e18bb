//! tally dump command implementation

use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::store::Store;

pub struct DumpOptions {
    pub config: Config,
    pub format: String,
}

/// Echo the raw store file line by line, no parsing.
///
/// The store is opened regardless of format, so a missing file fails even
/// when nothing would be printed. Formats other than "text" are accepted
/// and currently produce no output.
pub fn run(opts: DumpOptions, out: &mut impl Write) -> Result<()> {
    let lines = Store::new(&opts.config).raw_lines()?;

    if opts.format == "text" {
        for line in lines {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
