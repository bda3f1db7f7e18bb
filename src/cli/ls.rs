//! tally ls command implementation

use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::output;
use crate::store::Store;

pub struct LsOptions {
    pub config: Config,
    pub long_id: bool,
    pub show_all: bool,
}

pub fn run(opts: LsOptions, out: &mut impl Write) -> Result<()> {
    let tasks = Store::new(&opts.config).load()?;
    output::write_table(out, &tasks, opts.long_id, opts.show_all)
}
