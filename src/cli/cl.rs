//! tally cl command implementation

use crate::config::Config;
use crate::error::Result;
use crate::matcher;
use crate::store::Store;
use crate::task;

pub struct ClOptions {
    pub config: Config,
    pub id_prefix: String,
}

/// Close the task matching the given ID prefix.
///
/// Re-closing an already-closed task overwrites its close time with the
/// current one; there is no already-closed guard.
pub fn run(opts: ClOptions) -> Result<()> {
    let store = Store::new(&opts.config);
    let mut tasks = store.load()?;

    let idx = matcher::resolve(&opts.id_prefix, &tasks)?;
    tasks[idx].closed_at = task::unix_now();

    store.rewrite_all(&tasks)
}
