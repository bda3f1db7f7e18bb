//! tally rm command implementation

use crate::config::Config;
use crate::error::Result;
use crate::matcher;
use crate::store::Store;

pub struct RmOptions {
    pub config: Config,
    pub id_prefix: String,
}

/// Delete the task matching the given ID prefix.
///
/// The record is removed outright, not tombstoned; the relative order of
/// the remaining records is preserved.
pub fn run(opts: RmOptions) -> Result<()> {
    let store = Store::new(&opts.config);
    let mut tasks = store.load()?;

    let idx = matcher::resolve(&opts.id_prefix, &tasks)?;
    tasks.remove(idx);

    store.rewrite_all(&tasks)
}
