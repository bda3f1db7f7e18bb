//! tally add command implementation

use crate::config::Config;
use crate::error::{Error, Result};
use crate::id::IdGenerator;
use crate::store::Store;
use crate::task::{self, Task};

pub struct AddOptions {
    pub config: Config,
    pub closed: bool,
    pub description: Vec<String>,
}

/// Create a task and append it to the store.
///
/// The description is the argument words joined with spaces; an empty or
/// whitespace-only description is rejected before the store is touched.
/// With `closed` set the task is born closed, stamped with the same time
/// for both fields.
pub fn run(opts: AddOptions, ids: &mut dyn IdGenerator) -> Result<()> {
    let description = opts.description.join(" ");
    if description.trim().is_empty() {
        return Err(Error::EmptyDescription);
    }

    let now = task::unix_now();
    let task = Task {
        description,
        opened_at: now,
        closed_at: if opts.closed { now } else { 0 },
        task_id: ids.generate(),
    };

    Store::new(&opts.config).append(&task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    struct FixedIds(Vec<String>);

    impl IdGenerator for FixedIds {
        fn generate(&mut self) -> String {
            self.0.remove(0)
        }
    }

    fn config_at(dir: &Path) -> Config {
        Config {
            data_dir: dir.to_path_buf(),
            task_file: dir.join("tasks.json"),
            report_days: 7,
        }
    }

    fn options(dir: &Path, closed: bool, words: &[&str]) -> AddOptions {
        AddOptions {
            config: config_at(dir),
            closed,
            description: words.iter().map(|word| word.to_string()).collect(),
        }
    }

    #[test]
    fn appends_open_task_with_joined_description() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut ids = FixedIds(vec!["aaaa".to_string()]);

        run(options(dir.path(), false, &["buy", "milk"]), &mut ids).expect("add");

        let tasks = Store::new(&config_at(dir.path())).load().expect("load");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].description, "buy milk");
        assert_eq!(tasks[0].task_id, "aaaa");
        assert!(tasks[0].is_open());
        assert!(tasks[0].opened_at > 0);
    }

    #[test]
    fn closed_flag_stamps_both_timestamps() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut ids = FixedIds(vec!["aaaa".to_string()]);

        run(options(dir.path(), true, &["done already"]), &mut ids).expect("add");

        let tasks = Store::new(&config_at(dir.path())).load().expect("load");
        assert_eq!(tasks[0].closed_at, tasks[0].opened_at);
        assert_ne!(tasks[0].closed_at, 0);
    }

    #[test]
    fn empty_description_leaves_store_untouched() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut ids = FixedIds(vec![]);

        let err = run(options(dir.path(), false, &[]), &mut ids).expect_err("empty add");
        assert!(matches!(err, Error::EmptyDescription));
        assert!(!dir.path().join("tasks.json").exists());
    }

    #[test]
    fn whitespace_only_description_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut ids = FixedIds(vec![]);

        let err = run(options(dir.path(), false, &[" ", ""]), &mut ids).expect_err("blank add");
        assert!(matches!(err, Error::EmptyDescription));
    }
}
