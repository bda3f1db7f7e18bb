//! Resolution of user-supplied ID prefixes to stored tasks.

use crate::error::{Error, Result};
use crate::task::Task;

/// Resolve `prefix` to the position of exactly one task.
///
/// Matching is a case-sensitive prefix test against the full task ID; a
/// prefix longer than a candidate ID never matches that candidate. Zero
/// matches and multiple matches are both errors, so the caller either gets
/// an unambiguous position or a reason to ask for a longer prefix.
pub fn resolve(prefix: &str, tasks: &[Task]) -> Result<usize> {
    let mut found = None;
    let mut matches = 0usize;

    for (idx, task) in tasks.iter().enumerate() {
        if task.task_id.starts_with(prefix) {
            matches += 1;
            found = Some(idx);
        }
    }

    if matches > 1 {
        return Err(Error::AmbiguousMatch(prefix.to_string()));
    }
    match found {
        Some(idx) => Ok(idx),
        None => Err(Error::NoMatch(prefix.to_string())),
    }
}
