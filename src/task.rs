//! Task records and their wire format.
//!
//! The store file holds one JSON object per line with the field names
//! `Desc`, `Opened`, `Closed`, and `TaskID`. Timestamps are integer
//! seconds since the epoch; `Closed == 0` means the task is still open.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Number of ID characters shown by short listings
pub const SHORT_ID_LEN: usize = 7;

/// A single work record in the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Free-text description, set at creation
    #[serde(rename = "Desc")]
    pub description: String,

    /// Creation time, seconds since epoch
    #[serde(rename = "Opened")]
    pub opened_at: i64,

    /// Close time, seconds since epoch; 0 while the task is open
    #[serde(rename = "Closed")]
    pub closed_at: i64,

    /// Fixed-length hex identifier
    #[serde(rename = "TaskID")]
    pub task_id: String,
}

impl Task {
    pub fn is_open(&self) -> bool {
        self.closed_at == 0
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_open() {
            "open"
        } else {
            "closed"
        }
    }

    /// First seven ID characters plus an ellipsis marker
    pub fn short_id(&self) -> String {
        let prefix: String = self.task_id.chars().take(SHORT_ID_LEN).collect();
        format!("{prefix}..")
    }
}

/// Current wall-clock time as seconds since the epoch
pub fn unix_now() -> i64 {
    Utc::now().timestamp()
}
