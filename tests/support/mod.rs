#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway ledger directory plus a command builder pointed at it
pub struct TestLedger {
    dir: TempDir,
}

impl TestLedger {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("tally").expect("tally binary");
        cmd.env("TALLY_DIR", self.dir.path());
        cmd
    }

    pub fn task_file(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    pub fn write_config(&self, contents: &str) {
        fs::write(self.dir.path().join("config.toml"), contents).expect("write config");
    }

    pub fn store_lines(&self) -> Vec<String> {
        let contents = fs::read_to_string(self.task_file()).expect("read store file");
        contents.lines().map(str::to_string).collect()
    }

    pub fn write_store_lines(&self, lines: &[String]) {
        let mut body = lines.join("\n");
        body.push('\n');
        fs::write(self.task_file(), body).expect("write store file");
    }

    /// Task IDs in file order
    pub fn task_ids(&self) -> Vec<String> {
        self.store_lines()
            .iter()
            .map(|line| field(line, "TaskID").as_str().expect("TaskID").to_string())
            .collect()
    }
}

/// One field of a serialized record
pub fn field(line: &str, name: &str) -> serde_json::Value {
    let value: serde_json::Value = serde_json::from_str(line).expect("parse record");
    value[name].clone()
}

/// One serialized store record in the wire format
pub fn task_line(description: &str, opened: i64, closed: i64, id: &str) -> String {
    format!(r#"{{"Desc":"{description}","Opened":{opened},"Closed":{closed},"TaskID":"{id}"}}"#)
}

/// Current wall-clock seconds since the epoch
pub fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_secs() as i64
}
