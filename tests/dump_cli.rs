mod support;

use predicates::str::contains;
use support::{task_line, unix_now, TestLedger};

const ID_A: &str = "aaaa000000000000000000000000000000000000";
const ID_B: &str = "bbbb000000000000000000000000000000000000";

#[test]
fn dump_echoes_store_verbatim() {
    let ledger = TestLedger::new();
    let now = unix_now();
    let lines = vec![
        task_line("one", now, 0, ID_A),
        task_line("two", now, now, ID_B),
    ];
    ledger.write_store_lines(&lines);

    let output = ledger
        .cmd()
        .arg("dump")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).expect("utf8");
    assert_eq!(text, format!("{}\n{}\n", lines[0], lines[1]));
}

#[test]
fn dump_accepts_unknown_formats_silently() {
    let ledger = TestLedger::new();
    ledger.write_store_lines(&[task_line("one", unix_now(), 0, ID_A)]);

    let output = ledger
        .cmd()
        .args(["dump", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert!(output.is_empty());
}

#[test]
fn dump_without_store_fails() {
    let ledger = TestLedger::new();
    ledger
        .cmd()
        .arg("dump")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("could not open store file"));
}

#[test]
fn unknown_subcommand_fails() {
    let ledger = TestLedger::new();
    ledger.cmd().arg("frobnicate").assert().failure().code(1);
}
