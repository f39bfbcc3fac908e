#![allow(deprecated)] // cargo_bin deprecation - still works fine

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

mod common;
use common::{LARGE_SHIFT_ENTRY, SMALL_SHIFT_ENTRY, TestFixture};

fn cmd() -> Command {
    Command::cargo_bin("po-unfuzzy").expect("binary should exist")
}

// ============================================================================
// Basic runs
// ============================================================================

#[test]
fn small_shift_is_unfuzzed() {
    let fixture = TestFixture::new();
    let po = fixture.create_po("nl.po", SMALL_SHIFT_ENTRY);

    cmd()
        .arg(&po)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Unfuzzed 1 / 1 fuzzy contextual entries.",
        ));

    assert!(!fixture.read("nl.po").contains("fuzzy"));
}

#[test]
fn large_shift_is_kept_fuzzy() {
    let fixture = TestFixture::new();
    let po = fixture.create_po("nl.po", LARGE_SHIFT_ENTRY);

    cmd()
        .arg(&po)
        .assert()
        .success()
        .stdout(predicate::str::contains("Unfuzzed 0 / 1"));

    assert!(fixture.read("nl.po").contains("#, fuzzy"));
}

#[test]
fn missing_input_exits_nonzero() {
    cmd()
        .arg("does-not-exist.po")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input file not found"));
}

// ============================================================================
// Flags and modes
// ============================================================================

#[test]
fn dry_run_leaves_file_untouched() {
    let fixture = TestFixture::new();
    let po = fixture.create_po("nl.po", SMALL_SHIFT_ENTRY);

    cmd()
        .arg(&po)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Dry run: 1 / 1 fuzzy contextual entries would be unfuzzed.",
        ));

    assert_eq!(fixture.read("nl.po"), SMALL_SHIFT_ENTRY);
}

#[test]
fn verbose_reports_per_entry_reason() {
    let fixture = TestFixture::new();
    let po = fixture.create_po("nl.po", LARGE_SHIFT_ENTRY);

    cmd()
        .arg(&po)
        .arg("--dry-run")
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("reason=delta_exceeded"));
}

#[test]
fn threshold_zero_disables_heuristic() {
    let fixture = TestFixture::new();
    let po = fixture.create_po("nl.po", SMALL_SHIFT_ENTRY);

    cmd()
        .arg(&po)
        .arg("--line-shift-threshold")
        .arg("0")
        .arg("--dry-run")
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("reason=threshold_disabled"));
}

#[test]
fn wider_threshold_accepts_larger_shift() {
    let fixture = TestFixture::new();
    let po = fixture.create_po("nl.po", LARGE_SHIFT_ENTRY);

    cmd()
        .arg(&po)
        .arg("--line-shift-threshold")
        .arg("50")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unfuzzed 1 / 1"));
}

#[test]
fn quiet_suppresses_summary() {
    let fixture = TestFixture::new();
    let po = fixture.create_po("nl.po", SMALL_SHIFT_ENTRY);

    cmd()
        .arg(&po)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn json_format_emits_machine_readable_report() {
    let fixture = TestFixture::new();
    let po = fixture.create_po("nl.po", SMALL_SHIFT_ENTRY);

    let output = cmd()
        .arg(&po)
        .arg("--dry-run")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["considered"], 1);
    assert_eq!(value["summary"]["modified"], 1);
    assert_eq!(value["entries"][0]["reason"], "ok");
}

#[test]
fn debug_line_shift_traces_to_stderr() {
    let fixture = TestFixture::new();
    let po = fixture.create_po("nl.po", LARGE_SHIFT_ENTRY);

    cmd()
        .arg(&po)
        .arg("--dry-run")
        .arg("--debug-line-shift")
        .assert()
        .success()
        .stderr(predicate::str::contains("[line-shift]"));
}

// ============================================================================
// Backups and output paths
// ============================================================================

#[test]
fn backup_written_before_overwrite() {
    let fixture = TestFixture::new();
    let po = fixture.create_po("nl.po", SMALL_SHIFT_ENTRY);

    cmd().arg(&po).assert().success();

    assert_eq!(fixture.read("nl.po.bak"), SMALL_SHIFT_ENTRY);
}

#[test]
fn no_backup_flag_skips_backup() {
    let fixture = TestFixture::new();
    let po = fixture.create_po("nl.po", SMALL_SHIFT_ENTRY);

    cmd().arg(&po).arg("--no-backup").assert().success();

    assert!(!fixture.path().join("nl.po.bak").exists());
}

#[test]
fn existing_backup_survives_second_run() {
    let fixture = TestFixture::new();
    let po = fixture.create_po("nl.po", SMALL_SHIFT_ENTRY);
    fixture.create_po("nl.po.bak", "pre-existing backup");

    cmd().arg(&po).assert().success();

    assert_eq!(fixture.read("nl.po.bak"), "pre-existing backup");
}

#[test]
fn output_path_leaves_input_alone() {
    let fixture = TestFixture::new();
    let po = fixture.create_po("nl.po", SMALL_SHIFT_ENTRY);
    let out = fixture.path().join("out.po");

    cmd()
        .arg(&po)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    assert_eq!(fixture.read("nl.po"), SMALL_SHIFT_ENTRY);
    assert!(!fs::read_to_string(&out).unwrap().contains("fuzzy"));
    assert!(!fixture.path().join("nl.po.bak").exists());
}

// ============================================================================
// End-to-end semantics
// ============================================================================

#[test]
fn second_run_reports_nothing_left_to_do() {
    let fixture = TestFixture::new();
    let content = format!("{SMALL_SHIFT_ENTRY}\n{LARGE_SHIFT_ENTRY}");
    let po = fixture.create_po("nl.po", &content);

    cmd()
        .arg(&po)
        .assert()
        .success()
        .stdout(predicate::str::contains("Unfuzzed 1 / 2"));

    cmd()
        .arg(&po)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run: 0 / 1"));
}

#[test]
fn comment_preceded_entry_keeps_comments_attached() {
    let fixture = TestFixture::new();
    let content = "# translator note\n\
        #: src/a.lua:12\n\
        #, fuzzy\n\
        #| msgctxt \"a.lua:10-3\"\n\
        msgctxt \"a.lua:12-3\"\n\
        msgid \"Hello\"\n\
        msgstr \"Hallo\"\n";
    let po = fixture.create_po("nl.po", content);

    cmd().arg(&po).assert().success();

    let result = fixture.read("nl.po");
    // No blank line may appear where the flag line was removed
    assert!(result.contains("#: src/a.lua:12\n#| msgctxt \"a.lua:10-3\""));
    assert!(!result.contains("fuzzy"));
}

#[test]
fn mixed_flags_keep_their_other_tokens() {
    let fixture = TestFixture::new();
    let content = "#, fuzzy, c-format\n\
        #| msgctxt \"a.lua:10-3\"\n\
        msgctxt \"a.lua:12-3\"\n\
        msgid \"Hello %s\"\n\
        msgstr \"Hallo %s\"\n";
    let po = fixture.create_po("nl.po", content);

    cmd().arg(&po).assert().success();

    let result = fixture.read("nl.po");
    assert!(result.contains("#, c-format\n"));
    assert!(!result.contains("fuzzy"));
}

#[test]
fn structural_change_is_rejected() {
    let fixture = TestFixture::new();
    let content = "#, fuzzy\n\
        #| msgctxt \"a.lua:10-3\"\n\
        msgctxt \"b.lua:12-3\"\n\
        msgid \"Hello\"\n\
        msgstr \"Hallo\"\n";
    let po = fixture.create_po("nl.po", content);

    cmd()
        .arg(&po)
        .arg("--dry-run")
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("reason=structural_mismatch"));
}

#[test]
fn duplicated_context_is_normalized_and_unfuzzed() {
    let fixture = TestFixture::new();
    let content = "#, fuzzy\n\
        #| msgctxt \"a.lua:5-2a.lua:5-2\"\n\
        msgctxt \"a.lua:5-2\"\n\
        msgid \"Hi\"\n\
        msgstr \"Hoi\"\n";
    let po = fixture.create_po("nl.po", content);

    cmd()
        .arg(&po)
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("[unfuzz] msgctxt=a.lua:5-2"));

    assert!(!fixture.read("nl.po").contains("fuzzy"));
}
