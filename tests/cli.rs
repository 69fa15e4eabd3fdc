// Integration tests for the CLI surface. External tools are never required
// here: every scenario stops before a subprocess would be spawned for real
// work, and the probe tolerates missing binaries.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Build a command with HOME and the XDG dirs redirected into a scratch
/// directory so config and database files never touch the real user profile.
fn yt_whisper(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("yt-whisper").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("XDG_DATA_HOME", home.path().join(".local/share"));
    cmd
}

#[test]
fn list_on_fresh_database_reports_nothing_found() {
    let home = TempDir::new().unwrap();
    yt_whisper(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transcripts found."));
}

#[test]
fn get_unknown_id_reports_missing_and_exits_zero() {
    let home = TempDir::new().unwrap();
    yt_whisper(&home)
        .args(["get", "dQw4w9WgXcQ"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No transcript found for video ID: dQw4w9WgXcQ",
        ));
}

#[test]
fn transcribe_rejects_url_without_video_id() {
    let home = TempDir::new().unwrap();
    yt_whisper(&home)
        .args(["transcribe", "https://example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not extract YouTube ID"));
}

#[test]
fn db_flag_overrides_database_location() {
    let home = TempDir::new().unwrap();
    let db_path = home.path().join("custom.db");
    yt_whisper(&home)
        .args(["list", "--db"])
        .arg(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No transcripts found."));
}
