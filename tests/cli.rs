//! Runs the `journey-deck` binary end to end.

use std::fs;
use std::process::Command;

const OUTPUT: &str = "CalendarApp_Development_Journey.pptx";

fn journey_deck() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_journey-deck"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_writes_deck_to_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let output = journey_deck().current_dir(dir.path()).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end(), format!("Presentation saved as: {OUTPUT}"));

    let written = fs::metadata(dir.path().join(OUTPUT)).unwrap();
    assert!(written.len() > 0);
}

#[test]
fn test_failure_exits_nonzero_without_leftovers() {
    let dir = tempfile::tempdir().unwrap();
    // A directory at the output path makes the final rename fail
    fs::create_dir(dir.path().join(OUTPUT)).unwrap();

    let output = journey_deck().current_dir(dir.path()).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error:"), "{stderr}");

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from(OUTPUT)]);
}

#[cfg(unix)]
#[test]
fn test_read_only_directory_fails_without_leftovers() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users bypass directory permissions; nothing to check then
    let canary = locked.join("canary");
    if fs::write(&canary, b"").is_ok() {
        fs::remove_file(&canary).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let output = journey_deck().current_dir(&locked).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error:"), "{stderr}");
    assert_eq!(fs::read_dir(&locked).unwrap().count(), 0);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
}
