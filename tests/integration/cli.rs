//! CLI binary tests
//!
//! Every invocation points `--data-dir` at a scratch directory so the log
//! file and first-run config never touch the real home directory.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mohtion(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mohtion").expect("binary builds");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn test_print_shows_hold_then_wrap() {
    let dir = TempDir::new().unwrap();
    mohtion(&dir)
        .args(["print", "--ticks", "7"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "tick 0\n  ⌕ Scanning repository...\n  █\n",
        ))
        .stdout(predicate::str::contains(
            "tick 6\n  ⌕ Scanning repository...",
        ))
        .stdout(predicate::str::contains(
            "  ⇡ PR Created: mohtion/bounty-8f2a\n\ntick 7\n",
        ))
        .stdout(predicate::str::ends_with(
            "tick 7\n  ⌕ Scanning repository...\n  █\n",
        ));
}

#[test]
fn test_first_run_writes_example_config_and_log() {
    let dir = TempDir::new().unwrap();
    mohtion(&dir)
        .args(["print", "--ticks", "0"])
        .assert()
        .success();

    let config = fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert_eq!(config, mohtion::config::EXAMPLE_CONFIG);
    assert!(dir.path().join("logs").join("mohtion.log").exists());
}

#[test]
fn test_custom_script_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(
        &config,
        r#"
[[script]]
kind = "info"
text = "Cloning fixture..."
glyph = "terminal"
color = "zinc"

[[script]]
kind = "success"
text = "Done"
glyph = "check"
color = "green"
"#,
    )
    .unwrap();

    mohtion(&dir)
        .arg("--config")
        .arg(&config)
        .args(["print", "--ticks", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  ❯ Cloning fixture..."))
        .stdout(predicate::str::contains("tick 2\n  ❯ Cloning fixture...\n  ✔ Done\n\n"))
        .stdout(predicate::str::ends_with("tick 3\n  ❯ Cloning fixture...\n  █\n"));
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "script = []\n").unwrap();

    mohtion(&dir)
        .arg("--config")
        .arg(&config)
        .arg("print")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one entry"));
}

#[test]
fn test_broken_default_config_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[display]\ncursor_color = \"#€\"\n\n[playback]\ntick_ms = 0\n",
    )
    .unwrap();

    mohtion(&dir)
        .env_remove("RUST_LOG")
        .args(["print", "--ticks", "0"])
        .assert()
        .success()
        .stdout("tick 0\n  ⌕ Scanning repository...\n  █\n");

    let log = fs::read_to_string(dir.path().join("logs").join("mohtion.log")).unwrap();
    assert!(log.contains("Falling back to default configuration"));
}

#[test]
fn test_zero_tick_rejected() {
    let dir = TempDir::new().unwrap();
    mohtion(&dir)
        .args(["--tick-ms", "0", "print"])
        .assert()
        .failure();
}

#[test]
fn test_stages_lists_lifecycle() {
    let dir = TempDir::new().unwrap();
    mohtion(&dir)
        .arg("stages")
        .assert()
        .success()
        .stdout(predicate::str::contains("01 ⌕ RECONNAISSANCE"))
        .stdout(predicate::str::contains("> GENERATING PATCH..."))
        .stdout(predicate::str::contains("04 ⑂ BOUNTY CLAIM"));
}
