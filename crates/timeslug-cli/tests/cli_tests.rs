//! CLI integration tests.
//!
//! These run the built binary and check argument handling, output
//! format and exit codes.

use std::path::PathBuf;
use std::process::Command;
use std::sync::atomic::{AtomicU32, Ordering};

/// Runs the CLI binary with args and captures output.
/// Returns (exit_code, stdout, stderr).
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_timeslug"))
        .args(args)
        .env_remove("RUST_LOG")
        .output();

    match output {
        Ok(o) => {
            let code = o.status.code().unwrap_or(-1);
            let stdout = String::from_utf8_lossy(&o.stdout).to_string();
            let stderr = String::from_utf8_lossy(&o.stderr).to_string();
            (code, stdout, stderr)
        }
        Err(e) => (-1, String::new(), e.to_string()),
    }
}

static COUNTER: AtomicU32 = AtomicU32::new(0);

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("timeslug-cli-test-{}-{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write temp file");
    path
}

// -----------------------------------------------------------------------
// Clap parsing
// -----------------------------------------------------------------------

#[test]
fn help_flag_exits_zero() {
    let (code, stdout, _) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("--window"));
    assert!(stdout.contains("--dictionary"));
}

#[test]
fn version_flag_exits_zero() {
    let (code, stdout, _) = run_cli(&["--version"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("timeslug"));
}

#[test]
fn unknown_flag_fails() {
    let (code, _, _) = run_cli(&["--nonexistent"]);
    assert_ne!(code, 0);
}

// -----------------------------------------------------------------------
// Single derivation
// -----------------------------------------------------------------------

#[test]
fn defaults_print_four_labelled_lines() {
    let (code, stdout, stderr) = run_cli(&[]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(
        stdout,
        "Mode:   obfuscated\nPeriod: 2026-02-03\nSlug:   trybeambold8\nHash:   5d3bf0d55db67ea2\n"
    );
}

#[test]
fn mnemonic_positionals() {
    let (code, stdout, _) = run_cli(&["seedphrase", "2026-02-03", "bip39", "5"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Mode:   bip39\n"));
    assert!(stdout.contains("Slug:   exoticangryanswerpatternmain\n"));
    assert!(stdout.contains("Hash:   50011c26d0a864\n"));
}

#[test]
fn json_output() {
    let (code, stdout, _) = run_cli(&["seedphrase", "2026-02-04", "obfuscated", "16", "--json"]);
    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).expect("valid JSON");
    assert_eq!(value["value"], "brightbeamvivar");
    assert_eq!(value["hash"], "f9fb66a05050f52f");
    assert_eq!(value["mode"], "obfuscated");
    assert_eq!(value["blocklist"]["status"], "clean");
}

#[test]
fn invalid_mode_exits_one() {
    let (code, stdout, stderr) = run_cli(&["seedphrase", "2026-02-03", "obfuscate"]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("invalid mode"));
}

#[test]
fn json_errors_are_json() {
    let (code, _, stderr) = run_cli(&["seedphrase", "2026-02-03", "nope", "--json"]);
    assert_eq!(code, 1);
    let value: serde_json::Value = serde_json::from_str(stderr.trim()).expect("valid JSON");
    assert!(value["error"].as_str().is_some_and(|e| e.contains("invalid mode")));
}

// -----------------------------------------------------------------------
// Window mode
// -----------------------------------------------------------------------

#[test]
fn window_prints_one_block_per_period() {
    let (code, stdout, _) = run_cli(&["seedphrase", "2026-02-04", "obfuscated", "16", "--window", "3"]);
    assert_eq!(code, 0);
    let blocks: Vec<&str> = stdout.trim_end().split("\n\n").collect();
    assert_eq!(blocks.len(), 3);
    assert!(blocks[0].contains("Period: 2026-02-03\nSlug:   trybeambold8"));
    assert!(blocks[2].contains("Period: 2026-02-05\nSlug:   trycorefastfum"));
}

#[test]
fn window_json_carries_id() {
    let (code, stdout, _) = run_cli(&[
        "seedphrase", "2026-02-03", "bip39", "3", "--window", "3", "--interval", "day", "--json",
    ]);
    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).expect("valid JSON");
    assert_eq!(value["id"], "2026-02-03-bip39-day-3-3");
    assert_eq!(value["slugs"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["slugs"][1]["value"], "exoticangryanswer");
}

#[test]
fn bad_anchor_exits_one() {
    let (code, _, stderr) = run_cli(&["seedphrase", "yesterday", "bip39", "3", "--window", "3"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("invalid time"));
}

#[test]
fn zero_window_exits_one() {
    let (code, _, stderr) = run_cli(&["seedphrase", "2026-02-03", "bip39", "3", "--window", "0"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("window"));
}

// -----------------------------------------------------------------------
// Files
// -----------------------------------------------------------------------

#[test]
fn config_file_defaults() {
    let path = temp_file("timeslug.json", r#"{ "mode": "bip39", "length": 1 }"#);
    let path_arg = path.to_string_lossy().into_owned();
    let (code, stdout, _) = run_cli(&["seedphrase", "2026-02-03", "--config", &path_arg]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Slug:   exotic\n"));
    assert!(stdout.contains("Hash:   5001\n"));
}

#[test]
fn custom_dictionary() {
    let words: Vec<String> = (0..2048).map(|i| format!("w{i}")).collect();
    let path = temp_file("words.txt", &words.join("\n"));
    let path_arg = path.to_string_lossy().into_owned();
    let (code, stdout, _) = run_cli(&["seedphrase", "2026-02-03", "bip39", "1", "--dictionary", &path_arg]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Slug:   w640\n"));
}

#[test]
fn short_dictionary_is_rejected() {
    let path = temp_file("short.txt", "alpha\nbeta\ngamma\n");
    let path_arg = path.to_string_lossy().into_owned();
    let (code, _, stderr) = run_cli(&["seedphrase", "2026-02-03", "bip39", "1", "--dictionary", &path_arg]);
    assert_eq!(code, 1);
    assert!(stderr.contains("2048"));
}
