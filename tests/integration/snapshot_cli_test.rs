//! CLI output snapshot tests

use std::process::Command;

/// Run littime and capture `(stdout, stderr, exit_code)`.
fn run_littime(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_littime"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute littime");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

// ============================================================================
// Help Output Snapshots
// ============================================================================

#[test]
fn snapshot_cli_help_main() {
    let (stdout, stderr, exit_code) = run_littime(&["--help"]);
    let output = format!(
        "=== littime --help ===\nExit code: {}\n\n--- stdout ---\n{}\n--- stderr ---\n{}",
        exit_code, stdout, stderr
    );
    insta::assert_snapshot!("cli_help_main", output);
}
