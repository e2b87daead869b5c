//! Integration tests for the `clt` command-line binary.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test context with a scratch directory for config files
struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        Self { temp_dir }
    }

    fn write_config(&self, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join("clt.toml");
        std::fs::write(&path, content).expect("failed to write config");
        path
    }

    fn clt_cmd(&self) -> Command {
        let bin_path = env!("CARGO_BIN_EXE_clt");
        let mut cmd = Command::new(bin_path);
        cmd.env_remove("CLT_CONFIG");
        cmd.env_remove("RUST_LOG");
        cmd.current_dir(self.temp_dir.path());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.clt_cmd()
            .args(args)
            .output()
            .expect("failed to run clt")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_help_command() {
    let ctx = TestContext::new();
    let output = ctx.run(&["--help"]);
    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("table"));
    assert!(stdout.contains("progress"));
}

#[test]
fn test_version_command() {
    let ctx = TestContext::new();
    assert!(ctx.run(&["--version"]).status.success());
}

#[test]
fn test_table_command() {
    let ctx = TestContext::new();
    let output = ctx.run(&["table", "--max-width", "60"]);
    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("Simple Example Table"));
    assert!(stdout.contains("Col3 Line2"));
    assert!(stdout.contains("\x1b[32mOK\x1b[39m"));
    assert!(stdout.contains("\x1b[31mFAIL\x1b[39m"));
    assert!(!stdout.contains("Wrapped Example Table"));
}

#[test]
fn test_table_wrap_command() {
    let ctx = TestContext::new();
    let output = ctx.run(&["table", "--wrap", "--padding", "2"]);
    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("Wrapped Example Table"));
    assert!(!stdout.contains("This is a pretty long description."));
    assert!(stdout.contains("description."));
}

#[test]
fn test_table_reads_config() {
    let ctx = TestContext::new();
    let config = ctx.write_config("[table]\npadding = 4\n");
    let output = ctx.run(&["table", "--config", config.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("    \x1b[1;4mColumn1\x1b[22;24m    "));
}

#[test]
fn test_invalid_config_fails() {
    let ctx = TestContext::new();
    let config = ctx.write_config("[table]\nmax_width = \"wide\"\n");
    let output = ctx.run(&["table", "--config", config.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"));
}

#[test]
fn test_progress_bar_command() {
    let ctx = TestContext::new();
    let output = ctx.run(&["progress", "bar", "--millis", "0"]);
    assert!(output.status.success());
    let stdout = stdout(&output);
    let full = format!(
        "Implement progress bar: [{}] \x1b[32m100%\x1b[39m",
        "=".repeat(20)
    );
    assert!(stdout.contains(&full));
    assert!(stdout.ends_with("\x1b[?25h\n"));
}

#[test]
fn test_progress_spinner_fail_command() {
    let ctx = TestContext::new();
    let output = ctx.run(&["progress", "spinner", "--fail", "--millis", "0"]);
    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("Testing a failed result"));
    assert!(stdout.contains("[\x1b[31mFAIL\x1b[39m]"));
}

#[test]
fn test_progress_incremental_command() {
    let ctx = TestContext::new();
    let output = ctx.run(&["progress", "incremental", "--millis", "30"]);
    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("Doing work: ["));
    assert!(stdout.contains("100%"));
}

#[test]
fn test_fast_loading_draws_nothing() {
    let ctx = TestContext::new();
    let output = ctx.run(&["progress", "loading", "--millis", "0"]);
    assert!(output.status.success());
    assert!(!stdout(&output).contains("Loading"));
}

#[test]
fn test_styles_command() {
    let ctx = TestContext::new();
    let output = ctx.run(&["styles"]);
    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("\x1b[35mmagenta"));
    assert!(stdout.contains("\x1b[1mbold\x1b[22m"));
}
