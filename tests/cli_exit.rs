use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "weather_checker_cli_{tag}_{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

/// Writes a config pointing the log at `log_path` and runs the binary on it.
fn run_with_log_path(dir: &Path, log_path: &Path) -> Output {
    let config = dir.join("weather_checker.conf");
    fs::write(
        &config,
        format!(
            "[Logging]\nlog_path = {}\n\n[Weather]\ndelay_ms = 0\n",
            log_path.display()
        ),
    )
    .expect("write config");

    Command::new(env!("CARGO_BIN_EXE_weather_checker"))
        .arg(&config)
        .current_dir(dir)
        .output()
        .expect("spawn weather_checker")
}

#[test]
fn completed_run_exits_zero_and_writes_every_record() {
    let dir = scratch_dir("ok");
    let log_path = dir.join("weather.log");

    let out = run_with_log_path(&dir, &log_path);

    assert_eq!(out.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let file_text = fs::read_to_string(&log_path).expect("read log file");
    // Four default locations: begin + 2 * 4 + complete.
    assert_eq!(file_text.lines().count(), 10);
    assert_eq!(String::from_utf8_lossy(&out.stdout), file_text);
}

#[test]
fn unopenable_log_file_exits_non_zero_and_reports_on_console() {
    let dir = scratch_dir("missing_dir");
    let log_path = dir.join("missing_dir").join("weather.log");

    let out = run_with_log_path(&dir, &log_path);

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.lines().any(|l| l.contains("[CRITICAL] cannot open log file")),
        "stdout: {stdout}"
    );
    assert!(!log_path.exists());
}
