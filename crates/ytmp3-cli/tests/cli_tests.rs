//! CLI integration tests

use std::process::{Command, Stdio};

fn ytmp3_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ytmp3"));
    // Keep the user's own config out of the picture
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/ytmp3-tests")
        .env_remove("YTMP3_PATHS__YT_DLP")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_output() {
    let output = ytmp3_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("MP3"));
    assert!(stdout.contains("playlist"));
    assert!(stdout.contains("video"));
    assert!(stdout.contains("doctor"));
    assert!(stdout.contains("--config"));
}

#[test]
fn version_output() {
    let output = ytmp3_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ytmp3"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_shows_templates() {
    let output = ytmp3_bin()
        .arg("config")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[output]"));
    assert!(stdout.contains("%(playlist)s/%(playlist_index)s - %(title)s.%(ext)s"));
    assert!(stdout.contains("video:    %(title)s.%(ext)s"));
}

#[test]
fn prompt_without_input_fails() {
    let output = ytmp3_bin()
        .arg("video")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Enter the YouTube video URL: "));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("URL"),
        "Expected error about missing URL, got: {}",
        stderr
    );
}

#[test]
fn bare_invocation_prompts_for_playlist() {
    let output = ytmp3_bin()
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Enter the YouTube playlist URL: "));
}

#[test]
fn download_failure_is_printed() {
    let output = ytmp3_bin()
        .args(["video", "https://example.com/watch?v=abc"])
        .env("YTMP3_PATHS__YT_DLP", "/nonexistent/ytmp3-tests/yt-dlp")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.matches("An error occurred: yt-dlp not found").count(),
        1,
        "got: {}",
        stdout
    );
}

#[test]
fn bare_invocation_accepts_output_dir() {
    let output = ytmp3_bin()
        .args(["-o", "/tmp/ytmp3-tests", "https://youtube.com/playlist?list=PL1"])
        .env("YTMP3_PATHS__YT_DLP", "/nonexistent/ytmp3-tests/yt-dlp")
        .output()
        .expect("Failed to execute command");

    // Parsed as a playlist download, so it fails at yt-dlp rather than in clap
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("An error occurred: yt-dlp not found"), "got: {}", stdout);
}
