//! End-to-end checks of the start-up path, run against the built binary in
//! `--check` mode so no window is opened.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const SAMPLE: &str = ",Artist,Track,Album,Uri,Stream,Views,Likes,Danceability,Energy,Speechiness,Acousticness,Instrumentalness,Liveness,Valence,Url_youtube
0,Alice,Song,LP,u1,100,10,1,0.1,0.2,0.3,0.4,0.5,0.6,0.7,
1,Bob,Song,LP,u1,100,10,1,0.1,0.2,0.3,0.4,0.5,0.6,0.7,
2,Carol,Other,EP,u2,300,30,3,0.1,0.2,0.3,0.4,0.5,0.6,0.7,https://youtube.com/c
";

fn run_check(data: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tracklens"))
        .arg("--check")
        .arg("--data")
        .arg(data)
        .env_remove("TRACKLENS_DATA")
        .output()
        .expect("Failed to run tracklens")
}

#[test]
fn test_missing_source_exits_with_status_one() {
    let dir = TempDir::new().unwrap();
    let output = run_check(&dir.path().join("data.csv"));

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

#[test]
fn test_missing_source_with_unknown_extension_exits_with_status_one() {
    let dir = TempDir::new().unwrap();
    let output = run_check(&dir.path().join("data.txt"));

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

#[test]
fn test_malformed_source_exits_with_status_two() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, ",Artist,Track\n0,Alice,Song\n").unwrap();

    let output = run_check(&path);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing required column"), "stderr: {stderr}");
}

#[test]
fn test_check_reports_processed_counts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, SAMPLE).unwrap();

    let output = run_check(&path);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("3 rows, 2 tracks, 2 artists"), "stdout: {stdout}");
}
