mod common;

use std::{fs, path::Path};

use crate::common::{SAMPLE_BODY, run_stocksheet, serve_once, temp_root};

fn is_empty_dir(path: &Path) -> bool {
    fs::read_dir(path).unwrap().next().is_none()
}

#[tokio::test]
async fn help_lists_commands() {
    let root = temp_root("cli-help");
    let output = run_stocksheet(root.join("home"), vec!["--help".to_string()]).await;

    assert!(output.status.success(), "help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Export trending stock data into a spreadsheet"),
        "expected overview text in help output"
    );
    for command in ["export", "show", "config"] {
        assert!(stdout.contains(command), "missing '{command}' in help output");
    }

    let _ = fs::remove_dir_all(&root);
}

#[tokio::test]
async fn export_rejects_unknown_format() {
    let root = temp_root("cli-format");
    let args = ["export", "--format", "ods"].map(String::from).to_vec();
    let output = run_stocksheet(root.join("home"), args).await;

    assert!(!output.status.success(), "unknown format should fail");

    let _ = fs::remove_dir_all(&root);
}

#[tokio::test]
async fn export_invalid_url_exits_non_zero_without_touching_home() {
    let root = temp_root("cli-invalid-url");
    let home = root.join("home");
    let args = ["export", "-u", "ftp://127.0.0.1/trending"]
        .map(String::from)
        .to_vec();
    let output = run_stocksheet(home.clone(), args).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error fetching stock data"));
    assert!(is_empty_dir(&home), "no config file should be created");

    let _ = fs::remove_dir_all(&root);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn export_prints_saved_path() {
    let url = serve_once("200 OK", SAMPLE_BODY).await;
    let root = temp_root("cli-saved");
    let home = root.join("home");
    let path = root.join("out").join("x.xlsx");

    let args = vec![
        "export".to_string(),
        "-u".to_string(),
        url,
        "-o".to_string(),
        path.to_string_lossy().to_string(),
    ];
    let output = run_stocksheet(home.clone(), args).await;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("saved at:"), "unexpected stdout: {stdout}");
    assert!(stdout.contains(&*path.to_string_lossy()));
    assert!(path.is_file());
    assert!(is_empty_dir(&home), "only the spreadsheet should be written");

    let _ = fs::remove_dir_all(&root);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn export_fetch_failure_exits_non_zero() {
    let url = serve_once("503 Service Unavailable", r#"{"response":[]}"#).await;
    let root = temp_root("cli-503");
    let home = root.join("home");
    let path = root.join("out").join("x.xlsx");

    let args = vec![
        "export".to_string(),
        "-u".to_string(),
        url,
        "-o".to_string(),
        path.to_string_lossy().to_string(),
    ];
    let output = run_stocksheet(home.clone(), args).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error fetching stock data"));
    assert!(stderr.contains("503"));
    assert!(!path.exists());
    assert!(!root.join("out").exists());
    assert!(is_empty_dir(&home));

    let _ = fs::remove_dir_all(&root);
}
