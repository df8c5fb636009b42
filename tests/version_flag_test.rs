use std::process::Command;

#[test]
fn test_version_flag() {
    let binary_path = env!("CARGO_BIN_EXE_hubview");

    let output = Command::new(binary_path)
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(
        output.status.success(),
        "Version flag should exit with code 0"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let version = stdout.trim().strip_prefix("hubview ").unwrap_or("");
    assert_eq!(
        version,
        env!("CARGO_PKG_VERSION"),
        "Binary version should match CARGO_PKG_VERSION"
    );
}

#[test]
fn test_help_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_hubview"))
        .arg("--help")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Usage: hubview"));
}

#[test]
fn test_missing_view_uri_exits_with_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_hubview"))
        .output()
        .expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing view URI"));
}

#[test]
fn test_offline_load_from_cache_dir() {
    let dir = tempfile::TempDir::new().unwrap();
    let feature_dir = dir.path().join("hub");
    std::fs::create_dir_all(&feature_dir).unwrap();

    // sha256("hub:home")
    let key = {
        use sha2::{Digest, Sha256};
        hex::encode(Sha256::digest(b"hub:home"))
    };
    std::fs::write(
        feature_dir.join(format!("{}.json", key)),
        r#"{"id":"home","body":[{"id":"row","component":"hub:row"}]}"#,
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_hubview"))
        .args(["--offline", "--cache-dir"])
        .arg(dir.path())
        .arg("hub:home")
        .env_remove("HUBVIEW_REMOTE_URL")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["id"], "home");
    assert_eq!(value["body"][0]["id"], "row");
}
