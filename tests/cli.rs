use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp home
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".oi-dash").join("config.json")
}

const BINARY_NAME: &str = "oi-dash";

/// Command with an isolated home and no API URL in the environment.
fn oi_dash(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()).env_remove("OI_DASH_API_URL");
    cmd
}

/// Serves `body` as the analytics response on an ephemeral port.
fn spawn_backend(body: &'static str) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            let app = axum::Router::new().route(
                "/api/data",
                axum::routing::get(move || async move {
                    ([(axum::http::header::CONTENT_TYPE, "application/json")], body)
                }),
            );
            axum::serve(listener, app).await.unwrap();
        });
    });
    format!("http://{}", addr)
}

const NIFTY_BODY: &str = r#"{
    "symbol": "NIFTY",
    "expiry": "2024-06-27",
    "underlying": 22500.5,
    "pcr": 1.12,
    "recommendation": "Bullish",
    "supports": [22400, 22300],
    "resistances": [22600],
    "strikesWindow": [
        {"strike": 22400, "callOI": 1000, "putOI": 3000},
        {"strike": 22500, "callOI": 2500, "putOI": 2000}
    ]
}"#;

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"))
        .stdout(contains("fetch"))
        .stdout(contains("set-default"));
}

#[test]
fn start_rejects_zero_refresh_interval() {
    let tmp = temp_home_dir();
    oi_dash(&tmp)
        .args(["start", "--headless", "--refresh-secs", "0"])
        .assert()
        .failure();
}

#[test]
/// Clear-config should delete an existing config file.
fn clear_config_deletes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    oi_dash(&tmp)
        .arg("clear-config")
        .assert()
        .success()
        .stdout(contains("Configuration cleared"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}

#[test]
fn clear_config_without_file_succeeds() {
    let tmp = temp_home_dir();
    oi_dash(&tmp).arg("clear-config").assert().success();
    assert!(!config_file_path(&tmp).exists());
}

#[test]
fn set_default_writes_config_file() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);

    oi_dash(&tmp)
        .args([
            "set-default",
            "--symbol",
            "BANKNIFTY",
            "--api-url",
            "http://10.0.0.5:5000/",
        ])
        .assert()
        .success()
        .stdout(contains("Saved defaults"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(saved["symbol"], "BANKNIFTY");
    assert_eq!(saved["api_url"], "http://10.0.0.5:5000/");
}

#[test]
fn set_default_rejects_invalid_url() {
    let tmp = temp_home_dir();
    oi_dash(&tmp)
        .args(["set-default", "--api-url", "ftp://example.com"])
        .assert()
        .failure()
        .stderr(contains("Invalid API URL"));
    assert!(!config_file_path(&tmp).exists());
}

#[test]
fn fetch_prints_regions() {
    let tmp = temp_home_dir();
    let url = spawn_backend(NIFTY_BODY);

    oi_dash(&tmp)
        .args(["fetch", "--symbol", "NIFTY", "--api-url", &url])
        .assert()
        .success()
        .stdout(contains("Symbol: NIFTY"))
        .stdout(contains("Recommendation: Bullish"))
        .stdout(contains("Supports: S1: 22400, S2: 22300"))
        .stdout(contains("Resistances: R1: 22600"))
        .stdout(contains("Status: Updated"));
}

#[test]
fn fetch_json_uses_saved_api_url() {
    let tmp = temp_home_dir();
    let url = spawn_backend(NIFTY_BODY);
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(
        &config_path,
        format!(r#"{{"symbol": "NIFTY", "api_url": "{}"}}"#, url),
    )
    .unwrap();

    oi_dash(&tmp)
        .args(["fetch", "--json"])
        .assert()
        .success()
        .stdout(contains("\"strikesWindow\""))
        .stdout(contains("\"recommendation\": \"Bullish\""));
}

#[test]
fn fetch_reports_server_error() {
    let tmp = temp_home_dir();
    let url = spawn_backend(r#"{"error": "Symbol not found"}"#);

    oi_dash(&tmp)
        .args(["fetch", "--symbol", "XYZ", "--api-url", &url])
        .assert()
        .failure()
        .stderr(contains("Error: Symbol not found"));
}

#[test]
fn fetch_unreachable_backend_fails() {
    let tmp = temp_home_dir();
    // Bind then drop to get a port with nothing listening.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    oi_dash(&tmp)
        .args([
            "fetch",
            "--symbol",
            "NIFTY",
            "--api-url",
            &format!("http://127.0.0.1:{}", port),
        ])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}
