//! End-to-end tests for the generation pipeline.
//!
//! Every test runs in flag mode (`--url` given) so no prompt is shown. The
//! API is stubbed with wiremock and output goes to a temp directory.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Invoke the CLI the way the binary does, returning its exit code.
fn run_cli(args: &[&str]) -> i32 {
    let mut argv = vec!["tygen".to_string()];
    argv.extend(args.iter().map(|arg| (*arg).to_string()));
    tygen_cli::run_cli(argv)
}

/// Multi-thread runtime so the mock server keeps serving while the CLI
/// runs on its own runtime.
fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create test runtime")
}

/// Start a mock API serving `body` at `/data` with the given status.
fn start_mock(rt: &tokio::runtime::Runtime, status: u16, body: &str) -> (MockServer, String) {
    let body = body.to_string();
    rt.block_on(async move {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;
        let url = format!("{}/data", server.uri());
        (server, url)
    })
}

fn read_output(dir: &Path, type_name: &str) -> String {
    fs::read_to_string(dir.join(format!("{type_name}.ts"))).expect("Failed to read output file")
}

#[test]
fn test_object_payload_writes_interface_file() {
    let rt = runtime();
    let (_server, url) = start_mock(&rt, 200, r#"{"name": "ada", "id": 1, "active": true}"#);
    let out = TempDir::new().unwrap();

    let code = run_cli(&["--url", &url, "--name", "User", "--path", out.path().to_str().unwrap()]);
    assert_eq!(code, 0);

    let contents = read_output(out.path(), "User");
    assert_eq!(
        contents,
        "export interface User {\n  active: boolean;\n  id: number;\n  name: string;\n}"
    );
}

#[test]
fn test_defaults_apply_without_name_flag() {
    let rt = runtime();
    let (_server, url) = start_mock(&rt, 200, r#"{"id": 1}"#);
    let out = TempDir::new().unwrap();

    let code = run_cli(&["-u", &url, "-p", out.path().to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(out.path().join("ApiTypes.ts").exists());
}

#[test]
fn test_array_payload_samples_first_element() {
    let rt = runtime();
    let (_server, url) = start_mock(
        &rt,
        200,
        r#"[{"id": 1, "title": "first"}, {"id": 2, "title": "second"}]"#,
    );
    let out = TempDir::new().unwrap();

    let code = run_cli(&["-u", &url, "-n", "Post", "-p", out.path().to_str().unwrap()]);
    assert_eq!(code, 0);

    let contents = read_output(out.path(), "Post");
    assert!(contents.contains("export interface Post {"));
    assert!(contents.contains("  id: number;"));
    assert!(contents.contains("  title: string;"));
}

#[test]
fn test_empty_array_payload_fails_without_output() {
    let rt = runtime();
    let (_server, url) = start_mock(&rt, 200, "[]");
    let out = TempDir::new().unwrap();

    let code = run_cli(&["-u", &url, "-n", "Item", "-p", out.path().to_str().unwrap()]);
    assert_eq!(code, 1);
    assert!(!out.path().join("Item.ts").exists());
}

#[test]
fn test_server_error_fails_without_output() {
    let rt = runtime();
    let (_server, url) = start_mock(&rt, 500, "oops");
    let out = TempDir::new().unwrap();

    let code = run_cli(&["-u", &url, "-n", "Item", "-p", out.path().to_str().unwrap()]);
    assert_eq!(code, 1);
    assert!(!out.path().join("Item.ts").exists());
}

#[test]
fn test_malformed_json_fails_without_output() {
    let rt = runtime();
    let (_server, url) = start_mock(&rt, 200, "<html>definitely not json</html>");
    let out = TempDir::new().unwrap();

    let code = run_cli(&["-u", &url, "-n", "Item", "-p", out.path().to_str().unwrap()]);
    assert_eq!(code, 1);
    assert!(!out.path().join("Item.ts").exists());
}

#[test]
fn test_invalid_url_flag_fails_before_any_request() {
    let out = TempDir::new().unwrap();
    let code = run_cli(&[
        "-u",
        "definitely not a url",
        "-n",
        "Item",
        "-p",
        out.path().to_str().unwrap(),
    ]);
    assert_eq!(code, 1);
    assert!(!out.path().join("Item.ts").exists());
}

#[test]
fn test_invalid_type_name_flag_fails() {
    let rt = runtime();
    let (_server, url) = start_mock(&rt, 200, r#"{"id": 1}"#);
    let out = TempDir::new().unwrap();

    let code = run_cli(&["-u", &url, "-n", "9lives", "-p", out.path().to_str().unwrap()]);
    assert_eq!(code, 1);
}

#[test]
fn test_second_run_overwrites_existing_file() {
    let rt = runtime();
    let out = TempDir::new().unwrap();
    let out_path = out.path().to_str().unwrap().to_string();

    {
        let (_server, url) = start_mock(&rt, 200, r#"{"id": 1}"#);
        assert_eq!(run_cli(&["-u", &url, "-n", "Thing", "-p", &out_path]), 0);
    }

    let (_server, url) = start_mock(&rt, 200, r#"{"id": 1, "label": "x"}"#);
    assert_eq!(run_cli(&["-u", &url, "-n", "Thing", "-p", &out_path]), 0);

    let contents = read_output(out.path(), "Thing");
    assert!(contents.contains("  label: string;"));
}

#[test]
fn test_missing_path_directories_are_created() {
    let rt = runtime();
    let (_server, url) = start_mock(&rt, 200, r#"{"id": 1}"#);
    let out = TempDir::new().unwrap();
    let nested = out.path().join("generated").join("types");

    let code = run_cli(&["-u", &url, "-n", "Deep", "-p", nested.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(nested.join("Deep.ts").exists());
}
