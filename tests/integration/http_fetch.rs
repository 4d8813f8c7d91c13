//! Conditional download against a local HTTP server

use super::test_utils::serve;
use buildutil::digest::hash_bytes;
use buildutil::{fetch_if_needed, BuildError, FetchOutcome, HttpTransport};
use std::fs;
use std::net::TcpListener;
use tempfile::TempDir;

const BODY: &[u8] = b"tileset bytes";

/// Loopback requests must not be routed through an ambient proxy.
fn local_transport() -> HttpTransport {
    HttpTransport::with_client(
        reqwest::blocking::Client::builder()
            .no_proxy()
            .build()
            .unwrap(),
    )
}

#[test]
fn test_discovery_download_reports_hash() {
    let server = serve(200, BODY);
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("tileset.png");
    let transport = local_transport();

    let outcome = fetch_if_needed(&transport, &server.url("tileset.png"), &target, None).unwrap();

    assert_eq!(
        outcome,
        FetchOutcome::Discovered {
            hash: hash_bytes(BODY)
        }
    );
    assert_eq!(fs::read(&target).unwrap(), BODY);
    assert_eq!(server.hits(), 1);
}

#[test]
fn test_verified_download_overwrites_stale_file() {
    let server = serve(200, BODY);
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("tileset.png");
    fs::write(&target, b"stale").unwrap();
    let transport = local_transport();

    let expected = hash_bytes(BODY);
    let outcome =
        fetch_if_needed(&transport, &server.url("tileset.png"), &target, Some(&expected)).unwrap();

    assert_eq!(outcome, FetchOutcome::Verified);
    assert_eq!(fs::read(&target).unwrap(), BODY);
}

#[test]
fn test_up_to_date_file_makes_no_request() {
    let server = serve(200, BODY);
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("tileset.png");
    fs::write(&target, BODY).unwrap();
    let transport = local_transport();

    let expected = hash_bytes(BODY);
    for _ in 0..3 {
        let outcome =
            fetch_if_needed(&transport, &server.url("tileset.png"), &target, Some(&expected))
                .unwrap();
        assert_eq!(outcome, FetchOutcome::AlreadyPresent);
    }
    assert_eq!(server.hits(), 0);
}

#[test]
fn test_mismatched_download_is_removed() {
    let server = serve(200, BODY);
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("tileset.png");
    let transport = local_transport();

    let expected = hash_bytes(b"the real tileset");
    let outcome =
        fetch_if_needed(&transport, &server.url("tileset.png"), &target, Some(&expected)).unwrap();

    assert!(!outcome.succeeded());
    assert!(!target.exists());
    assert_eq!(server.hits(), 1);
}

#[test]
fn test_http_error_status_propagates() {
    let server = serve(404, b"not here");
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("tileset.png");
    let transport = local_transport();

    let err = fetch_if_needed(&transport, &server.url("tileset.png"), &target, None).unwrap_err();

    match err {
        BuildError::HttpError(e) => assert_eq!(e.status().map(|s| s.as_u16()), Some(404)),
        other => panic!("expected HTTP error, got {:?}", other),
    }
    assert!(!target.exists());
}

#[test]
fn test_connection_failure_propagates() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("tileset.png");
    let transport = local_transport();

    let url = format!("http://127.0.0.1:{}/tileset.png", port);
    let err = fetch_if_needed(&transport, &url, &target, None).unwrap_err();

    assert!(matches!(err, BuildError::HttpError(_)));
    assert!(!target.exists());
}
