//! End-to-end tests for the reqwest adapter against a local listener.
//!
//! Each test serves one canned HTTP response so the adapter's status and
//! decode handling runs over a real socket.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use rstest::rstest;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use user_directory::domain::ports::{UserCollectionSource, UserCollectionSourceError};
use user_directory::domain::{CollectionLoader, CollectionState, FetchOutcome, UserId};
use user_directory::outbound::http::HttpUserCollectionSource;

const USERS_JSON: &str = r#"[
    {"id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz",
     "address": {"street": "Kulas Light", "suite": "Apt. 556", "city": "Gwenborough"},
     "phone": "1-770-736-8031 x56442", "website": "hildegard.org",
     "company": {"name": "Romaguera-Crona"}},
    {"id": 2, "name": "Ervin Howell", "username": "Antonette", "email": "Shanna@melissa.tv",
     "address": {"street": "Victor Plains", "suite": "Suite 879", "city": "Wisokyburgh"},
     "phone": "010-692-6593 x09125", "website": "anastasia.net",
     "company": {"name": "Deckow-Crist"}}
]"#;

fn http_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    )
}

/// Serve `response` to the first connection and return the endpoint URL.
async fn serve_once(response: String) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept connection");
        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = socket.read(&mut buf).await.expect("read request");
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buf[..read]);
        }
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        socket.shutdown().await.expect("shutdown socket");
    });

    Url::parse(&format!("http://{addr}/users")).expect("endpoint URL")
}

fn source_for(endpoint: Url) -> HttpUserCollectionSource {
    HttpUserCollectionSource::new(endpoint, Duration::from_secs(5)).expect("build client")
}

#[tokio::test]
async fn decodes_a_successful_payload_in_order() {
    let endpoint = serve_once(http_response("200 OK", USERS_JSON)).await;

    let records = source_for(endpoint)
        .fetch_collection()
        .await
        .expect("fetch should succeed");

    let ids: Vec<_> = records.iter().map(|record| record.id()).collect();
    assert_eq!(ids, vec![UserId::new(1), UserId::new(2)]);
    assert_eq!(records[1].username(), "Antonette");
    assert_eq!(records[1].address().suite, "Suite 879");
}

#[tokio::test]
async fn server_error_maps_to_status_error() {
    let endpoint = serve_once(http_response(
        "500 Internal Server Error",
        r#"{"error": "backend unavailable"}"#,
    ))
    .await;

    let error = source_for(endpoint)
        .fetch_collection()
        .await
        .expect_err("fetch should fail");

    assert!(
        matches!(error, UserCollectionSourceError::Status { status: 500, .. }),
        "500 should map to Status, got {error:?}",
    );
}

#[tokio::test]
async fn malformed_json_maps_to_decode_error() {
    let endpoint = serve_once(http_response("200 OK", "[{\"id\": 1,")).await;

    let error = source_for(endpoint)
        .fetch_collection()
        .await
        .expect_err("fetch should fail");

    assert!(
        matches!(error, UserCollectionSourceError::Decode { .. }),
        "truncated JSON should map to Decode, got {error:?}",
    );
}

#[tokio::test]
async fn refused_connection_maps_to_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    let endpoint = Url::parse(&format!("http://{addr}/users")).expect("endpoint URL");

    let error = source_for(endpoint)
        .fetch_collection()
        .await
        .expect_err("fetch should fail");

    assert!(
        matches!(error, UserCollectionSourceError::Transport { .. }),
        "refused connection should map to Transport, got {error:?}",
    );
}

#[rstest]
#[case::server_error(http_response("500 Internal Server Error", ""))]
#[case::malformed(http_response("200 OK", "not json"))]
#[case::wrong_shape(http_response("200 OK", r#"{"users": []}"#))]
#[tokio::test]
async fn loader_fails_uniformly_for_unusable_responses(#[case] response: String) {
    let endpoint = serve_once(response).await;
    let loader = CollectionLoader::new(Arc::new(source_for(endpoint)));

    assert_eq!(loader.start().await, FetchOutcome::Failed);
    assert_eq!(loader.current_state(), CollectionState::Failed);
}

#[tokio::test]
async fn loader_holds_records_served_over_http() {
    let endpoint = serve_once(http_response("200 OK", USERS_JSON)).await;
    let loader = CollectionLoader::new(Arc::new(source_for(endpoint)));

    assert_eq!(loader.start().await, FetchOutcome::Loaded { count: 2 });
    let record = loader.record(UserId::new(1)).expect("record 1 loaded");
    assert_eq!(record.company().name, "Romaguera-Crona");
}
