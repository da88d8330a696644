//! Tests for the HTTP transport against a local one-shot server.

use catalogue_client::{CatalogueError, CatalogueSettings, HttpTransport, Operation, Transport};
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Answers a single request with `status` and `body`.
///
/// The returned handle resolves to the raw request the server read.
async fn serve_once(status: &str, body: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local address");
    let response = format!(
        "HTTP/1.1 {status}\r\n\
         content-type: application/json\r\n\
         content-length: {}\r\n\
         connection: close\r\n\r\n{body}",
        body.len()
    );
    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut stream).await;
        stream.write_all(response.as_bytes()).await.expect("write");
        stream.shutdown().await.expect("shutdown");
        request
    });
    (format!("http://{addr}/graphql"), server)
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if request_complete(&buf) {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Headers up to the blank line, then `content-length` bytes of body.
fn request_complete(buf: &[u8]) -> bool {
    let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
    let length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    buf.len() >= end + 4 + length
}

fn transport(endpoint: String) -> HttpTransport {
    let settings = CatalogueSettings {
        endpoint,
        ..CatalogueSettings::default()
    };
    HttpTransport::new(&settings).expect("transport")
}

async fn keywords(transport: &HttpTransport) -> catalogue_client::Result<Value> {
    let document = Operation::Keywords.document();
    transport.execute(document, None).await
}

#[tokio::test]
async fn success_returns_data_and_posts_graphql_body() {
    let body = json!({"data": {"Keywords": []}}).to_string();
    let (endpoint, server) = serve_once("200 OK", body).await;

    let data = keywords(&transport(endpoint)).await.expect("keywords");
    let request = server.await.expect("server task");

    assert_eq!(data, json!({"Keywords": []}));
    assert!(request.starts_with("POST /graphql HTTP/1.1"));
    let lowered = request.to_ascii_lowercase();
    assert!(lowered.contains("user-agent: catalogue-client/"));
    let (_, payload) = request.split_once("\r\n\r\n").expect("request body");
    let payload: Value = serde_json::from_str(payload).expect("json body");
    assert_eq!(payload["operationName"], "Keywords");
    assert!(payload.get("variables").is_none());
}

#[tokio::test]
async fn server_error_is_retryable() {
    let (endpoint, _server) = serve_once("503 Service Unavailable", "down".to_string()).await;

    let err = keywords(&transport(endpoint)).await.unwrap_err();

    assert!(matches!(err, CatalogueError::Http { status: 503, ref body } if body == "down"));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn long_error_body_is_truncated() {
    let (endpoint, _server) = serve_once("400 Bad Request", "x".repeat(2048)).await;

    let err = keywords(&transport(endpoint)).await.unwrap_err();

    let CatalogueError::Http { status, body } = &err else {
        panic!("expected an HTTP error, got {err:?}");
    };
    assert_eq!(*status, 400);
    assert_eq!(body.chars().count(), 500);
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn graphql_errors_win_over_success_status() {
    let body = json!({"data": null, "errors": [{"message": "boom"}]}).to_string();
    let (endpoint, _server) = serve_once("200 OK", body).await;

    let err = keywords(&transport(endpoint)).await.unwrap_err();

    assert!(matches!(err, CatalogueError::GraphQl(ref messages) if messages == &["boom"]));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn null_data_is_missing_data() {
    let body = json!({"data": null}).to_string();
    let (endpoint, _server) = serve_once("200 OK", body).await;

    let err = keywords(&transport(endpoint)).await.unwrap_err();

    assert!(matches!(err, CatalogueError::MissingData));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let (endpoint, _server) = serve_once("200 OK", "<html>oops</html>".to_string()).await;

    let err = keywords(&transport(endpoint)).await.unwrap_err();

    assert!(matches!(err, CatalogueError::Decode(_)));
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let endpoint = format!("http://{}/graphql", listener.local_addr().expect("address"));
    drop(listener);

    let err = keywords(&transport(endpoint)).await.unwrap_err();

    assert!(matches!(err, CatalogueError::Transport(_)));
    assert!(err.is_retryable());
}
