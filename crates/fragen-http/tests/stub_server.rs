//! Sends real requests to a one-shot HTTP server on localhost.

use std::time::Duration;

use fragen_core::{
    Environment, EnvValue, EnvironmentStore, Header, HttpMethod, RenderedRequest, RequestSender,
    RequestTemplate, TransportError,
};
use fragen_http::{HttpClientConfig, ReqwestSender};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Raw request text as received by the stub.
struct Captured {
    head: String,
    body: String,
}

/// Serve exactly one request with `status` and `body`, reporting what arrived.
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0_u8; 1024];

        let (head, content_length, header_end) = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..pos]).into_owned();
                let content_length = head
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                break (head, content_length, pos + 4);
            }
        };

        while buf.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let received = String::from_utf8_lossy(&buf[header_end..]).into_owned();

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        tx.send(Captured { head, body: received }).ok();
    });

    (format!("http://{addr}"), rx)
}

fn fast_config() -> HttpClientConfig {
    HttpClientConfig::new()
        .with_timeout(Duration::from_secs(5))
        .with_max_retries(0)
}

#[tokio::test]
async fn sends_rendered_create_franchise_request() {
    let (base_url, seen) = serve_once(
        "201 Created",
        r#"{"code":"201","data":{"id":"abc123","name":"fra42"}}"#,
    )
    .await;

    let mut env = Environment::new("local");
    env.set("base_url", EnvValue::from(base_url));
    env.set("franchise_name", EnvValue::from("fra42"));
    let request = RequestTemplate::create_franchise().render(&env, true).unwrap();

    let sender = ReqwestSender::new(&fast_config()).unwrap();
    let response = sender.send(&request).await.unwrap();

    assert_eq!(response.status, 201);
    assert!(response.is_success());
    assert_eq!(response.json().unwrap()["data"]["id"], "abc123");

    let captured = seen.await.unwrap();
    assert!(captured.head.starts_with("POST /api/franchises HTTP/1.1"));
    assert!(captured.head.to_ascii_lowercase().contains("content-type: application/json"));
    assert!(captured.head.to_ascii_lowercase().contains("user-agent: fragen/"));
    let sent: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(sent["name"], "fra42");
}

#[tokio::test]
async fn error_statuses_are_returned_not_raised() {
    let (base_url, _seen) =
        serve_once("400 Bad Request", r#"{"code":"400","errors":["Name is required"]}"#).await;

    let request = RenderedRequest {
        method: HttpMethod::Post,
        url: format!("{base_url}/api/franchises"),
        headers: vec![Header::new("Content-Type", "application/json")],
        body: Some(r#"{"name":""}"#.to_string()),
        unresolved: Vec::new(),
    };

    let response = ReqwestSender::new(&fast_config())
        .unwrap()
        .send(&request)
        .await
        .unwrap();

    assert_eq!(response.status, 400);
    assert!(!response.is_success());
    assert!(response.body.contains("Name is required"));
}

#[tokio::test]
async fn unresponsive_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    let sender = ReqwestSender::new(
        &HttpClientConfig::new()
            .with_timeout(Duration::from_millis(200))
            .with_max_retries(0),
    )
    .unwrap();
    let request = RenderedRequest {
        method: HttpMethod::Get,
        url: format!("http://{addr}/slow"),
        headers: Vec::new(),
        body: None,
        unresolved: Vec::new(),
    };

    let err = sender.send(&request).await.unwrap_err();
    assert!(matches!(err, TransportError::Timeout(_)), "got {err:?}");
}

#[tokio::test]
async fn refused_connection_is_network_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };

    let sender = ReqwestSender::new(
        &HttpClientConfig::new()
            .with_max_retries(1)
            .with_retry_delay(Duration::from_millis(1)),
    )
    .unwrap();
    let request = RenderedRequest {
        method: HttpMethod::Get,
        url: format!("http://{addr}/"),
        headers: Vec::new(),
        body: None,
        unresolved: Vec::new(),
    };

    let err = sender.send(&request).await.unwrap_err();
    assert!(matches!(err, TransportError::Network(_)), "got {err:?}");
}
