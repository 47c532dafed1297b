//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use schools_gateway::http::middleware::{AccessLogEntry, AccessLogSink, SinkError};
use schools_gateway::{build_router, DomainRoutes, GatewayConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tower::ServiceExt;

pub const ORIGIN: &str = "https://wad2-proj.vercel.app";

/// Read until the end of the request head so the client never sees a reset.
async fn drain_request_head(socket: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
}

fn status_line(status: u16) -> &'static str {
    match status {
        200 => "200 OK",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        502 => "502 Bad Gateway",
        503 => "503 Service Unavailable",
        _ => "200 OK",
    }
}

/// Start a programmable upstream on an ephemeral port. `f` produces the
/// status and body of each response.
pub async fn start_programmable_upstream<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        drain_request_head(&mut socket).await;
                        let (status, body) = f().await;
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_line(status),
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Upstream that always answers `status` with `body`.
pub async fn start_fixed_upstream(status: u16, body: &'static str) -> SocketAddr {
    start_programmable_upstream(move || async move { (status, body.to_string()) }).await
}

/// Upstream that accepts connections and never answers.
pub async fn start_hanging_upstream() -> SocketAddr {
    start_programmable_upstream(std::future::pending::<(u16, String)>).await
}

/// An address nothing listens on.
pub async fn refused_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Default config with the upstream pointed at `addr`.
pub fn config_for_upstream(addr: SocketAddr) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.upstream.base_url = format!("http://{addr}/api/action/datastore_search");
    config
}

pub fn router(config: &GatewayConfig) -> Router {
    router_with(config, DomainRoutes::default(), Arc::new(RecordingSink::default()))
}

pub fn router_with(
    config: &GatewayConfig,
    domain: DomainRoutes,
    sink: Arc<dyn AccessLogSink>,
) -> Router {
    build_router(config, domain, sink).expect("pipeline should build")
}

pub async fn send(router: Router, request: Request<Body>) -> Response<Body> {
    router.oneshot(request).await.expect("router is infallible")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("origin", ORIGIN)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body")
        .to_vec()
}

pub fn assert_cors(response: &Response<Body>) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], ORIGIN);
    assert_eq!(headers["access-control-allow-methods"], "GET,POST");
    assert_eq!(headers["access-control-allow-headers"], "content-type");
}

/// Sink that keeps every entry in memory.
#[derive(Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<AccessLogEntry>>,
}

impl RecordingSink {
    pub fn entries(&self) -> Vec<AccessLogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl AccessLogSink for RecordingSink {
    fn record(&self, entry: &AccessLogEntry) -> Result<(), SinkError> {
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

/// Sink that always reports failure.
pub struct FailingSink;

impl AccessLogSink for FailingSink {
    fn record(&self, _entry: &AccessLogEntry) -> Result<(), SinkError> {
        Err(SinkError::Unavailable("disk full".into()))
    }
}

/// Sink that panics on every entry.
pub struct PanickingSink;

impl AccessLogSink for PanickingSink {
    fn record(&self, _entry: &AccessLogEntry) -> Result<(), SinkError> {
        panic!("log sink exploded")
    }
}

pub const SHORT_WAIT: Duration = Duration::from_millis(200);
