//! End-to-end serving tests over a real TCP connection.
//!
//! Each test binds a server on an ephemeral loopback port against a
//! temporary site root, then speaks plain HTTP/1.1 over a raw socket.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::Notify;

use devserve::config::{AppState, Config, LoggingConfig, ServerConfig, SiteConfig};
use devserve::server;

fn test_config(root: &Path) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            workers: None,
        },
        site: SiteConfig {
            root: root.to_string_lossy().into_owned(),
            index_file: "index.html".to_string(),
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            access_log: false,
        },
    }
}

/// Bind on an ephemeral port, spawn the accept loop, return the address.
fn spawn_server(root: &Path) -> SocketAddr {
    let cfg = test_config(root);
    let addr = cfg.socket_addr().expect("addr");
    let listener = server::bind_listener(addr).expect("bind");
    let local_addr = listener.local_addr().expect("local addr");
    let state = Arc::new(AppState::new(&cfg).expect("state"));
    tokio::spawn(server::run(listener, state, Arc::new(Notify::new())));
    local_addr
}

struct RawResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl RawResponse {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

async fn request(addr: SocketAddr, method: &str, target: &str) -> RawResponse {
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    let raw_request =
        format!("{method} {target} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream
        .write_all(raw_request.as_bytes())
        .await
        .expect("write request");

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.expect("read response");
    parse_response(&raw)
}

async fn get(addr: SocketAddr, target: &str) -> RawResponse {
    request(addr, "GET", target).await
}

fn parse_response(raw: &[u8]) -> RawResponse {
    let split = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("header terminator");
    let head = std::str::from_utf8(&raw[..split]).expect("ascii head");
    let body = raw[split + 4..].to_vec();

    let mut lines = head.split("\r\n");
    let status_line = lines.next().expect("status line");
    let status: u16 = status_line
        .split(' ')
        .nth(1)
        .expect("status code")
        .parse()
        .expect("numeric status");
    let headers = lines
        .map(|line| {
            let (name, value) = line.split_once(": ").expect("header line");
            (name.to_ascii_lowercase(), value.to_string())
        })
        .collect();

    RawResponse {
        status,
        headers,
        body,
    }
}

#[tokio::test]
async fn test_root_serves_index_html() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("index.html"), "<h1>hello</h1>").expect("write");
    let addr = spawn_server(dir.path());

    let root = get(addr, "/").await;
    assert_eq!(root.status, 200);
    assert_eq!(root.header("content-type"), Some("text/html; charset=utf-8"));
    assert_eq!(root.body, b"<h1>hello</h1>");

    // `/` and `/index.html` are the same response
    let index = get(addr, "/index.html").await;
    assert_eq!(index.status, root.status);
    assert_eq!(index.header("content-type"), root.header("content-type"));
    assert_eq!(index.body, root.body);
}

#[tokio::test]
async fn test_mapped_content_types() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cases = [
        ("page.html", "text/html; charset=utf-8"),
        ("style.css", "text/css"),
        ("app.js", "application/javascript"),
        ("logo.png", "image/png"),
        ("photo.jpg", "image/jpeg"),
        ("photo2.jpeg", "image/jpeg"),
        ("icon.svg", "image/svg+xml"),
        ("favicon.ico", "image/x-icon"),
        ("font.ttf", "font/ttf"),
        ("font.woff", "font/woff"),
        ("font.woff2", "font/woff2"),
    ];
    for (name, _) in &cases {
        fs::write(dir.path().join(name), name.as_bytes()).expect("write");
    }
    let addr = spawn_server(dir.path());

    for (name, content_type) in &cases {
        let resp = get(addr, &format!("/{name}")).await;
        assert_eq!(resp.status, 200, "{name}");
        assert_eq!(resp.header("content-type"), Some(*content_type), "{name}");
        assert_eq!(resp.body, name.as_bytes(), "{name}");
    }
}

#[tokio::test]
async fn test_unknown_extension_is_octet_stream() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("data.xyz"), "raw bytes").expect("write");
    let addr = spawn_server(dir.path());

    let resp = get(addr, "/data.xyz").await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.header("content-type"), Some("application/octet-stream"));
}

#[tokio::test]
async fn test_missing_file_is_404_with_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let addr = spawn_server(dir.path());

    let resp = get(addr, "/missing.txt").await;
    assert_eq!(resp.status, 404);
    assert_eq!(resp.header("content-type"), Some("text/plain"));
    assert_eq!(resp.body, b"404 Not Found: /missing.txt");
}

#[tokio::test]
async fn test_query_string_is_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("style.css"), "body {}").expect("write");
    let addr = spawn_server(dir.path());

    let plain = get(addr, "/style.css").await;
    let with_query = get(addr, "/style.css?v=2").await;
    assert_eq!(with_query.status, 200);
    assert_eq!(with_query.header("content-type"), plain.header("content-type"));
    assert_eq!(with_query.body, plain.body);
}

#[tokio::test]
async fn test_404_path_is_decoded_and_query_stripped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let addr = spawn_server(dir.path());

    let resp = get(addr, "/no%20file.txt?x=1").await;
    assert_eq!(resp.status, 404);
    assert_eq!(resp.body, b"404 Not Found: /no file.txt");
}

#[tokio::test]
async fn test_percent_encoded_path_resolves() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("hello world.html"), "<p>hi</p>").expect("write");
    let addr = spawn_server(dir.path());

    let resp = get(addr, "/hello%20world.html").await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.header("content-type"), Some("text/html; charset=utf-8"));
    assert_eq!(resp.body, b"<p>hi</p>");
}

#[tokio::test]
async fn test_method_is_not_special_cased() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("index.html"), "<h1>hello</h1>").expect("write");
    let addr = spawn_server(dir.path());

    let resp = request(addr, "POST", "/index.html").await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, b"<h1>hello</h1>");
}

#[tokio::test]
async fn test_concurrent_requests_are_isolated() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("a.css"), "a { color: red }").expect("write");
    fs::write(dir.path().join("b.js"), "let b = 2;").expect("write");
    let addr = spawn_server(dir.path());

    let (a1, b1, a2, b2) = tokio::join!(
        get(addr, "/a.css"),
        get(addr, "/b.js"),
        get(addr, "/a.css"),
        get(addr, "/b.js"),
    );

    for a in [&a1, &a2] {
        assert_eq!(a.status, 200);
        assert_eq!(a.header("content-type"), Some("text/css"));
        assert_eq!(a.body, b"a { color: red }");
    }
    for b in [&b1, &b2] {
        assert_eq!(b.status, 200);
        assert_eq!(b.header("content-type"), Some("application/javascript"));
        assert_eq!(b.body, b"let b = 2;");
    }
}
