//! HTTP response building module
//!
//! Exactly two externally observable outcomes exist: 200 with file bytes,
//! and 404 with a plain-text body echoing the requested path.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Body prefix of the 404 response; the requested path follows it.
pub const NOT_FOUND_PREFIX: &str = "404 Not Found: ";

/// Build 200 OK response carrying the full file contents
pub fn build_file_response(data: Vec<u8>, content_type: &str) -> Response<Full<Bytes>> {
    let content_length = data.len();
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(data)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response echoing the decoded request path
pub fn build_404_response(path: &str) -> Response<Full<Bytes>> {
    let body = format!("{NOT_FOUND_PREFIX}{path}");
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
