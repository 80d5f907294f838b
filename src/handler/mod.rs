//! Request handling module
//!
//! Entry point for HTTP request processing: decode the path, load the
//! file, build the response.

pub mod static_files;

use std::convert::Infallible;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use percent_encoding::percent_decode_str;

use crate::config::AppState;
use crate::http;
use crate::logger;

/// Main entry point for HTTP request handling.
///
/// Every method gets retrieval semantics; the design does not special-case
/// the HTTP method. The path is percent-decoded (`Uri::path()` already
/// excludes the query string), `/` maps to the configured index file, and
/// any load failure collapses to a 404 echoing the decoded path.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let decoded_path = percent_decode_str(req.uri().path())
        .decode_utf8_lossy()
        .into_owned();

    let access_log = state.cached_access_log.load(Ordering::Relaxed);

    let response = match static_files::load_file(&state, &decoded_path).await {
        Some((content, content_type)) => {
            if access_log {
                logger::log_access(method.as_str(), &decoded_path, 200, content.len());
            }
            http::build_file_response(content, content_type)
        }
        None => {
            if access_log {
                let body_bytes = http::response::NOT_FOUND_PREFIX.len() + decoded_path.len();
                logger::log_access(method.as_str(), &decoded_path, 404, body_bytes);
            }
            http::build_404_response(&decoded_path)
        }
    };

    Ok(response)
}
