//! Static file loading module
//!
//! Resolves decoded request paths against the site root and reads file
//! contents in full. No streaming, no partial reads.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::config::AppState;
use crate::http::mime;
use crate::logger;

/// Join a decoded request path onto the root directory, substituting the
/// index file for the root path `/`.
pub fn resolve_path(root: &Path, index_file: &str, decoded_path: &str) -> PathBuf {
    let relative = if decoded_path == "/" {
        index_file
    } else {
        // The leading slash would otherwise replace the root in `join`
        decoded_path.trim_start_matches('/')
    };
    root.join(relative)
}

/// Load the file for a decoded request path.
///
/// Returns the file bytes and content type, or `None` for every failure
/// kind: missing file, permission error, directory target, or a path that
/// escapes the root. Callers map `None` to the single 404 outcome; the
/// distinction between failure kinds is deliberately not surfaced.
pub async fn load_file(state: &AppState, decoded_path: &str) -> Option<(Vec<u8>, &'static str)> {
    let candidate = resolve_path(&state.root, &state.config.site.index_file, decoded_path);

    // `..` segments that escape the root are rejected: canonicalize the
    // candidate and require it to stay under the canonical root.
    let canonical = candidate.canonicalize().ok()?;
    if !canonical.starts_with(&state.root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            decoded_path,
            canonical.display()
        ));
        return None;
    }

    let content = fs::read(&canonical).await.ok()?;
    let content_type = mime::content_type_for(canonical.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}
