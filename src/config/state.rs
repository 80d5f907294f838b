// Shared application state
// Built once at startup, read-only across connection tasks

use std::io;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

use super::Config;

/// Per-process state shared by every connection task.
pub struct AppState {
    pub config: Config,
    /// Canonicalized root directory all request paths resolve against.
    pub root: PathBuf,
    /// Cached access-log flag for lock-free reads on the request path.
    pub cached_access_log: AtomicBool,
}

impl AppState {
    /// Build state from configuration.
    ///
    /// Fails if the configured root directory does not exist: serving from
    /// a missing root is a startup error, not a per-request 404.
    pub fn new(config: &Config) -> io::Result<Self> {
        let root = PathBuf::from(&config.site.root).canonicalize()?;
        Ok(Self {
            config: config.clone(),
            root,
            cached_access_log: AtomicBool::new(config.logging.access_log),
        })
    }
}
