//! Logger module
//!
//! Println-based logging helpers: startup banner, access log lines in
//! common-log-format flavor, warnings and errors.

use chrono::Local;
use std::net::SocketAddr;

use crate::config::Config;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Static file server started");
    println!("Listening on: http://{addr}");
    println!("Serving root: {}", config.site.root);
    println!("Index file: {}", config.site.index_file);
    println!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

/// Access log line: `[time] "METHOD /path" status bytes`
pub fn log_access(method: &str, path: &str, status: u16, body_bytes: usize) {
    println!(
        "[{}] \"{method} {path}\" {status} {body_bytes}",
        Local::now().format("%d/%b/%Y:%H:%M:%S %z")
    );
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_shutdown() {
    println!("\n[Shutdown] Server stopping, listener closed");
}
