// Signal handling module
//
// SIGTERM and SIGINT trigger graceful shutdown of the accept loop.

use std::sync::Arc;
use tokio::sync::Notify;

/// Spawn the shutdown signal watcher (Unix).
///
/// Notifies `shutdown` once on SIGTERM or SIGINT; the accept loop exits
/// and drops the listener.
#[cfg(unix)]
pub fn start_signal_handler(shutdown: Arc<Notify>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                crate::logger::log_error(&format!("Failed to register SIGTERM handler: {e}"));
                return;
            }
        };
        let mut sigint = match signal(SignalKind::interrupt()) {
            Ok(s) => s,
            Err(e) => {
                crate::logger::log_error(&format!("Failed to register SIGINT handler: {e}"));
                return;
            }
        };

        tokio::select! {
            _ = sigterm.recv() => println!("\n[Signal] SIGTERM received, shutting down"),
            _ = sigint.recv() => println!("\n[Signal] SIGINT received, shutting down"),
        }
        shutdown.notify_waiters();
    });
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(shutdown: Arc<Notify>) {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            println!("\n[Signal] Ctrl+C received, shutting down");
            shutdown.notify_waiters();
        }
    });
}
