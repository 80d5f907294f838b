//! Server module
//!
//! Listener setup, the accept loop, and shutdown signal handling.

pub mod connection;
pub mod listener;
pub mod signal;

pub use self::listener::bind_listener;

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::config::AppState;
use crate::logger;
use self::connection::accept_connection;

/// Accept loop.
///
/// Runs until `shutdown` is notified. Accept errors are logged and the
/// loop keeps going; requests in flight finish in their own tasks. The
/// listener is dropped on exit, releasing the socket.
pub async fn run(listener: TcpListener, state: Arc<AppState>, shutdown: Arc<Notify>) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => {
                logger::log_shutdown();
                break;
            }
        }
    }

    drop(listener);
}
