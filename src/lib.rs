//! devserve - a small static file server for previewing a site directory.
//!
//! Binds a loopback TCP endpoint and maps URL paths onto a root directory:
//! `/` serves the configured index file, everything else is joined onto the
//! root and read in full, with the Content-Type derived from the file
//! extension. Any resolution or read failure collapses to a single 404
//! outcome echoing the requested path.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
