//! HTTP protocol layer module
//!
//! Content-type mapping and response builders, decoupled from the request
//! pipeline.

pub mod mime;
pub mod response;

pub use self::response::{build_404_response, build_file_response};
