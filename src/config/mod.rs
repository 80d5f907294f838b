//! Configuration module
//!
//! Loads settings from an optional `config.toml` and `DEVSERVE_*`
//! environment variables, with defaults for every key.

mod state;
mod types;

pub use self::state::AppState;
pub use self::types::{Config, LoggingConfig, ServerConfig, SiteConfig};

use std::net::SocketAddr;

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("DEVSERVE"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("site.root", ".")?
            .set_default("site.index_file", "index.html")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
