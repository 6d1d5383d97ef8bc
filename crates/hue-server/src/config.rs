use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Environment variable through which a host assigns the listening port.
pub const PORT_ENV: &str = "PORT";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// JSON seed file. `None` uses the seed embedded in `hue-store`.
    pub seed_path: Option<PathBuf>,
    /// Serve GraphiQL on `GET /graphql`.
    pub playground: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 4000)),
            seed_path: None,
            playground: true,
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document. Missing keys take their default values.
    pub fn from_toml(source: &str) -> ServerResult<Self> {
        toml::from_str(source).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&source)?;
        tracing::debug!(path = %path.display(), "loaded server config");
        Ok(config)
    }

    /// Replace the port of `bind_addr` with `port`, if given.
    pub fn with_port(mut self, port: Option<&str>) -> ServerResult<Self> {
        if let Some(raw) = port {
            let port: u16 = raw
                .trim()
                .parse()
                .map_err(|_| ServerError::Config(format!("invalid port: {raw:?}")))?;
            self.bind_addr.set_port(port);
        }
        Ok(self)
    }
}
