//! Server configuration.
//!
//! Loaded once from environment variables at process start. There is no reload and no file layer.

use std::env;

use serde::Serialize;

/// Environment variable holding the root directory for stored schemes.
pub const FS_ROOT_PATH_VAR: &str = "FS_ROOT_PATH";
/// Environment variable holding the HTTP port.
pub const SERVER_PORT_VAR: &str = "SERVER_PORT";

/// Default value for [`FS_ROOT_PATH_VAR`].
pub const DEFAULT_FS_ROOT_PATH: &str = "/opt/schemio/";
/// Default value for [`SERVER_PORT_VAR`].
pub const DEFAULT_SERVER_PORT: u16 = 4010;

/// Filesystem storage settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FsConfig {
    /// Directory under which schemes are stored.
    pub root_path: String,
}

/// Server configuration read from the process environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Filesystem storage settings.
    pub fs: FsConfig,
    /// Port the HTTP server listens on.
    pub server_port: u16,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// Environment variables:
    /// - `FS_ROOT_PATH`: storage root (default: `/opt/schemio/`)
    /// - `SERVER_PORT`: listen port (default: `4010`)
    pub fn load() -> Self {
        Self::from_lookup(env_lookup)
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let root_path =
            lookup(FS_ROOT_PATH_VAR).unwrap_or_else(|| DEFAULT_FS_ROOT_PATH.to_string());

        let server_port = match lookup(SERVER_PORT_VAR) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    value = %raw,
                    default = DEFAULT_SERVER_PORT,
                    "SERVER_PORT is not a port number, using default"
                );
                DEFAULT_SERVER_PORT
            }),
            None => DEFAULT_SERVER_PORT,
        };

        Self {
            fs: FsConfig { root_path },
            server_port,
        }
    }
}

/// Read a variable from the process environment. Values that are not valid UTF-8 are converted
/// lossily rather than treated as unset.
fn env_lookup(name: &str) -> Option<String> {
    env::var_os(name).map(|raw| raw.to_string_lossy().into_owned())
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
