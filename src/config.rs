use std::env;
use std::net::SocketAddr;
use std::path::Path;

use serde::Serialize;

use crate::error::ServerError;
use crate::sink::SinkKind;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

pub const HOST_VAR: &str = "PARAMLOG_HOST";
pub const PORT_VAR: &str = "PARAMLOG_PORT";
pub const SINK_VAR: &str = "PARAMLOG_SINK";
pub const MASK_PASSWORD_VAR: &str = "PARAMLOG_MASK_PASSWORD";

/// Resolved server settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub sink: SinkKind,
    /// Write `user_pw` as asterisks instead of clear text.
    pub mask_password: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            sink: SinkKind::default(),
            mask_password: false,
        }
    }
}

impl Settings {
    /// Settings from the environment, falling back to defaults for unset
    /// variables.
    pub fn from_env() -> Result<Self, ServerError> {
        let host = get_host();
        let port = match env::var(PORT_VAR) {
            Ok(raw) if !raw.trim().is_empty() => raw.trim().parse::<u16>().map_err(|_| ServerError::InvalidSetting {
                name: PORT_VAR,
                value: raw,
            })?,
            _ => DEFAULT_PORT,
        };
        let sink = match env::var(SINK_VAR) {
            Ok(raw) if !raw.trim().is_empty() => raw.parse::<SinkKind>().map_err(|_| ServerError::InvalidSetting {
                name: SINK_VAR,
                value: raw,
            })?,
            _ => SinkKind::default(),
        };
        let mask_password = match env::var(MASK_PASSWORD_VAR) {
            Ok(raw) if !raw.trim().is_empty() => parse_flag(&raw).ok_or(ServerError::InvalidSetting {
                name: MASK_PASSWORD_VAR,
                value: raw,
            })?,
            _ => false,
        };

        Ok(Self {
            host,
            port,
            sink,
            mask_password,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|source| ServerError::InvalidAddress { addr, source })
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_host() -> String {
    let raw = env::var(HOST_VAR).unwrap_or_default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_HOST.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("on"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("Off"), Some(false));
        assert_eq!(parse_flag(""), None);
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_socket_addr() {
        let settings = Settings::default();
        assert_eq!(settings.socket_addr().unwrap(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());

        let bad = Settings {
            host: "not a host".into(),
            ..Settings::default()
        };
        assert!(matches!(bad.socket_addr(), Err(ServerError::InvalidAddress { .. })));
    }
}
