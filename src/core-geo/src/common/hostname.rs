//! Listen address of the webserver.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::num::ParseIntError;

use crate::common::config::optional_var;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Address to bind from `HOST` and `PORT`.
///
/// Unset or blank variables fall back to `127.0.0.1:3000`.
pub fn get_api_base_url() -> Result<SocketAddr, HostPortError> {
    let host = optional_var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = match optional_var("PORT") {
        Some(raw) => raw
            .parse::<u16>()
            .map_err(|source| HostPortError::InvalidPort { value: raw.clone(), source })?,
        None => DEFAULT_PORT,
    };
    bind_address(&host, port)
}

/// `host` must be an IP literal; IPv6 may be written with or without brackets.
pub fn bind_address(host: &str, port: u16) -> Result<SocketAddr, HostPortError> {
    let ip = host
        .trim_start_matches('[')
        .trim_end_matches(']')
        .parse::<IpAddr>()
        .map_err(|source| HostPortError::InvalidHost {
            value: host.to_string(),
            source,
        })?;
    Ok(SocketAddr::new(ip, port))
}

#[derive(Debug)]
pub enum HostPortError {
    InvalidPort { value: String, source: ParseIntError },
    InvalidHost { value: String, source: AddrParseError },
}

impl std::error::Error for HostPortError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostPortError::InvalidPort { source, .. } => Some(source),
            HostPortError::InvalidHost { source, .. } => Some(source),
        }
    }
}

impl std::fmt::Display for HostPortError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostPortError::InvalidPort { value, source } => {
                write!(f, "PORT '{}' is not a port number: {}", value, source)
            }
            HostPortError::InvalidHost { value, source } => {
                write!(f, "HOST '{}' is not an IP address: {}", value, source)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::lock_env;

    #[test]
    fn test_defaults() {
        let _guard = lock_env();
        unsafe {
            std::env::remove_var("HOST");
            std::env::set_var("PORT", "  ");
        }
        let addr = get_api_base_url();
        unsafe {
            std::env::remove_var("PORT");
        }
        assert_eq!(addr.unwrap().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_invalid_port() {
        let _guard = lock_env();
        unsafe {
            std::env::remove_var("HOST");
            std::env::set_var("PORT", "not-a-port");
        }
        let result = get_api_base_url();
        unsafe {
            std::env::remove_var("PORT");
        }
        let err = result.unwrap_err();
        assert!(matches!(err, HostPortError::InvalidPort { ref value, .. } if value == "not-a-port"));
        assert!(err.to_string().starts_with("PORT 'not-a-port' is not a port number"));
    }

    #[test]
    fn test_invalid_host() {
        let err = bind_address("not a host", 8080).unwrap_err();
        assert!(err.to_string().starts_with("HOST 'not a host' is not an IP address"));
    }

    #[test]
    fn test_ipv6_host() {
        assert_eq!(bind_address("[::1]", 8080).unwrap().to_string(), "[::1]:8080");
        assert_eq!(bind_address("::", 80).unwrap().port(), 80);
    }
}
