use axum_server::tls_rustls::RustlsConfig;
use std::env;
use std::path::PathBuf;

use crate::errors::ConfigError;

/// Certificate and key paths from `TLS_CERT_PATH` and `TLS_KEY_PATH`.
/// None unless both are set, in which case the server stays on plain HTTP.
pub fn tls_paths() -> Option<(PathBuf, PathBuf)> {
    let cert = env::var("TLS_CERT_PATH").ok().filter(|v| !v.trim().is_empty())?;
    let key = env::var("TLS_KEY_PATH").ok().filter(|v| !v.trim().is_empty())?;
    Some((PathBuf::from(cert), PathBuf::from(key)))
}

/// Loads a rustls server configuration from PEM files.
pub async fn load_tls_config(cert_path: PathBuf, key_path: PathBuf) -> Result<RustlsConfig, ConfigError> {
    for path in [&cert_path, &key_path] {
        if !path.exists() {
            return Err(ConfigError::TlsError(format!("File does not exist: {}", path.display())));
        }
    }

    RustlsConfig::from_pem_file(cert_path, key_path)
        .await
        .map_err(|e| ConfigError::TlsError(e.to_string()))
}
