use axum_server::tls_rustls::RustlsConfig;
use std::env::{self, VarError};
use std::path::PathBuf;

use super::is_env_flag_set;

#[derive(Debug, thiserror::Error)]
pub enum TlsConfigError {
    #[error("{0} environment variable is required when ENABLE_TLS=true: {1}")]
    MissingVar(&'static str, VarError),
    #[error("{0} file does not exist: {1}")]
    MissingFile(&'static str, PathBuf),
    #[error("Failed to load TLS certificate and key: {0}")]
    Load(#[from] std::io::Error),
}

/// True if the env var ENABLE_TLS is present and is one of "1", "true", "yes", or "y".
pub fn is_tls_enabled() -> bool {
    is_env_flag_set("ENABLE_TLS")
}

/// Get TLS configuration from the env vars TLS_CERT_PATH and TLS_KEY_PATH (PEM files).
pub async fn get_tls_config() -> Result<RustlsConfig, TlsConfigError> {
    let cert_path = existing_path("TLS_CERT_PATH", "Certificate")?;
    let key_path = existing_path("TLS_KEY_PATH", "Private key")?;

    let config = RustlsConfig::from_pem_file(cert_path, key_path).await?;
    Ok(config)
}

fn existing_path(env_var: &'static str, what: &'static str) -> Result<PathBuf, TlsConfigError> {
    let path = env::var(env_var)
        .map(PathBuf::from)
        .map_err(|e| TlsConfigError::MissingVar(env_var, e))?;
    if !path.exists() {
        return Err(TlsConfigError::MissingFile(what, path));
    }
    Ok(path)
}
