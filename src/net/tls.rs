//! TLS configuration and certificate loading.

use std::path::PathBuf;

use axum_server::tls_rustls::RustlsConfig;
use thiserror::Error;

use crate::config::PemSource;

/// Errors loading TLS material.
#[derive(Debug, Error)]
pub enum TlsError {
    #[error("cannot read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid certificate or key: {0}")]
    Invalid(#[source] std::io::Error),
}

async fn read_pem(source: &PemSource) -> Result<Vec<u8>, TlsError> {
    match source {
        PemSource::Path(path) => tokio::fs::read(path).await.map_err(|e| TlsError::Read {
            path: path.clone(),
            source: e,
        }),
        PemSource::Pem(text) => Ok(text.clone().into_bytes()),
    }
}

/// Build a rustls server config from a certificate chain and private key.
pub async fn load_tls_config(cert: &PemSource, key: &PemSource) -> Result<RustlsConfig, TlsError> {
    let cert = read_pem(cert).await?;
    let key = read_pem(key).await?;

    RustlsConfig::from_pem(cert, key)
        .await
        .map_err(TlsError::Invalid)
}
