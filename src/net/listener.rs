//! TCP listener binding.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Failed to bind to address.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Bind a TCP listener, returning it with the address actually bound.
pub async fn bind(address: SocketAddr) -> Result<(TcpListener, SocketAddr), ListenerError> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| ListenerError::Bind { address, source })?;

    let local_addr = listener
        .local_addr()
        .map_err(|source| ListenerError::Bind { address, source })?;

    tracing::info!(address = %local_addr, "Listener bound");
    Ok((listener, local_addr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let (listener, addr) = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        assert_ne!(addr.port(), 0);
        assert_eq!(listener.local_addr().unwrap(), addr);
    }

    #[tokio::test]
    async fn test_bind_port_in_use() {
        let (_taken, addr) = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();

        let err = bind(addr).await.unwrap_err();
        let ListenerError::Bind { address, .. } = &err;
        assert_eq!(*address, addr);
        assert!(err.to_string().contains(&addr.to_string()));
    }
}
