//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the plaintext listener
//! - Load TLS material and bind the TLS listener when configured
//! - Spawn one serve task per listener, wired to the shutdown signal
//!
//! # Design Decisions
//! - Everything that can fail happens before the first task is spawned
//! - Listeners start last (traffic only when ready)

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::config::ServerConfig;
use crate::lifecycle::shutdown::Shutdown;
use crate::net::{bind, load_tls_config, ListenerError, TlsError};

/// Grace period for in-flight TLS connections after shutdown.
const TLS_DRAIN_SECS: u64 = 10;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("failed to load TLS material: {0}")]
    Tls(#[from] TlsError),
}

/// Handle to a started server.
#[derive(Debug)]
pub struct RunningServer {
    http_addr: SocketAddr,
    https_addr: Option<SocketAddr>,
    tasks: Vec<JoinHandle<io::Result<()>>>,
}

impl RunningServer {
    /// Address the plaintext listener is bound to.
    pub fn http_addr(&self) -> SocketAddr {
        self.http_addr
    }

    /// Address of the TLS listener, if one was started.
    pub fn https_addr(&self) -> Option<SocketAddr> {
        self.https_addr
    }

    /// Wait for every listener to stop.
    pub async fn wait(self) -> io::Result<()> {
        for task in self.tasks {
            task.await.map_err(io::Error::other)??;
        }
        Ok(())
    }
}

/// Bind listeners for `config` and start serving `router` on them.
pub(crate) async fn start(
    config: &ServerConfig,
    router: Router,
    shutdown: &Shutdown,
) -> Result<RunningServer, StartupError> {
    let (http_listener, http_addr) =
        bind(SocketAddr::new(config.bind_address, config.http_port)).await?;

    let tls = match config.options.tls_material() {
        Some((cert, key)) => {
            let rustls = load_tls_config(cert, key).await?;
            let address = SocketAddr::new(config.bind_address, config.https_port);
            let (listener, local) = bind(address).await?;
            let listener = listener
                .into_std()
                .map_err(|source| ListenerError::Bind { address, source })?;
            Some((listener, local, rustls))
        }
        None => {
            if config.options.key.is_some() || config.options.cert.is_some() {
                tracing::warn!("TLS needs both key and cert, HTTPS listener skipped");
            }
            None
        }
    };

    let mut tasks = Vec::with_capacity(2);

    let app = router.clone().into_make_service();
    let signal = shutdown.signalled();
    tasks.push(tokio::spawn(async move {
        axum::serve(http_listener, app)
            .with_graceful_shutdown(signal)
            .await
    }));
    tracing::info!(address = %http_addr, "HTTP server starting");

    let https_addr = match tls {
        Some((listener, local, rustls)) => {
            let handle = axum_server::Handle::new();
            let signal = shutdown.signalled();
            let drain = handle.clone();
            tokio::spawn(async move {
                signal.await;
                drain.graceful_shutdown(Some(Duration::from_secs(TLS_DRAIN_SECS)));
            });

            let app = router.into_make_service();
            tasks.push(tokio::spawn(async move {
                axum_server::from_tcp_rustls(listener, rustls)
                    .handle(handle)
                    .serve(app)
                    .await
            }));
            tracing::info!(address = %local, "HTTPS server starting");
            Some(local)
        }
        None => None,
    };

    Ok(RunningServer {
        http_addr,
        https_addr,
        tasks,
    })
}
