//! # WerkSite Server
//!
//! The web application serving one configured site instance: the static
//! site bundle, the resolved content/theme/feature APIs, and the editor
//! side channel, built on `Axum`.
//!
//! ## Example
//! ```no_run
//! use wsite_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(8640)
//!         .build()
//!         .await?
//!         .run()
//!         .await
//! }
//! ```

mod router;

use anyhow::{Context, Result, anyhow};
use axum::Router;
use axum_server::Handle;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};
use wsite::domain::config::{SiteConfig, SslConfig};
use wsite::kernel::server::ApiState;
use wsite_assets::AssetStore;

/// How long in-flight requests get to finish after a shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: SiteConfig,
}

impl ServerBuilder {
    /// Set up the server's configuration.
    pub fn config(mut self, cfg: SiteConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    fn validate_ssl_config(&self) -> Result<()> {
        let Some(ssl) = &self.cfg.server.ssl else {
            return Ok(());
        };

        if !ssl.cert.exists() {
            anyhow::bail!("SSL certificate not found at: {}", ssl.cert.display());
        }
        if !ssl.key.exists() {
            anyhow::bail!("SSL key not found at: {}", ssl.key.display());
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = ssl.key.metadata()?;
            if metadata.permissions().mode() & 0o077 != 0 {
                tracing::warn!(
                    "SECURITY: SSL Private Key {} has insecure permissions (should be 600)",
                    ssl.key.display()
                );
            }
        }

        Ok(())
    }

    /// Consumes the builder and initializes the server.
    ///
    /// # Process
    /// 1. Validates the TLS configuration, if any
    /// 2. Opens the asset store over the configured content directory
    /// 3. Initializes the feature slices through [`wsite::init`]
    /// 4. Folds everything into the shared application state
    ///
    /// # Errors
    /// Returns an error if the content directory or one of its documents is
    /// missing or malformed, or if the TLS material cannot be read.
    pub async fn build(self) -> Result<Server> {
        self.validate_ssl_config()?;

        let address = SocketAddr::new(self.cfg.server.address, self.cfg.server.port);
        info!(
            address = %address,
            tier = %self.cfg.site.tier,
            scheme = %self.cfg.site.color_scheme,
            "Initializing server"
        );

        let assets = AssetStore::builder()
            .root(&self.cfg.assets.content_dir)
            .create(false)
            .connect()
            .await
            .context("Failed to open the content asset store")?;

        let slices = wsite::init(&self.cfg, &assets)
            .await
            .map_err(|e| anyhow!("Platform bootstrap failed: {e}"))?;

        let state = slices
            .into_iter()
            .fold(ApiState::builder().config(self.cfg).assets(assets), |builder, slice| {
                builder.register_slice(slice)
            })
            .build()
            .context("Failed to finalize API state registry")?;

        info!(
            slices = %state.slice_names().collect::<Vec<_>>().join(","),
            "Feature slices registered"
        );

        Ok(Server { state })
    }
}

/// A fully initialized server instance ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
}

impl Server {
    /// Returns a new [`ServerBuilder`] to configure the server.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Starts the server and blocks until a shutdown signal arrives and the
    /// grace period drains.
    ///
    /// # Errors
    /// Returns an error if binding fails or TLS material cannot be loaded.
    pub async fn run(self) -> Result<()> {
        let cfg = self.state.config.clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);
        let app = router::init(self.state);

        let handle = Handle::<SocketAddr>::new();
        spawn_shutdown_listener(handle.clone());

        match &cfg.server.ssl {
            Some(ssl) => serve_https(address, app, handle, ssl).await?,
            None => serve_http(address, app, handle).await?,
        }

        info!("Server shutdown complete");
        Ok(())
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub const fn state(&self) -> &ApiState {
        &self.state
    }
}

async fn serve_http(address: SocketAddr, app: Router, handle: Handle<SocketAddr>) -> Result<()> {
    info!("Starting HTTP server on http://{address}");

    axum_server::bind(address)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .context("HTTP server failed")
}

async fn serve_https(
    address: SocketAddr,
    app: Router,
    handle: Handle<SocketAddr>,
    ssl: &SslConfig,
) -> Result<()> {
    info!("Starting HTTPS server on https://{address}");

    let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(&ssl.cert, &ssl.key)
        .await
        .context("Failed to load SSL/TLS certificates")?;

    axum_server::bind_rustls(address, tls_config)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .context("HTTPS server failed")
}

fn spawn_shutdown_listener(handle: Handle<SocketAddr>) {
    tokio::spawn(async move {
        if let Err(e) = shutdown_signal().await {
            error!("Error while waiting for shutdown signal: {e}");
            return;
        }
        info!("Shutdown signal received, starting graceful shutdown...");
        handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
    });
}

/// Resolves when SIGINT (Ctrl+C) or SIGTERM arrives.
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => res?,
        res = terminate => res?,
    }

    Ok(())
}
