//! HTTP snapshot server.
//!
//! No routing: a single fallback handler serves every method and path.
//! Each request triggers an independent, uncached traversal; the endpoint
//! always answers HTTP 200 with a well-formed JSON object, degrading to
//! the empty document on request-level failures.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{extract::State, Json, Router};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};

use uiscope_core::{SnapshotRecord, UiTreeProvider};
use uiscope_snapshot::{TreeSerializer, DEFAULT_MAX_DEPTH};

use crate::advertise;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    pub max_depth: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// State shared across requests. The provider is the only shared resource
/// and is read-only; traversals never interact.
#[derive(Clone)]
pub struct GatewayState {
    pub provider: Arc<dyn UiTreeProvider>,
    pub serializer: TreeSerializer,
}

pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .fallback(snapshot_handler)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Answers any request with a fresh snapshot of the current hierarchy.
async fn snapshot_handler(State(state): State<GatewayState>) -> Json<SnapshotRecord> {
    let root = match state.provider.current_root().await {
        Ok(Some(root)) => root,
        Ok(None) => {
            debug!("no addressable root window, answering with empty document");
            return Json(SnapshotRecord::empty());
        }
        Err(err) => {
            warn!(error = %err, "failed to obtain root node");
            return Json(SnapshotRecord::empty());
        }
    };

    match state.serializer.serialize(root.as_ref()) {
        Ok(record) => Json(record),
        Err(err) => {
            warn!(error = %err, "snapshot traversal failed");
            Json(SnapshotRecord::empty())
        }
    }
}

/// The snapshot HTTP server, owned explicitly by the surrounding process.
pub struct SnapshotServer {
    config: ServerConfig,
    provider: Arc<dyn UiTreeProvider>,
}

impl SnapshotServer {
    pub fn new(config: ServerConfig, provider: Arc<dyn UiTreeProvider>) -> Self {
        Self { config, provider }
    }

    /// Bind and start serving. A bind failure is fatal here, before any
    /// request is accepted; once serving, per-connection errors never take
    /// the loop down.
    pub async fn start(self) -> Result<ServerHandle> {
        let addr: SocketAddr = format!("{}:{}", self.config.bind_address, self.config.port)
            .parse()
            .with_context(|| {
                format!(
                    "invalid bind address {}:{}",
                    self.config.bind_address, self.config.port
                )
            })?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        let local_addr = listener
            .local_addr()
            .context("failed to read bound address")?;

        advertise::announce_endpoint(&self.config.bind_address, local_addr.port());

        let state = GatewayState {
            provider: self.provider,
            serializer: TreeSerializer::new(self.config.max_depth),
        };
        let router = build_router(state);

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        info!(%local_addr, "snapshot server started");
        Ok(ServerHandle {
            local_addr,
            shutdown_tx,
            task,
        })
    }
}

/// Handle to a running server. `stop` shuts it down gracefully and
/// surfaces the serve result; dropping the handle also triggers shutdown.
pub struct ServerHandle {
    pub local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

impl ServerHandle {
    pub async fn stop(self) -> Result<()> {
        let _ = self.shutdown_tx.send(());
        self.task.await.context("server task panicked")??;
        info!("snapshot server stopped");
        Ok(())
    }
}
