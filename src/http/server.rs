//! Liveness server (the Responder role).
//!
//! # Responsibilities
//! - Create Axum Router with the `/ping` handler
//! - Decide per request whether to simulate a failure
//! - Serve plaintext or TLS depending on the transport configuration
//! - Stop accepting when the shutdown signal fires, letting open requests finish

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;
use tracing::Dispatch;

use crate::config::validation::{validate_error_rate, ValidationError};
use crate::config::TransportConfig;
use crate::http::fault::FaultInjector;
use crate::lifecycle::shutdown::wait as wait_for_shutdown;
use crate::net::tls::load_tls_config;

/// Path of the liveness endpoint.
pub const PING_PATH: &str = "/ping";
/// Body sent on a successful ping (JSON encoded).
pub const PONG: &str = "pong";
/// Body sent with the simulated failure.
pub const FAILURE_MESSAGE: &str = "no wai!";

/// Errors that stop the Responder.
#[derive(Debug, Error)]
pub enum ResponderError {
    #[error(transparent)]
    InvalidErrorRate(#[from] ValidationError),

    #[error("failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load TLS certificate/key: {0}")]
    Tls(#[source] std::io::Error),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Application state injected into the handler.
#[derive(Clone)]
struct AppState {
    faults: Arc<FaultInjector>,
    logger: Dispatch,
}

/// Serves `GET /ping`, failing a configured fraction of requests.
pub struct Responder {
    transport: TransportConfig,
    faults: Arc<FaultInjector>,
    logger: Dispatch,
}

impl Responder {
    /// Create a Responder; the random source is seeded from the clock here.
    pub fn new(transport: TransportConfig, error_rate: f64, logger: Dispatch) -> Result<Self, ResponderError> {
        validate_error_rate(error_rate)?;
        Ok(Self::with_injector(transport, FaultInjector::new(error_rate), logger))
    }

    /// Create a Responder around an existing injector (e.g. a fixed seed).
    pub fn with_injector(transport: TransportConfig, faults: FaultInjector, logger: Dispatch) -> Self {
        Self {
            transport,
            faults: Arc::new(faults),
            logger,
        }
    }

    pub fn transport(&self) -> &TransportConfig {
        &self.transport
    }

    /// Build the Axum router serving the liveness endpoint.
    pub fn router(&self) -> Router {
        let state = AppState {
            faults: self.faults.clone(),
            logger: self.logger.clone(),
        };

        Router::new()
            .route(PING_PATH, get(ping_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Bind `0.0.0.0:<port>`.
    pub async fn bind(&self) -> Result<TcpListener, ResponderError> {
        let port = self.transport.port;
        TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))
            .await
            .map_err(|source| ResponderError::Bind { port, source })
    }

    /// Bind the configured port and serve until shutdown.
    pub async fn start(self, shutdown: broadcast::Receiver<()>) -> Result<(), ResponderError> {
        let listener = self.bind().await?;
        self.run(listener, shutdown).await
    }

    /// Serve on an already bound listener until shutdown.
    pub async fn run(self, listener: TcpListener, shutdown: broadcast::Receiver<()>) -> Result<(), ResponderError> {
        let addr = listener.local_addr()?;
        let app = self
            .router()
            .into_make_service_with_connect_info::<SocketAddr>();

        self.log(|| {
            tracing::info!(
                address = %addr,
                error_rate = self.faults.error_rate(),
                tls = self.transport.is_secure(),
                "Starting ping server"
            );
        });

        match (&self.transport.cert_file, &self.transport.key_file) {
            (Some(cert), Some(key)) => {
                let tls = load_tls_config(cert, key).await.map_err(ResponderError::Tls)?;

                let handle = axum_server::Handle::new();
                let stopper = handle.clone();
                tokio::spawn(async move {
                    wait_for_shutdown(shutdown).await;
                    // Stop accepting; in-flight requests finish.
                    stopper.graceful_shutdown(None);
                });

                axum_server::from_tcp_rustls(listener.into_std()?, tls)
                    .handle(handle)
                    .serve(app)
                    .await?;
            }
            _ => {
                axum::serve(listener, app)
                    .with_graceful_shutdown(wait_for_shutdown(shutdown))
                    .await?;
            }
        }

        self.log(|| tracing::info!("Ping server stopped"));
        Ok(())
    }

    fn log(&self, f: impl FnOnce()) {
        tracing::dispatcher::with_default(&self.logger, f);
    }
}

async fn ping_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    if state.faults.should_fail() {
        return (StatusCode::IM_A_TEAPOT, FAILURE_MESSAGE).into_response();
    }

    // Absent when the router is driven without a socket (in-process tests).
    let caller = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    tracing::dispatcher::with_default(&state.logger, || {
        tracing::info!(caller = %caller, "Got pinged, sent a pong");
    });

    Json(PONG).into_response()
}
