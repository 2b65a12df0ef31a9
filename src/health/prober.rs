//! Active liveness polling (the Prober role).
//!
//! # Responsibilities
//! - Periodically probe every configured target, in order
//! - Classify each response and log the outcome
//! - Stop when the shutdown signal fires

use std::time::Duration;

use thiserror::Error;
use tokio::sync::broadcast;
use tokio::time::{self, MissedTickBehavior};
use tracing::instrument::WithSubscriber;
use tracing::Dispatch;

use crate::config::{ProberConfig, TransportConfig};
use crate::health::outcome::ProbeOutcome;
use crate::http::PING_PATH;
use crate::net::tls::load_ca_certificates;

/// Construction-time failures.
#[derive(Debug, Error)]
pub enum ProberError {
    #[error("interval must be greater than zero")]
    ZeroInterval,

    #[error("failed to load CA certificates from {path:?}: {source}")]
    CaCertificate {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Polls `<target>/ping` for each target on a fixed interval.
pub struct Prober {
    targets: Vec<String>,
    interval: Duration,
    client: reqwest::Client,
    logger: Dispatch,
}

impl Prober {
    pub fn new(transport: &TransportConfig, config: &ProberConfig, logger: Dispatch) -> Result<Self, ProberError> {
        if config.interval_secs == 0 {
            return Err(ProberError::ZeroInterval);
        }

        let mut builder = reqwest::Client::builder().user_agent("pingpong-prober");
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }
        if let Some(path) = &transport.ca_cert_file {
            let roots = load_ca_certificates(path).map_err(|source| ProberError::CaCertificate {
                path: path.clone(),
                source,
            })?;
            for root in roots {
                builder = builder.add_root_certificate(root);
            }
        }

        Ok(Self {
            targets: config.targets.clone(),
            interval: Duration::from_secs(config.interval_secs),
            client: builder.build()?,
            logger,
        })
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Probe every target on each tick until shutdown.
    ///
    /// Targets are probed one after another. A round that outlasts the
    /// interval delays the next tick; missed ticks are skipped, not queued.
    /// Shutdown is observed between rounds and wins over a pending tick.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let logger = self.logger.clone();
        async move {
            if self.targets.is_empty() {
                tracing::warn!("No targets configured, probe rounds will be empty");
            }
            tracing::info!(
                targets = ?self.targets,
                interval_secs = self.interval.as_secs(),
                "Prober starting"
            );

            let mut ticker = time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    biased;
                    _ = shutdown.recv() => {
                        tracing::info!("Prober received shutdown signal, exiting loop");
                        break;
                    }
                    _ = ticker.tick() => {
                        self.round().await;
                    }
                }
            }
        }
        .with_subscriber(logger)
        .await
    }

    /// Probe all targets once, in order.
    pub async fn probe_round(&self) -> Vec<ProbeOutcome> {
        self.round().with_subscriber(self.logger.clone()).await
    }

    /// Probe a single target.
    pub async fn probe(&self, target: &str) -> ProbeOutcome {
        self.probe_target(target)
            .with_subscriber(self.logger.clone())
            .await
    }

    async fn round(&self) -> Vec<ProbeOutcome> {
        let mut outcomes = Vec::with_capacity(self.targets.len());
        for target in &self.targets {
            outcomes.push(self.probe_target(target).await);
        }
        outcomes
    }

    async fn probe_target(&self, target: &str) -> ProbeOutcome {
        let url = ping_url(target);

        let outcome = match self.client.get(&url).send().await {
            Err(e) => ProbeOutcome::Unreachable { error: e.to_string() },
            Ok(response) => {
                let status = response.status();
                if status == reqwest::StatusCode::OK {
                    match response.bytes().await {
                        Ok(body) => ProbeOutcome::from_response(status, &body),
                        Err(e) => ProbeOutcome::Undecodable {
                            status,
                            error: e.to_string(),
                        },
                    }
                } else {
                    ProbeOutcome::Rejected { status }
                }
            }
        };

        log_outcome(target, &outcome);
        outcome
    }
}

fn ping_url(target: &str) -> String {
    format!("{}{}", target.trim_end_matches('/'), PING_PATH)
}

fn log_outcome(target: &str, outcome: &ProbeOutcome) {
    match outcome {
        ProbeOutcome::Unreachable { error } => {
            tracing::info!(addr = %target, error = %error, "Couldn't ping target");
        }
        ProbeOutcome::Rejected { status } => {
            tracing::error!(addr = %target, status = status.as_u16(), "Got non-ok response code");
        }
        ProbeOutcome::Undecodable { status, error } => {
            tracing::error!(addr = %target, status = status.as_u16(), error = %error, "Error decoding JSON response");
        }
        ProbeOutcome::Answered { status, payload } => {
            tracing::info!(addr = %target, status = %status, payload = %payload, "Pinged target");
        }
    }
}
