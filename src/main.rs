//! pingpong
//!
//! A liveness probe pair built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!   pingpong client                              pingpong server
//!  ┌──────────────────────┐                    ┌──────────────────────────┐
//!  │ ticker (interval)    │   GET /ping        │ axum router              │
//!  │   → target 1 ────────┼───────────────────▶│   → FaultInjector draw   │
//!  │   → target 2 ...     │◀───────────────────┼── 200 "pong" | 418       │
//!  │ classify + log       │   (http / https)   │ plaintext or rustls      │
//!  └──────────────────────┘                    └──────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use pingpong::config::{load_config, validate_config, ConfigError, PingConfig};
use pingpong::lifecycle::signals::shutdown_on_ctrl_c;
use pingpong::observability::{build_logger, install_global};
use pingpong::{Prober, Responder, Shutdown};

#[derive(Parser)]
#[command(name = "pingpong")]
#[command(about = "Liveness probe server and polling client", long_about = None)]
struct Cli {
    /// TOML configuration file; flags override its values.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve /ping, failing a fraction of requests
    Server {
        #[arg(short, long)]
        port: Option<u16>,

        #[arg(long)]
        cert_file: Option<PathBuf>,

        #[arg(long)]
        key_file: Option<PathBuf>,

        /// Probability in [0, 1] of answering with 418
        #[arg(short, long)]
        error_rate: Option<f64>,
    },
    /// Poll one or more servers on a fixed interval
    Client {
        /// Extra CA bundle to trust alongside the system roots
        #[arg(long)]
        ca_cert_file: Option<PathBuf>,

        /// Seconds between rounds
        #[arg(short, long)]
        interval: Option<u64>,

        /// Per-request timeout in seconds (0 disables)
        #[arg(long)]
        timeout: Option<u64>,

        /// Base addresses, e.g. http://127.0.0.1:8080
        targets: Vec<String>,
    },
}

impl Cli {
    /// Load the file (or defaults) and apply flag overrides.
    fn resolve_config(&self) -> Result<PingConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => PingConfig::default(),
        };

        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }

        match &self.command {
            Commands::Server {
                port,
                cert_file,
                key_file,
                error_rate,
            } => {
                if let Some(port) = port {
                    config.transport.port = *port;
                }
                if let Some(cert) = cert_file {
                    config.transport.cert_file = Some(cert.clone());
                }
                if let Some(key) = key_file {
                    config.transport.key_file = Some(key.clone());
                }
                if let Some(rate) = error_rate {
                    config.responder.error_rate = *rate;
                }
            }
            Commands::Client {
                ca_cert_file,
                interval,
                timeout,
                targets,
            } => {
                if let Some(ca) = ca_cert_file {
                    config.transport.ca_cert_file = Some(ca.clone());
                }
                if let Some(interval) = interval {
                    config.prober.interval_secs = *interval;
                }
                if let Some(timeout) = timeout {
                    config.prober.request_timeout_secs = *timeout;
                }
                if !targets.is_empty() {
                    config.prober.targets = targets.clone();
                }
            }
        }

        validate_config(&config)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let logger = build_logger(&config.observability);
    install_global(&logger);

    let shutdown = Shutdown::new();
    tokio::spawn(shutdown_on_ctrl_c(shutdown.clone(), logger.clone()));

    match cli.command {
        Commands::Server { .. } => {
            let responder = Responder::new(config.transport, config.responder.error_rate, logger)?;
            responder.start(shutdown.subscribe()).await?;
        }
        Commands::Client { .. } => {
            let prober = Prober::new(&config.transport, &config.prober, logger)?;
            prober.run(shutdown.subscribe()).await;
        }
    }

    Ok(())
}
