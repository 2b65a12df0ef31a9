//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default, so an empty file is a valid configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration shared by both roles.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PingConfig {
    /// Port and TLS material.
    pub transport: TransportConfig,

    /// Polling client settings.
    pub prober: ProberConfig,

    /// Liveness server settings.
    pub responder: ResponderConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Transport configuration.
///
/// The Responder serves TLS when both `cert_file` and `key_file` are set.
/// The Prober trusts `ca_cert_file` in addition to the system roots.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TransportConfig {
    /// Port the Responder listens on.
    pub port: u16,

    /// Path to certificate file (PEM).
    pub cert_file: Option<PathBuf>,

    /// Path to private key file (PEM).
    pub key_file: Option<PathBuf>,

    /// Path to an extra CA bundle (PEM) trusted by the Prober.
    pub ca_cert_file: Option<PathBuf>,
}

impl TransportConfig {
    /// Plaintext transport on the given port.
    pub fn plain(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }

    /// True iff both certificate and key are configured.
    pub fn is_secure(&self) -> bool {
        self.cert_file.is_some() && self.key_file.is_some()
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            cert_file: None,
            key_file: None,
            ca_cert_file: None,
        }
    }
}

/// Polling client configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProberConfig {
    /// Base addresses to probe, in order (e.g. "http://127.0.0.1:8080").
    pub targets: Vec<String>,

    /// Seconds between probe rounds.
    pub interval_secs: u64,

    /// Per-request timeout in seconds (0 disables the timeout).
    pub request_timeout_secs: u64,
}

impl Default for ProberConfig {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            interval_secs: 5,
            request_timeout_secs: 10,
        }
    }
}

/// Liveness server configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ResponderConfig {
    /// Probability in [0, 1] that a ping is answered with a failure.
    pub error_rate: f64,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self { error_rate: 0.1 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit ANSI colours in log output.
    pub ansi: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            ansi: true,
        }
    }
}
