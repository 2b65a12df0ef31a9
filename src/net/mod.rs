//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Responder:
//!     cert_file + key_file → tls.rs (RustlsConfig) → TLS listener
//!
//! Prober:
//!     ca_cert_file → tls.rs (extra trust roots) → HTTP client
//! ```
//!
//! # Design Decisions
//! - TLS is optional and selected by the transport configuration
//! - Extra CA roots are added on top of the system trust store

pub mod tls;
