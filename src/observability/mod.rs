//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! main.rs
//!     → logging.rs (build Dispatch from ObservabilityConfig)
//!     → passed into Prober::new / Responder::new
//!     → every event of that component goes through it
//! ```
//!
//! # Design Decisions
//! - Structured fields, not formatted messages
//! - No metrics: outcomes are logged, not counted

pub mod logging;

pub use logging::{build_logger, install_global};
