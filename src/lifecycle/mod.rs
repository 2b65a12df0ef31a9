//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Ctrl+C (signals.rs)
//!     → Shutdown::trigger (shutdown.rs)
//!     → Prober loop exits / Responder stops serving
//! ```
//!
//! # Design Decisions
//! - The Responder stops accepting and lets in-flight requests finish, in
//!   plaintext and TLS mode alike; the Prober finishes its current round
//! - Components receive a broadcast receiver, never the coordinator itself

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
