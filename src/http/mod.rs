//! HTTP serving subsystem (the Responder role).
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum router, plaintext or rustls)
//!     → GET /ping
//!     → fault.rs (Bernoulli draw: fail or answer)
//!     → 418 "no wai!" | 200 "pong"
//! ```

pub mod fault;
pub mod server;

pub use fault::FaultInjector;
pub use server::{Responder, ResponderError, FAILURE_MESSAGE, PING_PATH, PONG};
