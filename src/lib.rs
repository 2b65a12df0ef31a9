//! Liveness probe pair: a Responder that answers `/ping` with a simulated
//! failure rate, and a Prober that polls a list of Responders on an interval.

pub mod config;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::PingConfig;
pub use health::{ProbeOutcome, Prober};
pub use http::Responder;
pub use lifecycle::Shutdown;
