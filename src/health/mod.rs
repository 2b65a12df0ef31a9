//! Health probing subsystem (the Prober role).
//!
//! # Data Flow
//! ```text
//! Periodic timer (prober.rs)
//!     → GET <target>/ping for each target, sequentially
//!     → outcome.rs (Unreachable | Rejected | Undecodable | Answered)
//!     → one log line per target per round
//! ```
//!
//! # Design Decisions
//! - No retries, no thresholds, no state kept between rounds
//! - Outcomes are returned to the caller but never accumulated

pub mod outcome;
pub mod prober;

pub use outcome::ProbeOutcome;
pub use prober::{Prober, ProberError};
