//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)            CLI flags
//!     → loader.rs (parse)           │
//!     → PingConfig ◀────────────────┘ (overrides)
//!     → validation.rs (semantic checks)
//!     → handed by value to Prober / Responder
//! ```
//!
//! # Design Decisions
//! - Config is immutable once a component is constructed
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ObservabilityConfig, PingConfig, ProberConfig, ResponderConfig, TransportConfig};
pub use validation::{validate_config, ValidationError};
