//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (error rate, interval)
//! - Check that TLS material comes in pairs
//! - Check that targets are absolute HTTP(S) URLs
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PingConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use url::Url;

use crate::config::schema::PingConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("error_rate must be within [0, 1], got {0}")]
    ErrorRateOutOfRange(f64),

    #[error("interval_secs must be greater than zero")]
    ZeroInterval,

    #[error("cert_file is set but key_file is missing")]
    MissingKeyFile,

    #[error("key_file is set but cert_file is missing")]
    MissingCertFile,

    #[error("target '{target}' is not a valid http(s) URL: {reason}")]
    InvalidTarget { target: String, reason: String },
}

/// Check an error rate is a probability.
pub fn validate_error_rate(error_rate: f64) -> Result<(), ValidationError> {
    if (0.0..=1.0).contains(&error_rate) {
        Ok(())
    } else {
        Err(ValidationError::ErrorRateOutOfRange(error_rate))
    }
}

fn validate_target(target: &str) -> Result<(), ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidTarget {
        target: target.to_string(),
        reason,
    };

    let url = Url::parse(target).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{}'", other))),
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(())
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &PingConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = validate_error_rate(config.responder.error_rate) {
        errors.push(e);
    }

    if config.prober.interval_secs == 0 {
        errors.push(ValidationError::ZeroInterval);
    }

    let transport = &config.transport;
    match (&transport.cert_file, &transport.key_file) {
        (Some(_), None) => errors.push(ValidationError::MissingKeyFile),
        (None, Some(_)) => errors.push(ValidationError::MissingCertFile),
        _ => {}
    }

    for target in &config.prober.targets {
        if let Err(e) = validate_target(target) {
            errors.push(e);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&PingConfig::default()).is_ok());
    }

    #[test]
    fn test_error_rate_bounds() {
        assert!(validate_error_rate(0.0).is_ok());
        assert!(validate_error_rate(1.0).is_ok());
        assert!(validate_error_rate(0.25).is_ok());
        assert_eq!(
            validate_error_rate(1.5),
            Err(ValidationError::ErrorRateOutOfRange(1.5))
        );
        assert!(validate_error_rate(-0.1).is_err());
        assert!(validate_error_rate(f64::NAN).is_err());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = PingConfig::default();
        config.responder.error_rate = 2.0;
        config.prober.interval_secs = 0;
        config.transport.cert_file = Some("server.pem".into());
        config.prober.targets = vec![
            "http://127.0.0.1:8080".to_string(),
            "localhost:8080".to_string(),
            "ftp://example.com".to_string(),
        ];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors[0], ValidationError::ErrorRateOutOfRange(2.0));
        assert_eq!(errors[1], ValidationError::ZeroInterval);
        assert_eq!(errors[2], ValidationError::MissingKeyFile);
        assert!(matches!(&errors[3], ValidationError::InvalidTarget { target, .. } if target == "localhost:8080"));
        assert!(matches!(&errors[4], ValidationError::InvalidTarget { target, .. } if target == "ftp://example.com"));
    }

    #[test]
    fn test_key_without_cert() {
        let mut config = PingConfig::default();
        config.transport.key_file = Some("server.key".into());
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::MissingCertFile])
        );
    }

    #[test]
    fn test_duplicate_targets_allowed() {
        let mut config = PingConfig::default();
        config.prober.targets = vec![
            "https://node.internal:9443".to_string(),
            "https://node.internal:9443".to_string(),
        ];
        assert!(validate_config(&config).is_ok());
    }
}
