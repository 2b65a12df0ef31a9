//! Classification of a single probe.

use reqwest::StatusCode;

/// What happened when one target was probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// No HTTP response: connection refused, timeout, TLS failure, bad URL.
    Unreachable { error: String },
    /// The target answered with anything but `200 OK`.
    Rejected { status: StatusCode },
    /// `200 OK`, but the body was not a JSON string.
    Undecodable { status: StatusCode, error: String },
    /// `200 OK` with a decoded payload.
    Answered { status: StatusCode, payload: String },
}

impl ProbeOutcome {
    /// Classify a response from its status and raw body.
    ///
    /// Only `200 OK` counts as success; the body is ignored otherwise.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        if status != StatusCode::OK {
            return ProbeOutcome::Rejected { status };
        }
        match serde_json::from_slice::<String>(body) {
            Ok(payload) => ProbeOutcome::Answered { status, payload },
            Err(e) => ProbeOutcome::Undecodable {
                status,
                error: e.to_string(),
            },
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self, ProbeOutcome::Answered { .. })
    }
}
