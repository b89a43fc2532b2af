//! Outcome model: what a single HTTP exchange produced.
//!
//! This module does not know about reqwest or any other HTTP stack. It only
//! defines the "shape" of a result so the client can interpret it and forget
//! it right away.

use serde::{Deserialize, Serialize};

/// Result of one Transport call.
///
/// - `Response`: the server answered (any status code).
/// - `TransportFailed`: no response at all (connection refused, DNS, timeout...).
///   A status code is meaningless here, so there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpOutcome {
    Response { status: u16, body: String },
    TransportFailed { reason: String },
}

impl HttpOutcome {
    pub fn response(status: u16, body: impl Into<String>) -> Self {
        Self::Response {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::response(200, body)
    }

    pub fn transport_failed(reason: impl Into<String>) -> Self {
        Self::TransportFailed {
            reason: reason.into(),
        }
    }

    /// Status code, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            Self::TransportFailed { .. } => None,
        }
    }
}

/// Liveness of the remote service, derived from `GET /`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceStatus {
    Up,
    Down,
}

impl ServiceStatus {
    pub fn is_up(self) -> bool {
        self == Self::Up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failure_has_no_status() {
        assert_eq!(HttpOutcome::transport_failed("refused").status(), None);
        assert_eq!(HttpOutcome::response(404, "").status(), Some(404));
    }

    #[test]
    fn service_status_serializes_as_upper_case() {
        let s = serde_json::to_string(&ServiceStatus::Down).unwrap();
        assert_eq!(s, "\"DOWN\"");
    }
}
