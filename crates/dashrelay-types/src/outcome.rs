//! Outcome taxonomy for a single delivery attempt.

use thiserror::Error;

/// A classified failure from one delivery attempt.
///
/// Every variant is terminal: the relay logs it once and drops the record.
/// No delivery is ever retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The client is closed or no endpoint is configured. Raised before
    /// any network I/O.
    #[error("webhook not configured")]
    NotConfigured,

    /// The request exceeded the delivery timeout.
    #[error("request timed out")]
    Timeout,

    /// Connection, DNS, or TLS failure before an HTTP status was seen.
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered with something other than 200.
    #[error("endpoint returned {status}: {body}")]
    BadStatus {
        status: u16,
        /// Leading excerpt of the response body, kept short for logs.
        body: String,
    },

    /// A fault on the healthy path, e.g. a 200 response whose body is
    /// not the expected JSON.
    #[error("internal error: {0}")]
    Internal(String),
}

/// A successful delivery: the dashboard accepted the record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Receipt {
    /// Correlation token (`ticket_id`) returned by the dashboard, when the
    /// response carried one.
    pub ticket: Option<String>,
}

/// Outcome of one delivery attempt.
pub type DeliveryResult = std::result::Result<Receipt, DeliveryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_body() {
        let err = DeliveryError::BadStatus {
            status: 503,
            body: "service unavailable".into(),
        };
        assert_eq!(err.to_string(), "endpoint returned 503: service unavailable");
    }

    #[test]
    fn display_for_io_free_variants() {
        assert_eq!(
            DeliveryError::NotConfigured.to_string(),
            "webhook not configured"
        );
        assert_eq!(DeliveryError::Timeout.to_string(), "request timed out");
    }

    #[test]
    fn receipt_defaults_to_no_ticket() {
        assert_eq!(Receipt::default().ticket, None);
    }
}
