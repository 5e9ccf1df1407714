//! Delivery client for the dashboard webhook.
//!
//! [`WebhookClient`] owns the only [`reqwest::Client`] in the plugin and
//! classifies every attempt into the [`DeliveryError`] taxonomy. Delivery is
//! strictly fire-and-forget: one POST per record, bounded by a timeout,
//! never retried.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, error, info};

use dashrelay_types::config::RelayConfig;
use dashrelay_types::outcome::{DeliveryError, DeliveryResult, Receipt};
use dashrelay_types::record::TransportRecord;
use dashrelay_types::secret::SecretString;

/// Header carrying the shared secret on every delivery.
pub const SECRET_HEADER: &str = "X-Webhook-Secret";

/// Path segment substituted for the ingestion segment when probing.
const HEALTH_SEGMENT: &str = "health";

/// Longest error-body excerpt carried in [`DeliveryError::BadStatus`].
const BODY_EXCERPT_LEN: usize = 200;

/// Acknowledgement body the dashboard returns on success.
#[derive(Debug, Deserialize)]
struct WebhookAck {
    #[serde(default)]
    ticket_id: Option<String>,
}

/// Outcome of the diagnostics health probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The health endpoint answered 200.
    Reachable,
    /// The health endpoint answered, but not with 200.
    BadStatus(u16),
    /// No answer: timeout, connection, DNS, or TLS failure.
    Unreachable(String),
}

/// HTTP client for the dashboard webhook.
///
/// One instance lives for the plugin's lifetime. The inner
/// [`reqwest::Client`] pools connections and is safe to use from
/// concurrently handled events; [`close`](Self::close) flips a flag after
/// which every delivery is refused without I/O.
pub struct WebhookClient {
    http: reqwest::Client,
    endpoint: String,
    secret: SecretString,
    deliver_timeout: Duration,
    probe_timeout: Duration,
    open: AtomicBool,
}

impl WebhookClient {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.webhook_url.clone(),
            secret: config.webhook_secret.clone(),
            deliver_timeout: Duration::from_secs(config.deliver_timeout_secs),
            probe_timeout: Duration::from_secs(config.probe_timeout_secs),
            open: AtomicBool::new(true),
        }
    }

    /// The endpoint this client posts to. Empty when delivery is disabled.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether a non-empty shared secret is configured.
    pub fn has_secret(&self) -> bool {
        !self.secret.is_empty()
    }

    /// Whether the client still accepts deliveries.
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Close the client. Deliveries after this fail as not configured;
    /// there is no reopen.
    pub fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
    }

    /// The URL probed by the status command: the endpoint with its final
    /// path segment replaced by `health`.
    pub fn health_url(&self) -> String {
        let trimmed = self.endpoint.trim_end_matches('/');
        let path_start = trimmed.find("://").map(|i| i + 3).unwrap_or(0);
        match trimmed[path_start..].rfind('/') {
            Some(slash) => format!("{}/{HEALTH_SEGMENT}", &trimmed[..path_start + slash]),
            None => format!("{trimmed}/{HEALTH_SEGMENT}"),
        }
    }

    /// POST one record to the dashboard and classify the outcome.
    ///
    /// Refuses without any network I/O when the client is closed or no
    /// endpoint is configured. The dashboard contract is exactly 200;
    /// every other status is a [`DeliveryError::BadStatus`].
    pub async fn deliver(&self, record: &TransportRecord) -> DeliveryResult {
        if !self.is_open() {
            debug!("delivery refused, client closed");
            return Err(DeliveryError::NotConfigured);
        }
        if self.endpoint.is_empty() {
            debug!("delivery refused, no endpoint configured");
            return Err(DeliveryError::NotConfigured);
        }

        let sent = self
            .http
            .post(&self.endpoint)
            .header(SECRET_HEADER, self.secret.expose())
            .timeout(self.deliver_timeout)
            .json(record)
            .send()
            .await;

        let response = match sent {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                error!(
                    timeout_secs = self.deliver_timeout.as_secs(),
                    "webhook request timed out"
                );
                return Err(DeliveryError::Timeout);
            }
            Err(e) => {
                error!(error = %e, "webhook request failed before a status was seen");
                return Err(DeliveryError::Transport(e.to_string()));
            }
        };

        let status = response.status().as_u16();
        if status != 200 {
            let body = excerpt(&response.text().await.unwrap_or_default());
            error!(status, body = %body, "webhook returned error status");
            return Err(DeliveryError::BadStatus { status, body });
        }

        match response.json::<WebhookAck>().await {
            Ok(ack) => {
                info!(
                    origin = %record.origin_name,
                    ticket = ack.ticket_id.as_deref().unwrap_or("unknown"),
                    "forwarded message to dashboard"
                );
                Ok(Receipt {
                    ticket: ack.ticket_id,
                })
            }
            Err(e) if e.is_timeout() => {
                error!(
                    timeout_secs = self.deliver_timeout.as_secs(),
                    "webhook request timed out reading the response"
                );
                Err(DeliveryError::Timeout)
            }
            Err(e) => {
                // Full detail goes to the log; the variant keeps a summary.
                error!(error = ?e, "unexpected body on a 200 webhook response");
                Err(DeliveryError::Internal(e.to_string()))
            }
        }
    }

    /// GET the health endpoint. Diagnostics only: the outcome feeds the
    /// status report and nothing else.
    pub async fn probe_health(&self) -> ProbeOutcome {
        let url = self.health_url();
        debug!(url = %url, "probing dashboard health");

        let sent = self.http.get(&url).timeout(self.probe_timeout).send().await;

        match sent {
            Ok(response) if response.status().as_u16() == 200 => ProbeOutcome::Reachable,
            Ok(response) => ProbeOutcome::BadStatus(response.status().as_u16()),
            Err(e) => ProbeOutcome::Unreachable(e.to_string()),
        }
    }
}

/// Clip a response body to [`BODY_EXCERPT_LEN`] characters for diagnostics.
fn excerpt(body: &str) -> String {
    if body.chars().count() <= BODY_EXCERPT_LEN {
        body.to_owned()
    } else {
        let clipped: String = body.chars().take(BODY_EXCERPT_LEN).collect();
        format!("{clipped}...")
    }
}
