//! The relay plugin: lifecycle, message listener, and admin commands.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use dashrelay_types::config::RelayConfig;
use dashrelay_types::event::{ChannelKind, InboundMessage};
use dashrelay_types::outcome::DeliveryResult;
use dashrelay_types::record::TransportRecord;

use crate::commands::{CommandSpec, StatusReport, command_specs};
use crate::traits::{CommandParser, NoBlockedOrigins, OriginRegistry};
use crate::webhook::WebhookClient;

/// Body prefix marking test sends on the dashboard side.
const TEST_PREFIX: &str = "[TEST] ";

/// Display-name suffix marking test sends.
const TEST_NAME_SUFFIX: &str = " (TEST)";

/// Body used when a test send carries no caller-supplied text.
const DEFAULT_TEST_TEXT: &str = "Test message from bot";

/// The dashboard relay plugin.
///
/// The host constructs one instance at startup and keeps it for its own
/// lifetime:
///
/// 1. [`new`](Self::new) wires the host's [`CommandParser`] (and optionally
///    an [`OriginRegistry`] via [`with_origin_registry`](Self::with_origin_registry)).
/// 2. The host registers the descriptors from [`commands`](Self::commands)
///    and routes the two admin commands to [`status`](Self::status) and
///    [`send_test`](Self::send_test).
/// 3. The host calls [`on_message`](Self::on_message) once per inbound
///    message, from as many tasks as it likes.
/// 4. [`shutdown`](Self::shutdown) closes the delivery client.
pub struct DashboardRelay {
    webhook: WebhookClient,
    parser: Arc<dyn CommandParser>,
    registry: Arc<dyn OriginRegistry>,
}

impl DashboardRelay {
    /// Create the relay. No origin is blocked until a registry is attached
    /// with [`with_origin_registry`](Self::with_origin_registry).
    pub fn new(config: &RelayConfig, parser: Arc<dyn CommandParser>) -> Self {
        info!(
            endpoint = %config.webhook_url,
            "dashboard relay initialized, forwarding direct messages"
        );
        Self {
            webhook: WebhookClient::new(config),
            parser,
            registry: Arc::new(NoBlockedOrigins),
        }
    }

    /// Attach the host's blocked-origin registry.
    pub fn with_origin_registry(mut self, registry: Arc<dyn OriginRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// The command descriptors the host should register.
    pub fn commands(&self) -> Vec<CommandSpec> {
        command_specs()
    }

    /// Close the delivery client. Deliveries after this are refused
    /// without network I/O.
    pub fn shutdown(&self) {
        self.webhook.close();
        info!("dashboard relay shut down");
    }

    /// Listener entry point, called by the host once per inbound message.
    ///
    /// Applies the filters in order (bot author, non-direct channel,
    /// command traffic, blocked origin) and relays whatever survives.
    /// Delivery failures are logged and swallowed: the sender never sees
    /// an error, and nothing is retried.
    pub async fn on_message(&self, msg: &InboundMessage) {
        // Skip bot messages to avoid loops.
        if msg.author_is_bot {
            debug!(author = %msg.author_name, "skipping bot message");
            return;
        }

        if msg.channel != ChannelKind::Direct {
            debug!(channel = ?msg.channel, "skipping non-direct message");
            return;
        }

        // Command traffic belongs to the host's dispatcher, not the dashboard.
        if self.parser.is_command(msg).await {
            debug!(author = %msg.author_name, "skipping command invocation");
            return;
        }

        if self.registry.is_blocked(&msg.author_id) {
            debug!(author_id = %msg.author_id, "skipping blocked origin");
            return;
        }

        let record = TransportRecord::from_message(msg);
        if let Err(e) = self.webhook.deliver(&record).await {
            warn!(
                author = %msg.author_name,
                author_id = %msg.author_id,
                error = %e,
                "failed to forward direct message to dashboard"
            );
        }
    }

    /// Build the status report for the `dashboard_status` command.
    ///
    /// Probes the health endpoint live when an endpoint is configured;
    /// otherwise the report says so and skips the probe.
    pub async fn status(&self) -> StatusReport {
        let endpoint = self.webhook.endpoint();
        let probe = if endpoint.is_empty() {
            None
        } else {
            Some(self.webhook.probe_health().await)
        };
        StatusReport {
            endpoint: (!endpoint.is_empty()).then(|| endpoint.to_owned()),
            secret_configured: self.webhook.has_secret(),
            connection_open: self.webhook.is_open(),
            probe,
            generated_at: Utc::now(),
        }
    }

    /// Relay a synthetic message for the `test_dashboard` command.
    ///
    /// The synthetic event reuses the invoking caller's identity, prefixes
    /// the body, and suffixes the display name so the dashboard can tell
    /// test traffic from real mail. It runs through the same build-and-
    /// deliver path as a real message; the outcome is returned to the
    /// caller instead of being swallowed.
    pub async fn send_test(&self, invoker: &InboundMessage, text: Option<&str>) -> DeliveryResult {
        let body = text.unwrap_or(DEFAULT_TEST_TEXT);
        let synthetic = InboundMessage {
            author_id: invoker.author_id.clone(),
            author_name: format!("{}{TEST_NAME_SUFFIX}", invoker.author_name),
            author_is_bot: false,
            channel: ChannelKind::Direct,
            content: format!("{TEST_PREFIX}{body}"),
            message_id: invoker.message_id.clone(),
            avatar_url: invoker.avatar_url.clone(),
            attachments: Vec::new(),
        };

        debug!(author_id = %invoker.author_id, "sending test message to dashboard");
        let record = TransportRecord::from_message(&synthetic);
        self.webhook.deliver(&record).await
    }
}
