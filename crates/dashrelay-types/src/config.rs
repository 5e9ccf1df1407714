//! Relay configuration, one section of the host's config file.

use serde::{Deserialize, Serialize};

use crate::secret::SecretString;

/// Configuration for the dashboard relay.
///
/// Every field has a default, so an empty `{}` section is valid: the
/// endpoint falls back to the stock dashboard deployment and the secret
/// starts empty (the status command reports that plainly). Hosts that use
/// camelCase config keys are accepted via aliases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Whether the host should activate the relay at all.
    ///
    /// Read by the host when deciding to construct the plugin; the relay
    /// itself does not consult it.
    #[serde(default)]
    pub enabled: bool,

    /// Dashboard endpoint receiving the POSTed records. An empty string
    /// disables delivery without disabling the plugin.
    #[serde(default = "default_webhook_url", alias = "webhookUrl")]
    pub webhook_url: String,

    /// Shared secret sent as the `X-Webhook-Secret` header.
    #[serde(default, alias = "webhookSecret")]
    pub webhook_secret: SecretString,

    /// Per-delivery timeout in seconds.
    #[serde(default = "default_deliver_timeout_secs", alias = "deliverTimeoutSecs")]
    pub deliver_timeout_secs: u64,

    /// Health-probe timeout in seconds. Shorter than delivery: the probe
    /// answers an interactive command.
    #[serde(default = "default_probe_timeout_secs", alias = "probeTimeoutSecs")]
    pub probe_timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            webhook_url: default_webhook_url(),
            webhook_secret: SecretString::default(),
            deliver_timeout_secs: default_deliver_timeout_secs(),
            probe_timeout_secs: default_probe_timeout_secs(),
        }
    }
}

fn default_webhook_url() -> String {
    "https://qlnbergwjfrmgkjhrbkj.supabase.co/functions/v1/discord-modmail-webhook".to_owned()
}

fn default_deliver_timeout_secs() -> u64 {
    10
}

fn default_probe_timeout_secs() -> u64 {
    5
}
