//! Admin command surface: descriptors for the host registrar and the
//! status report the `dashboard_status` command renders.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::webhook::ProbeOutcome;

/// Display length the endpoint is clipped to in the status report.
const ENDPOINT_DISPLAY_LEN: usize = 50;

/// Display length probe failure messages are clipped to.
const PROBE_ERROR_DISPLAY_LEN: usize = 50;

/// Describes one command for the host's registrar.
///
/// Both relay commands are administrator-only; the host enforces the gate
/// this descriptor declares before routing an invocation to the relay.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Primary command name.
    pub name: &'static str,
    /// Short alternative names.
    pub aliases: &'static [&'static str],
    /// One-line description for the host's help output.
    pub description: &'static str,
    /// Whether only administrator-equivalent callers may invoke it.
    pub admin_only: bool,
}

/// The relay's command descriptors, ready for registration.
pub fn command_specs() -> Vec<CommandSpec> {
    vec![
        CommandSpec {
            name: "dashboard_status",
            aliases: &["dstatus"],
            description: "Check the dashboard webhook connection status",
            admin_only: true,
        },
        CommandSpec {
            name: "test_dashboard",
            aliases: &["tdash"],
            description: "Send a test message to the dashboard webhook",
            admin_only: true,
        },
    ]
}

/// Snapshot of the relay's configuration and reachability.
///
/// Rendered for the invoking administrator via `Display`. The secret is
/// reported as configured or not, never by value.
#[derive(Debug, Clone)]
pub struct StatusReport {
    /// Configured endpoint; `None` when delivery is disabled.
    pub endpoint: Option<String>,
    /// Whether a non-empty shared secret is configured.
    pub secret_configured: bool,
    /// Whether the delivery client is still open.
    pub connection_open: bool,
    /// Live probe outcome; `None` when no endpoint is configured.
    pub probe: Option<ProbeOutcome>,
    /// When this snapshot was taken.
    pub generated_at: DateTime<Utc>,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Dashboard Webhook Status ({})",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        match &self.endpoint {
            Some(url) => writeln!(f, "Webhook URL: {}", clip(url, ENDPOINT_DISPLAY_LEN))?,
            None => writeln!(f, "Webhook URL: Not configured")?,
        }
        writeln!(f, "Secret Configured: {}", yes_no(self.secret_configured))?;
        writeln!(f, "Connection Open: {}", yes_no(self.connection_open))?;
        match &self.probe {
            Some(ProbeOutcome::Reachable) => {
                writeln!(f, "Connection Test: endpoint reachable")?;
            }
            Some(ProbeOutcome::BadStatus(code)) => {
                writeln!(f, "Connection Test: status {code}")?;
            }
            Some(ProbeOutcome::Unreachable(reason)) => {
                writeln!(
                    f,
                    "Connection Test: failed: {}",
                    clip(reason, PROBE_ERROR_DISPLAY_LEN)
                )?;
            }
            None => {}
        }
        Ok(())
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_owned()
    } else {
        let clipped: String = text.chars().take(max).collect();
        format!("{clipped}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> StatusReport {
        StatusReport {
            endpoint: Some("https://hooks.example/functions/v1/ingest".into()),
            secret_configured: true,
            connection_open: true,
            probe: Some(ProbeOutcome::Reachable),
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn descriptors_cover_both_commands() {
        let specs = command_specs();
        assert_eq!(specs.len(), 2);
        assert!(specs.iter().all(|spec| spec.admin_only));

        let status = specs.iter().find(|s| s.name == "dashboard_status").unwrap();
        assert_eq!(status.aliases, &["dstatus"]);

        let test = specs.iter().find(|s| s.name == "test_dashboard").unwrap();
        assert_eq!(test.aliases, &["tdash"]);
    }

    #[test]
    fn report_renders_all_lines() {
        let rendered = report().to_string();
        assert!(rendered.contains("Dashboard Webhook Status"));
        assert!(rendered.contains("Webhook URL: https://hooks.example/functions/v1/ingest"));
        assert!(rendered.contains("Secret Configured: Yes"));
        assert!(rendered.contains("Connection Open: Yes"));
        assert!(rendered.contains("Connection Test: endpoint reachable"));
    }

    #[test]
    fn report_without_endpoint_skips_the_probe_line() {
        let rendered = StatusReport {
            endpoint: None,
            secret_configured: false,
            connection_open: true,
            probe: None,
            generated_at: Utc::now(),
        }
        .to_string();
        assert!(rendered.contains("Webhook URL: Not configured"));
        assert!(rendered.contains("Secret Configured: No"));
        assert!(!rendered.contains("Connection Test"));
    }

    #[test]
    fn long_endpoint_is_clipped_for_display() {
        let mut r = report();
        let long_url = format!("https://hooks.example/{}", "a".repeat(100));
        r.endpoint = Some(long_url);
        let rendered = r.to_string();
        let url_line = rendered
            .lines()
            .find(|line| line.starts_with("Webhook URL:"))
            .unwrap();
        assert!(url_line.len() <= "Webhook URL: ".len() + ENDPOINT_DISPLAY_LEN + 3);
        assert!(url_line.ends_with("..."));
    }

    #[test]
    fn probe_failure_reason_is_clipped() {
        let mut r = report();
        r.probe = Some(ProbeOutcome::Unreachable("e".repeat(120)));
        let rendered = r.to_string();
        let line = rendered
            .lines()
            .find(|line| line.starts_with("Connection Test:"))
            .unwrap();
        assert!(line.ends_with("..."));
        assert!(line.len() < 120);
    }

    #[test]
    fn bad_status_probe_renders_the_code() {
        let mut r = report();
        r.probe = Some(ProbeOutcome::BadStatus(503));
        assert!(r.to_string().contains("Connection Test: status 503"));
    }
}
