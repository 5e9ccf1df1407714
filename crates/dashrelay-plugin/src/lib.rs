//! # dashrelay-plugin
//!
//! In-process plugin that forwards inbound direct messages to an external
//! dashboard over a single webhook POST.
//!
//! The host wires it up with a [`RelayConfig`](types::RelayConfig) and its
//! [`CommandParser`] (plus an optional [`OriginRegistry`]), then:
//!
//! - calls [`DashboardRelay::on_message`] for every inbound message;
//! - registers the descriptors from [`DashboardRelay::commands`] and routes
//!   the two admin commands to [`status`](DashboardRelay::status) and
//!   [`send_test`](DashboardRelay::send_test).
//!
//! Delivery is best-effort: one POST per surviving message, bounded by a
//! timeout, classified into [`DeliveryError`](types::DeliveryError), never
//! retried. Senders are never shown a delivery failure.
//!
//! ```text
//! host event --> DashboardRelay::on_message
//!                  | filters: bot author, non-direct, command, blocked
//!                  v
//!         TransportRecord::from_message
//!                  v
//!         WebhookClient::deliver --POST--> dashboard
//! ```

pub mod commands;
pub mod relay;
pub mod traits;
pub mod webhook;

pub use commands::{CommandSpec, StatusReport};
pub use relay::DashboardRelay;
pub use traits::{CommandParser, NoBlockedOrigins, OriginRegistry};
pub use webhook::{ProbeOutcome, SECRET_HEADER, WebhookClient};

/// Re-export of the types crate, so hosts can depend on this crate alone.
pub use dashrelay_types as types;
