//! Host capability traits.
//!
//! The relay runs inside a larger bot process and needs two services only
//! the host can provide:
//!
//! - [`CommandParser`] -- recognizes messages the host's own command
//!   dispatcher will consume, so command traffic is not relayed as mail
//! - [`OriginRegistry`] -- senders the host has independently blocked
//!
//! Both are injected at construction as trait objects. A host without a
//! block list injects [`NoBlockedOrigins`] rather than being probed for
//! support at runtime.

use async_trait::async_trait;

use dashrelay_types::event::InboundMessage;

/// Recognizes command invocations among inbound messages.
///
/// Parsing may require host state (prefix config, registered command
/// names), so the check is async and delegated wholesale.
#[async_trait]
pub trait CommandParser: Send + Sync {
    /// Whether the host parses `msg` as a valid command invocation.
    async fn is_command(&self, msg: &InboundMessage) -> bool;
}

/// Senders the host refuses to serve.
pub trait OriginRegistry: Send + Sync {
    /// Whether messages from `origin_id` must be dropped unrelayed.
    fn is_blocked(&self, origin_id: &str) -> bool;
}

/// Null [`OriginRegistry`]: nothing is ever blocked.
pub struct NoBlockedOrigins;

impl OriginRegistry for NoBlockedOrigins {
    fn is_blocked(&self, _origin_id: &str) -> bool {
        false
    }
}
