//! Inbound message events as surfaced by the host process.

use serde::{Deserialize, Serialize};

/// Where a message arrived, as classified by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    /// One-to-one conversation with the bot.
    Direct,
    /// Private multi-party group.
    Group,
    /// Public channel on a server.
    Public,
}

/// One attachment on an inbound message.
///
/// Attachments travel by reference: the relay forwards the URL and metadata
/// and never touches the bytes behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Retrievable URL of the attachment content.
    pub url: String,
    /// Original filename.
    pub filename: String,
    /// Declared content type, when the host knows one.
    #[serde(default)]
    pub content_type: Option<String>,
    /// Size in bytes.
    pub size: u64,
}

/// An inbound message handed to the relay by the host, one per event.
///
/// The host owns the message; relay entry points borrow it and copy out
/// what the wire format needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Stable unique id of the sender. Display names change, this does not.
    pub author_id: String,
    /// Sender display name at the time of the event.
    pub author_name: String,
    /// Whether the sender is an automated account (including this bot).
    #[serde(default)]
    pub author_is_bot: bool,
    /// Conversation kind; only [`ChannelKind::Direct`] messages are relayed.
    pub channel: ChannelKind,
    /// Message text. Empty when the message is attachments-only.
    #[serde(default)]
    pub content: String,
    /// Platform id of the originating message, for downstream correlation.
    pub message_id: String,
    /// Sender avatar URL, when one is set.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Attachments in the order the host surfaced them.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}
