//! Wire-ready payload built from an inbound message.
//!
//! Field names on the wire are fixed by the dashboard's ingestion contract
//! and keep their historical `discord_*` prefixes. Internally everything is
//! named for what it is; serde renames at the boundary.

use serde::{Deserialize, Serialize};

use crate::event::InboundMessage;

/// Body text substituted when a message carries no text at all.
pub const EMPTY_BODY_PLACEHOLDER: &str = "(No text content)";

/// Avatar URL substituted when the sender has none set.
pub const DEFAULT_AVATAR_URL: &str = "https://cdn.discordapp.com/embed/avatars/0.png";

/// Content type recorded for attachments the host could not classify.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// One attachment as it appears in the wire payload.
///
/// Unlike [`Attachment`](crate::event::Attachment), the content type is
/// always present; unknown types are defaulted at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRecord {
    pub url: String,
    pub filename: String,
    pub content_type: String,
    pub size: u64,
}

/// The normalized record POSTed to the dashboard, one per relayed message.
///
/// Built once, sent once, dropped. Nothing here is stored or retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportRecord {
    /// Stable sender id.
    #[serde(rename = "discord_user_id")]
    pub origin_id: String,
    /// Sender display name at send time.
    #[serde(rename = "discord_username")]
    pub origin_name: String,
    /// Message body, never empty on the wire.
    pub content: String,
    /// Sender avatar URL, defaulted when unset.
    #[serde(rename = "discord_avatar_url")]
    pub avatar_url: Option<String>,
    /// Originating message id, when the event had one.
    #[serde(rename = "discord_message_id")]
    pub message_id: Option<String>,
    /// Attachment metadata in original order.
    pub attachments: Vec<AttachmentRecord>,
}

impl TransportRecord {
    /// Build the wire record for one inbound message.
    ///
    /// A pure mapping with three substitutions: empty body becomes
    /// [`EMPTY_BODY_PLACEHOLDER`], a missing avatar becomes
    /// [`DEFAULT_AVATAR_URL`], and an unknown attachment content type
    /// becomes [`DEFAULT_CONTENT_TYPE`]. The message itself is not touched.
    pub fn from_message(msg: &InboundMessage) -> Self {
        let content = if msg.content.is_empty() {
            EMPTY_BODY_PLACEHOLDER.to_owned()
        } else {
            msg.content.clone()
        };

        let avatar_url = msg
            .avatar_url
            .clone()
            .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_owned());

        let attachments = msg
            .attachments
            .iter()
            .map(|att| AttachmentRecord {
                url: att.url.clone(),
                filename: att.filename.clone(),
                content_type: att
                    .content_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_owned()),
                size: att.size,
            })
            .collect();

        Self {
            origin_id: msg.author_id.clone(),
            origin_name: msg.author_name.clone(),
            content,
            avatar_url: Some(avatar_url),
            message_id: Some(msg.message_id.clone()),
            attachments,
        }
    }
}
