//! # dashrelay-types
//!
//! Core type definitions for the dashrelay plugin.
//!
//! This crate is pure data: no I/O, no runtime. It contains:
//!
//! - **[`event`]** -- inbound messages as the host surfaces them
//! - **[`record`]** -- the wire-ready payload POSTed to the dashboard
//! - **[`outcome`]** -- the delivery outcome taxonomy
//! - **[`config`]** -- the relay's config section
//! - **[`secret`]** -- masked wrapper for the shared webhook secret

pub mod config;
pub mod event;
pub mod outcome;
pub mod record;
pub mod secret;

pub use config::RelayConfig;
pub use event::{Attachment, ChannelKind, InboundMessage};
pub use outcome::{DeliveryError, DeliveryResult, Receipt};
pub use record::{AttachmentRecord, TransportRecord};
pub use secret::SecretString;
