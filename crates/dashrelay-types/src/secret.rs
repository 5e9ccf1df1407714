//! Masked wrapper for the shared webhook secret.
//!
//! The secret rides on every outbound request as a header, so it passes
//! through config structs, status snapshots, and Debug-formatted log fields.
//! [`SecretString`] masks it everywhere except [`expose()`](SecretString::expose).

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A secret that formats and serializes as a mask, never as its value.
///
/// - `Debug` and `Display` print `***` (empty secrets print as empty)
/// - `Serialize` always emits `""`
/// - `Deserialize` accepts a plain string, so config files stay ordinary
#[derive(Clone, Default)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The real value. Call only at the point of use, e.g. when setting
    /// the request header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether no secret is configured. Drives the `Secret Configured`
    /// line of the status report.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "\"\"")
        } else {
            write!(f, "\"***\"")
        }
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            Ok(())
        } else {
            write!(f, "***")
        }
    }
}

impl Serialize for SecretString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Round-tripping a config through serde must not write the secret out.
        serializer.serialize_str("")
    }
}

impl<'de> Deserialize<'de> for SecretString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(SecretString)
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        SecretString(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        SecretString(value.to_owned())
    }
}

impl PartialEq for SecretString {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for SecretString {}
