//! Identity types for connectors, devices, channels, and properties.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::IdentifierError;

/// Check a topic identifier against the convention charset.
///
/// Identifiers are case-sensitive and lower-case only; upper-case input is
/// rejected rather than folded.
pub(crate) fn is_valid_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'_' | b'.' | b',' | b'-'))
}

/// Macro to generate common identifier implementations
macro_rules! impl_identifier {
    ($name:ident) => {
        impl $name {
            /// Validate and wrap an identifier.
            pub fn parse(value: impl Into<String>) -> Result<Self, IdentifierError> {
                let value = value.into();

                if value.is_empty() {
                    return Err(IdentifierError::Empty);
                }

                if !is_valid_identifier(&value) {
                    return Err(IdentifierError::InvalidCharacters(value));
                }

                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdentifierError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::parse(value)
            }
        }
    };
}

/// Device identifier as it appears in the topic path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceId(String);

impl_identifier!(DeviceId);

/// Channel identifier as it appears in the topic path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelId(String);

impl_identifier!(ChannelId);

/// Property identifier as it appears in the topic path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyId(String);

impl_identifier!(PropertyId);

/// Identity of the connector instance a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectorId(Uuid);

impl ConnectorId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ConnectorId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for ConnectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_convention_charset() {
        for id in ["device-name", "device_2", "a.b,c-d", "0-padded"] {
            assert!(DeviceId::parse(id).is_ok(), "{id} should be accepted");
        }
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(DeviceId::parse(""), Err(IdentifierError::Empty));
    }

    #[test]
    fn test_rejects_upper_case() {
        assert!(matches!(
            DeviceId::parse("Device-Name"),
            Err(IdentifierError::InvalidCharacters(_))
        ));
    }

    #[test]
    fn test_rejects_delimiter_and_space() {
        assert!(DeviceId::parse("first/second").is_err());
        assert!(ChannelId::parse("has space").is_err());
        assert!(PropertyId::parse("$property").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let id = PropertyId::parse("uptime").unwrap();
        assert_eq!(id.to_string(), "uptime");
        assert_eq!(id.as_str(), "uptime");
    }

    #[test]
    fn test_connector_id_wraps_uuid() {
        let raw = Uuid::new_v4();
        let id = ConnectorId::from(raw);
        assert_eq!(id.as_uuid(), &raw);
        assert_eq!(id.to_string(), raw.to_string());
    }
}
