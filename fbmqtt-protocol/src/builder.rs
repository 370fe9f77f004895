//! Construction of outbound command topics and payloads.
//!
//! The inverse of the parser: given a write intent, produce the canonical
//! `…/set` topic plus the payload the transport should publish. All
//! publications default to QoS 1 and are never retained.

use serde::{Deserialize, Serialize};

use crate::constants::{Qos, PAYLOAD_BOOL_TRUE};
use crate::error::BuildError;
use crate::identifier::{ChannelId, DeviceId, PropertyId};

/// Control commands a device or channel accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlName {
    Config,
    Reset,
    Reconnect,
    FactoryReset,
}

impl ControlName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Reset => "reset",
            Self::Reconnect => "reconnect",
            Self::FactoryReset => "factory-reset",
        }
    }
}

impl std::fmt::Display for ControlName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outbound message ready to hand to the MQTT transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub topic: String,
    pub payload: String,
    pub qos: Qos,
    pub retained: bool,
}

impl Publication {
    fn new(topic: String, payload: String) -> Self {
        Self {
            topic,
            payload,
            qos: Qos::default(),
            retained: false,
        }
    }
}

/// Write a device property value.
///
/// TOPIC: /fb/v1/D/$property/R/set (or /fb/v1/P/$child/D/$property/R/set)
pub fn device_property_write(
    device: &DeviceId,
    property: &PropertyId,
    parent: Option<&DeviceId>,
    payload: impl Into<String>,
) -> Publication {
    Publication::new(
        format!("/fb/v1/{}/$property/{property}/set", device_scope(device, parent)),
        payload.into(),
    )
}

/// Write a channel property value.
///
/// TOPIC: /fb/v1/D/$channel/C/$property/R/set
pub fn channel_property_write(
    device: &DeviceId,
    channel: &ChannelId,
    property: &PropertyId,
    parent: Option<&DeviceId>,
    payload: impl Into<String>,
) -> Publication {
    Publication::new(
        format!(
            "/fb/v1/{}/$channel/{channel}/$property/{property}/set",
            device_scope(device, parent)
        ),
        payload.into(),
    )
}

/// Trigger a device control command.
///
/// TOPIC: /fb/v1/D/$control/K/set — the payload is the fixed `"true"`
/// literal; configuration commands carry a JSON document instead, see
/// [`device_configuration`].
pub fn device_command(device: &DeviceId, parent: Option<&DeviceId>, control: ControlName) -> Publication {
    Publication::new(
        format!("/fb/v1/{}/$control/{control}/set", device_scope(device, parent)),
        PAYLOAD_BOOL_TRUE.to_string(),
    )
}

/// Push a configuration document to a device.
///
/// TOPIC: /fb/v1/D/$control/config/set — the payload is the JSON-encoded
/// configuration. An encoding failure aborts this single publication;
/// nothing reaches the transport.
pub fn device_configuration<C: Serialize>(
    device: &DeviceId,
    parent: Option<&DeviceId>,
    configuration: &C,
) -> Result<Publication, BuildError> {
    let payload = serde_json::to_string(configuration)?;

    Ok(Publication::new(
        format!(
            "/fb/v1/{}/$control/{}/set",
            device_scope(device, parent),
            ControlName::Config
        ),
        payload,
    ))
}

/// Push a configuration document to a channel.
///
/// TOPIC: /fb/v1/D/$channel/C/$control/config/set
pub fn channel_configuration<C: Serialize>(
    device: &DeviceId,
    channel: &ChannelId,
    parent: Option<&DeviceId>,
    configuration: &C,
) -> Result<Publication, BuildError> {
    let payload = serde_json::to_string(configuration)?;

    Ok(Publication::new(
        format!(
            "/fb/v1/{}/$channel/{channel}/$control/{}/set",
            device_scope(device, parent),
            ControlName::Config
        ),
        payload,
    ))
}

/// Device path segment(s) — parent-addressed devices are reached through
/// `$child`.
fn device_scope(device: &DeviceId, parent: Option<&DeviceId>) -> String {
    match parent {
        Some(parent) => format!("{parent}/$child/{device}"),
        None => device.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn device() -> DeviceId {
        DeviceId::parse("device-name").unwrap()
    }

    fn parent() -> DeviceId {
        DeviceId::parse("parent-device").unwrap()
    }

    #[test]
    fn test_device_property_write_topic() {
        let property = PropertyId::parse("brightness").unwrap();

        let publication = device_property_write(&device(), &property, None, "50");
        assert_eq!(publication.topic, "/fb/v1/device-name/$property/brightness/set");
        assert_eq!(publication.payload, "50");
        assert_eq!(publication.qos, Qos::AtLeastOnce);
        assert!(!publication.retained);

        let publication = device_property_write(&device(), &property, Some(&parent()), "50");
        assert_eq!(
            publication.topic,
            "/fb/v1/parent-device/$child/device-name/$property/brightness/set"
        );
    }

    #[test]
    fn test_channel_property_write_topic() {
        let channel = ChannelId::parse("channel-one").unwrap();
        let property = PropertyId::parse("temperature").unwrap();

        let publication = channel_property_write(&device(), &channel, &property, None, "21.5");
        assert_eq!(
            publication.topic,
            "/fb/v1/device-name/$channel/channel-one/$property/temperature/set"
        );

        let publication = channel_property_write(&device(), &channel, &property, Some(&parent()), "21.5");
        assert_eq!(
            publication.topic,
            "/fb/v1/parent-device/$child/device-name/$channel/channel-one/$property/temperature/set"
        );
    }

    #[test]
    fn test_device_command_payload_is_fixed_literal() {
        let publication = device_command(&device(), None, ControlName::Reset);
        assert_eq!(publication.topic, "/fb/v1/device-name/$control/reset/set");
        assert_eq!(publication.payload, "true");

        let publication = device_command(&device(), Some(&parent()), ControlName::FactoryReset);
        assert_eq!(
            publication.topic,
            "/fb/v1/parent-device/$child/device-name/$control/factory-reset/set"
        );
        assert_eq!(publication.payload, "true");

        let publication = device_command(&device(), None, ControlName::Reconnect);
        assert_eq!(publication.topic, "/fb/v1/device-name/$control/reconnect/set");
    }

    #[test]
    fn test_device_configuration_encodes_json() {
        let configuration = BTreeMap::from([("interval", 30), ("threshold", 5)]);

        let publication = device_configuration(&device(), None, &configuration).unwrap();
        assert_eq!(publication.topic, "/fb/v1/device-name/$control/config/set");
        assert_eq!(publication.payload, r#"{"interval":30,"threshold":5}"#);
    }

    #[test]
    fn test_channel_configuration_topic() {
        let channel = ChannelId::parse("channel-one").unwrap();
        let configuration = BTreeMap::from([("mode", "auto")]);

        let publication = channel_configuration(&device(), &channel, None, &configuration).unwrap();
        assert_eq!(
            publication.topic,
            "/fb/v1/device-name/$channel/channel-one/$control/config/set"
        );
        assert_eq!(publication.payload, r#"{"mode":"auto"}"#);

        let publication =
            channel_configuration(&device(), &channel, Some(&parent()), &configuration).unwrap();
        assert_eq!(
            publication.topic,
            "/fb/v1/parent-device/$child/device-name/$channel/channel-one/$control/config/set"
        );
    }

    #[test]
    fn test_configuration_encoding_failure_aborts_publication() {
        // Maps with non-string keys cannot be encoded as JSON objects.
        let configuration = BTreeMap::from([(vec![1u8], "value")]);

        let result = device_configuration(&device(), None, &configuration);
        assert!(matches!(result, Err(BuildError::Encoding(_))));
    }

    #[test]
    fn test_control_name_tokens() {
        assert_eq!(ControlName::Config.as_str(), "config");
        assert_eq!(ControlName::Reset.as_str(), "reset");
        assert_eq!(ControlName::Reconnect.as_str(), "reconnect");
        assert_eq!(ControlName::FactoryReset.as_str(), "factory-reset");
    }
}
