//! Device and channel attribute messages.

use serde::{Deserialize, Serialize};

use crate::identifier::{ChannelId, ConnectorId, DeviceId};

/// Device-level attribute names the convention allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceAttributeName {
    /// Human readable device name.
    Name,
    /// Connection state announced by the device.
    State,
    /// List of device property identifiers.
    Properties,
    /// List of channel identifiers.
    Channels,
    /// List of announced extensions.
    Extensions,
    /// List of supported controls.
    Controls,
}

impl DeviceAttributeName {
    /// Resolve a topic token (without the `$` marker).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "name" => Some(Self::Name),
            "state" => Some(Self::State),
            "properties" => Some(Self::Properties),
            "channels" => Some(Self::Channels),
            "extensions" => Some(Self::Extensions),
            "controls" => Some(Self::Controls),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::State => "state",
            Self::Properties => "properties",
            Self::Channels => "channels",
            Self::Extensions => "extensions",
            Self::Controls => "controls",
        }
    }

    /// Whether the attribute carries a comma-separated list payload.
    pub fn is_list(self) -> bool {
        matches!(
            self,
            Self::Properties | Self::Channels | Self::Extensions | Self::Controls
        )
    }
}

/// Channel-level attribute names the convention allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelAttributeName {
    Name,
    Properties,
    Controls,
}

impl ChannelAttributeName {
    /// Resolve a topic token (without the `$` marker).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "name" => Some(Self::Name),
            "properties" => Some(Self::Properties),
            "controls" => Some(Self::Controls),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Properties => "properties",
            Self::Controls => "controls",
        }
    }

    /// Whether the attribute carries a comma-separated list payload.
    pub fn is_list(self) -> bool {
        matches!(self, Self::Properties | Self::Controls)
    }
}

/// Normalized attribute payload — either free text or a cleaned list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Text(String),
    List(Vec<String>),
}

/// A device announced one of its attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceAttribute {
    pub connector: ConnectorId,
    pub device: DeviceId,
    /// Parent device when the topic addressed a `$child` device.
    pub parent: Option<DeviceId>,
    pub attribute: DeviceAttributeName,
    pub value: AttributeValue,
    pub retained: bool,
}

/// A device announced an attribute of one of its channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelAttribute {
    pub connector: ConnectorId,
    pub device: DeviceId,
    pub parent: Option<DeviceId>,
    pub channel: ChannelId,
    pub attribute: ChannelAttributeName,
    pub value: AttributeValue,
    pub retained: bool,
}
