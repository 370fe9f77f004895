//! Typed messages decoded from inbound topics.
//!
//! The parser produces exactly one `Message` per accepted network event.
//! A message is constructed once, optionally re-flagged as retained, handed
//! to dispatch once, and then discarded; the state it describes is persisted
//! by collaborators outside this crate.

mod attribute;
mod extension;
mod property;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use attribute::{
    AttributeValue, ChannelAttribute, ChannelAttributeName, DeviceAttribute, DeviceAttributeName,
};
pub use extension::{Extension, ExtensionAttribute, ExtensionParameter};
pub use property::{
    ChannelProperty, ColorModel, DataType, DeviceProperty, Format, PropertyAttribute,
    PropertyAttributeName,
};

use crate::identifier::{ConnectorId, DeviceId};

/// A decoded inbound message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Message {
    DeviceAttribute(DeviceAttribute),
    ChannelAttribute(ChannelAttribute),
    ExtensionAttribute(ExtensionAttribute),
    DeviceProperty(DeviceProperty),
    ChannelProperty(ChannelProperty),
}

/// Variant tag used by consumer dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    DeviceAttribute,
    ChannelAttribute,
    ExtensionAttribute,
    DeviceProperty,
    ChannelProperty,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DeviceAttribute => "device-attribute",
            Self::ChannelAttribute => "channel-attribute",
            Self::ExtensionAttribute => "extension-attribute",
            Self::DeviceProperty => "device-property",
            Self::ChannelProperty => "channel-property",
        };

        write!(f, "{name}")
    }
}

impl Message {
    /// Variant tag for dispatch.
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::DeviceAttribute(_) => MessageKind::DeviceAttribute,
            Self::ChannelAttribute(_) => MessageKind::ChannelAttribute,
            Self::ExtensionAttribute(_) => MessageKind::ExtensionAttribute,
            Self::DeviceProperty(_) => MessageKind::DeviceProperty,
            Self::ChannelProperty(_) => MessageKind::ChannelProperty,
        }
    }

    /// Connector the message was received for.
    pub fn connector(&self) -> &ConnectorId {
        match self {
            Self::DeviceAttribute(message) => &message.connector,
            Self::ChannelAttribute(message) => &message.connector,
            Self::ExtensionAttribute(message) => &message.connector,
            Self::DeviceProperty(message) => &message.connector,
            Self::ChannelProperty(message) => &message.connector,
        }
    }

    /// Device the message addresses. When the topic addressed a `$child`
    /// device this is the child; the parent is available via [`Self::parent`].
    pub fn device(&self) -> &DeviceId {
        match self {
            Self::DeviceAttribute(message) => &message.device,
            Self::ChannelAttribute(message) => &message.device,
            Self::ExtensionAttribute(message) => &message.device,
            Self::DeviceProperty(message) => &message.device,
            Self::ChannelProperty(message) => &message.device,
        }
    }

    /// Parent device for child-addressed topics.
    pub fn parent(&self) -> Option<&DeviceId> {
        match self {
            Self::DeviceAttribute(message) => message.parent.as_ref(),
            Self::ChannelAttribute(message) => message.parent.as_ref(),
            Self::ExtensionAttribute(message) => message.parent.as_ref(),
            Self::DeviceProperty(message) => message.parent.as_ref(),
            Self::ChannelProperty(message) => message.parent.as_ref(),
        }
    }

    /// Whether the broker replayed this message from its retained store.
    pub fn retained(&self) -> bool {
        match self {
            Self::DeviceAttribute(message) => message.retained,
            Self::ChannelAttribute(message) => message.retained,
            Self::ExtensionAttribute(message) => message.retained,
            Self::DeviceProperty(message) => message.retained,
            Self::ChannelProperty(message) => message.retained,
        }
    }

    pub fn set_retained(&mut self, retained: bool) {
        match self {
            Self::DeviceAttribute(message) => message.retained = retained,
            Self::ChannelAttribute(message) => message.retained = retained,
            Self::ExtensionAttribute(message) => message.retained = retained,
            Self::DeviceProperty(message) => message.retained = retained,
            Self::ChannelProperty(message) => message.retained = retained,
        }
    }
}
