//! # fbmqtt-protocol
//!
//! Codec for the FB MQTT v1 topic convention. Topics are directory-like
//! paths that encode the protocol structure; this crate translates between
//! those paths and a closed set of typed domain messages, and back again
//! for outbound write commands.
//!
//! ## Usage
//!
//! ### Validating and parsing inbound topics
//! ```rust
//! use fbmqtt_protocol::{parser, validator, ConnectorId};
//! use uuid::Uuid;
//!
//! let connector = ConnectorId::from(Uuid::new_v4());
//! let topic = "/fb/v1/device-name/$property/uptime";
//!
//! if validator::validate(topic) {
//!     let message = parser::parse(connector, topic, "3600", false)?;
//!     assert_eq!(message.device().as_str(), "device-name");
//! }
//! # Ok::<(), fbmqtt_protocol::ParseError>(())
//! ```
//!
//! ### Building outbound commands
//! ```rust
//! use fbmqtt_protocol::{builder, ControlName, DeviceId, PropertyId};
//!
//! let device = DeviceId::parse("device-name")?;
//! let property = PropertyId::parse("brightness")?;
//!
//! let publication = builder::device_property_write(&device, &property, None, "50");
//! assert_eq!(publication.topic, "/fb/v1/device-name/$property/brightness/set");
//! # Ok::<(), fbmqtt_protocol::IdentifierError>(())
//! ```

pub mod builder;
pub mod constants;
pub mod error;
pub mod identifier;
pub mod message;
pub mod parser;
pub mod payload;
pub mod validator;

// Re-export error types for convenient top-level access
pub use error::{BuildError, IdentifierError, ParseError, ParseResult};

// Re-export identity types for convenient top-level access
pub use identifier::{ChannelId, ConnectorId, DeviceId, PropertyId};

// Re-export the message model for convenient top-level access
pub use message::{
    AttributeValue, ChannelAttribute, ChannelAttributeName, ChannelProperty, ColorModel, DataType,
    DeviceAttribute, DeviceAttributeName, DeviceProperty, Extension, ExtensionAttribute,
    ExtensionParameter, Format, Message, MessageKind, PropertyAttribute, PropertyAttributeName,
};

// Re-export builder output types for convenient top-level access
pub use builder::{ControlName, Publication};
pub use constants::Qos;
