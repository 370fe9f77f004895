//! Structural validation of topics against the v1 convention.
//!
//! The validator answers "could this topic mean anything to us" with cheap
//! boolean segment walks, so callers can discard broker-system or foreign
//! traffic before paying for the parser's full decoding pass. Every
//! predicate is pure and never allocates beyond the segment split.

use crate::constants::API_V1_VERSION;
use crate::identifier::is_valid_identifier;
use crate::message::{
    ChannelAttributeName, DeviceAttributeName, Extension, ExtensionParameter,
    PropertyAttributeName,
};

/// Check the fixed convention prefix (`/fb/...`).
pub fn validate_convention(topic: &str) -> bool {
    topic.starts_with("/fb/")
}

/// Check the protocol version segment.
///
/// Unknown or future versions yield `false` without raising or logging
/// anything; other handlers may claim those topics.
pub fn validate_version(topic: &str) -> bool {
    topic.starts_with("/fb/v1/")
}

/// Check whether the topic is a write command reflected by the broker.
///
/// Command topics are produced by this connector, never consumed by it.
pub fn is_command(topic: &str) -> bool {
    topic.ends_with("/set")
}

/// Full grammar check against every shape of the v1 convention.
pub fn validate(topic: &str) -> bool {
    if is_command(topic) || !validate_convention(topic) || !validate_version(topic) {
        return false;
    }

    validate_device_attribute(topic)
        || validate_device_hardware_info(topic)
        || validate_device_firmware_info(topic)
        || validate_device_property(topic)
        || (validate_channel_part(topic)
            && (validate_channel_attribute(topic) || validate_channel_property(topic)))
}

/// TOPIC: /fb/v1/<device>/$<attribute>
pub fn validate_device_attribute(topic: &str) -> bool {
    matches!(
        scope_tail(topic).as_deref(),
        Some([token]) if attribute_token(token).and_then(DeviceAttributeName::from_token).is_some()
    )
}

/// TOPIC: /fb/v1/<device>/$hw/<parameter>
pub fn validate_device_hardware_info(topic: &str) -> bool {
    validate_extension(topic, Extension::Hardware)
}

/// TOPIC: /fb/v1/<device>/$fw/<parameter>
pub fn validate_device_firmware_info(topic: &str) -> bool {
    validate_extension(topic, Extension::Firmware)
}

/// TOPIC: /fb/v1/<device>/$property/<property>[/$<attribute>]
pub fn validate_device_property(topic: &str) -> bool {
    match scope_tail(topic).as_deref() {
        Some(["$property", property]) => is_valid_identifier(property),
        Some(["$property", property, attribute]) => {
            is_valid_identifier(property) && is_property_attribute(attribute)
        }
        _ => false,
    }
}

/// TOPIC: /fb/v1/<device>/$channel/<channel>/...
pub fn validate_channel_part(topic: &str) -> bool {
    matches!(
        scope_tail(topic).as_deref(),
        Some(["$channel", channel, _, ..]) if is_valid_identifier(channel)
    )
}

/// TOPIC: /fb/v1/<device>/$channel/<channel>/$<attribute>
pub fn validate_channel_attribute(topic: &str) -> bool {
    matches!(
        scope_tail(topic).as_deref(),
        Some(["$channel", channel, token])
            if is_valid_identifier(channel)
                && attribute_token(token).and_then(ChannelAttributeName::from_token).is_some()
    )
}

/// TOPIC: /fb/v1/<device>/$channel/<channel>/$property/<property>[/$<attribute>]
pub fn validate_channel_property(topic: &str) -> bool {
    match scope_tail(topic).as_deref() {
        Some(["$channel", channel, "$property", property]) => {
            is_valid_identifier(channel) && is_valid_identifier(property)
        }
        Some(["$channel", channel, "$property", property, attribute]) => {
            is_valid_identifier(channel)
                && is_valid_identifier(property)
                && is_property_attribute(attribute)
        }
        _ => false,
    }
}

fn validate_extension(topic: &str, extension: Extension) -> bool {
    let marker = match extension {
        Extension::Hardware => "$hw",
        Extension::Firmware => "$fw",
    };

    matches!(
        scope_tail(topic).as_deref(),
        Some([found, parameter])
            if *found == marker
                && ExtensionParameter::from_token(parameter)
                    .is_some_and(|parameter| extension.allows(parameter))
    )
}

/// Segments after the device scope — prefix, version, device id, and the
/// optional `$child/<child-id>` pair are consumed and checked here.
fn scope_tail(topic: &str) -> Option<Vec<&str>> {
    let mut segments = topic.split('/');

    if segments.next() != Some("") || segments.next() != Some("fb") || segments.next() != Some(API_V1_VERSION) {
        return None;
    }

    let device = segments.next()?;

    if !is_valid_identifier(device) {
        return None;
    }

    let rest: Vec<&str> = segments.collect();

    if rest.first() == Some(&"$child") {
        let child = rest.get(1)?;

        if !is_valid_identifier(child) {
            return None;
        }

        Some(rest[2..].to_vec())
    } else {
        Some(rest)
    }
}

fn attribute_token(segment: &str) -> Option<&str> {
    segment.strip_prefix('$')
}

fn is_property_attribute(segment: &str) -> bool {
    attribute_token(segment)
        .and_then(PropertyAttributeName::from_token)
        .is_some()
}
