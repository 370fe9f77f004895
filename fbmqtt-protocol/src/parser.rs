//! Decoding of inbound topic/payload pairs into typed messages.
//!
//! The parser walks the topic segments once and dispatches on slice
//! patterns; every "is this the right shape" question is answered with a
//! `Result` value instead of probe-and-catch, so a malformed topic costs a
//! single early return.

use crate::error::{ParseError, ParseResult};
use crate::identifier::{ChannelId, ConnectorId, DeviceId, PropertyId};
use crate::message::{
    AttributeValue, ChannelAttribute, ChannelAttributeName, ChannelProperty, DeviceAttribute,
    DeviceAttributeName, DeviceProperty, Extension, ExtensionAttribute, ExtensionParameter,
    Message, PropertyAttribute, PropertyAttributeName,
};
use crate::payload;
use crate::validator;

/// Scope shared by every message produced from one network event.
struct Scope {
    connector: ConnectorId,
    device: DeviceId,
    parent: Option<DeviceId>,
    retained: bool,
}

/// Decode one inbound network event into exactly one message.
///
/// The caller is expected to have pre-filtered traffic with the validator;
/// the parser still re-checks the grammar and answers
/// [`ParseError::Grammar`] for any topic outside the convention.
pub fn parse(
    connector: ConnectorId,
    topic: &str,
    payload: &str,
    retained: bool,
) -> ParseResult<Message> {
    if validator::is_command(topic)
        || !validator::validate_convention(topic)
        || !validator::validate_version(topic)
    {
        return Err(ParseError::Grammar);
    }

    let mut segments = topic.split('/');

    // Leading empty segment, "fb", and the version token were just checked.
    segments.nth(2);

    let device = identifier::<DeviceId>(segments.next())?;
    let rest: Vec<&str> = segments.collect();

    // `$child` re-anchors the device scope on the nested device.
    let (scope, tail) = if rest.first() == Some(&"$child") {
        let child = identifier::<DeviceId>(rest.get(1).copied())?;

        (
            Scope {
                connector,
                device: child,
                parent: Some(device),
                retained,
            },
            &rest[2..],
        )
    } else {
        (
            Scope {
                connector,
                device,
                parent: None,
                retained,
            },
            &rest[..],
        )
    };

    match tail {
        ["$hw", parameter] => parse_extension(scope, Extension::Hardware, parameter, payload),
        ["$fw", parameter] => parse_extension(scope, Extension::Firmware, parameter, payload),
        ["$property", property] => parse_device_property(scope, property, None, payload),
        ["$property", property, attribute] => {
            parse_device_property(scope, property, Some(attribute), payload)
        }
        ["$channel", channel, tail @ ..] => parse_channel(scope, channel, tail, payload),
        [attribute] => parse_device_attribute(scope, attribute, payload),
        _ => Err(ParseError::Grammar),
    }
}

/// TOPIC: .../$<attribute>
fn parse_device_attribute(scope: Scope, token: &str, payload: &str) -> ParseResult<Message> {
    let attribute = token
        .strip_prefix('$')
        .and_then(DeviceAttributeName::from_token)
        .ok_or(ParseError::Grammar)?;

    let value = attribute_value(attribute == DeviceAttributeName::Name, attribute.is_list(), payload);

    Ok(Message::DeviceAttribute(DeviceAttribute {
        connector: scope.connector,
        device: scope.device,
        parent: scope.parent,
        attribute,
        value,
        retained: scope.retained,
    }))
}

/// TOPIC: .../$hw/<parameter> and .../$fw/<parameter>
fn parse_extension(
    scope: Scope,
    extension: Extension,
    parameter_token: &str,
    payload: &str,
) -> ParseResult<Message> {
    let parameter = ExtensionParameter::from_token(parameter_token).ok_or(ParseError::Grammar)?;

    if !extension.allows(parameter) {
        return Err(ParseError::Grammar);
    }

    let mut value = payload.to_lowercase();

    if parameter == ExtensionParameter::MacAddress {
        value = value.replace(':', "");
    }

    Ok(Message::ExtensionAttribute(ExtensionAttribute {
        connector: scope.connector,
        device: scope.device,
        parent: scope.parent,
        extension,
        parameter,
        value: payload::clean_name(&value),
        retained: scope.retained,
    }))
}

/// TOPIC: .../$property/<property>[/$<attribute>]
fn parse_device_property(
    scope: Scope,
    property_token: &str,
    attribute_token: Option<&str>,
    payload: &str,
) -> ParseResult<Message> {
    let property = identifier::<PropertyId>(Some(property_token))?;
    let (attributes, value) = property_payload(attribute_token, payload)?;

    Ok(Message::DeviceProperty(DeviceProperty {
        connector: scope.connector,
        device: scope.device,
        parent: scope.parent,
        property,
        attributes,
        value,
        retained: scope.retained,
    }))
}

/// TOPIC: .../$channel/<channel>/...
fn parse_channel(scope: Scope, channel_token: &str, tail: &[&str], payload: &str) -> ParseResult<Message> {
    let channel = identifier::<ChannelId>(Some(channel_token))?;

    match tail {
        [token] => {
            let attribute = token
                .strip_prefix('$')
                .and_then(ChannelAttributeName::from_token)
                .ok_or(ParseError::Grammar)?;

            let value =
                attribute_value(attribute == ChannelAttributeName::Name, attribute.is_list(), payload);

            Ok(Message::ChannelAttribute(ChannelAttribute {
                connector: scope.connector,
                device: scope.device,
                parent: scope.parent,
                channel,
                attribute,
                value,
                retained: scope.retained,
            }))
        }
        ["$property", property] => parse_channel_property(scope, channel, property, None, payload),
        ["$property", property, attribute] => {
            parse_channel_property(scope, channel, property, Some(attribute), payload)
        }
        _ => Err(ParseError::Grammar),
    }
}

/// TOPIC: .../$channel/<channel>/$property/<property>[/$<attribute>]
fn parse_channel_property(
    scope: Scope,
    channel: ChannelId,
    property_token: &str,
    attribute_token: Option<&str>,
    payload: &str,
) -> ParseResult<Message> {
    let property = identifier::<PropertyId>(Some(property_token))?;
    let (attributes, value) = property_payload(attribute_token, payload)?;

    Ok(Message::ChannelProperty(ChannelProperty {
        connector: scope.connector,
        device: scope.device,
        parent: scope.parent,
        channel,
        property,
        attributes,
        value,
        retained: scope.retained,
    }))
}

/// Decode a property topic payload — either the property value itself or a
/// single attribute of it.
fn property_payload(
    attribute_token: Option<&str>,
    payload: &str,
) -> ParseResult<(Vec<PropertyAttribute>, Option<String>)> {
    match attribute_token {
        Some(token) => {
            let name = token
                .strip_prefix('$')
                .and_then(PropertyAttributeName::from_token)
                .ok_or(ParseError::Grammar)?;

            let attribute = PropertyAttribute::parse(name, &payload::clean_payload(payload))?;

            Ok((vec![attribute], None))
        }
        None => Ok((
            Vec::new(),
            payload::present(payload).map(str::to_string),
        )),
    }
}

/// Normalize an attribute payload per its family.
fn attribute_value(is_name: bool, is_list: bool, payload: &str) -> AttributeValue {
    if is_name {
        AttributeValue::Text(payload::clean_name(payload))
    } else if is_list {
        AttributeValue::List(payload::clean_list(&payload::clean_payload(payload)))
    } else {
        AttributeValue::Text(payload::clean_payload(payload))
    }
}

fn identifier<I: std::str::FromStr>(segment: Option<&str>) -> ParseResult<I> {
    segment
        .and_then(|segment| segment.parse().ok())
        .ok_or(ParseError::Grammar)
}
