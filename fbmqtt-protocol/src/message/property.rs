//! Device and channel property messages and their attribute payloads.

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};
use crate::identifier::{ChannelId, ConnectorId, DeviceId, PropertyId};
use crate::payload;

/// Property attribute names the convention allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyAttributeName {
    Name,
    Settable,
    Queryable,
    DataType,
    Format,
    Unit,
}

impl PropertyAttributeName {
    /// Resolve a topic token (without the `$` marker).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "name" => Some(Self::Name),
            "settable" => Some(Self::Settable),
            "queryable" => Some(Self::Queryable),
            "data-type" => Some(Self::DataType),
            "format" => Some(Self::Format),
            "unit" => Some(Self::Unit),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Settable => "settable",
            Self::Queryable => "queryable",
            Self::DataType => "data-type",
            Self::Format => "format",
            Self::Unit => "unit",
        }
    }
}

/// Data types a property may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Char,
    Uchar,
    Short,
    Ushort,
    Int,
    Uint,
    Float,
    Bool,
    String,
    Enum,
    Date,
    Time,
    Datetime,
    Color,
    Button,
    Switch,
    Unknown,
}

impl DataType {
    /// Resolve a payload token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "char" => Some(Self::Char),
            "uchar" => Some(Self::Uchar),
            "short" => Some(Self::Short),
            "ushort" => Some(Self::Ushort),
            "int" => Some(Self::Int),
            "uint" => Some(Self::Uint),
            "float" => Some(Self::Float),
            "bool" => Some(Self::Bool),
            "string" => Some(Self::String),
            "enum" => Some(Self::Enum),
            "date" => Some(Self::Date),
            "time" => Some(Self::Time),
            "datetime" => Some(Self::Datetime),
            "color" => Some(Self::Color),
            "button" => Some(Self::Button),
            "switch" => Some(Self::Switch),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Uchar => "uchar",
            Self::Short => "short",
            Self::Ushort => "ushort",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Enum => "enum",
            Self::Date => "date",
            Self::Time => "time",
            Self::Datetime => "datetime",
            Self::Color => "color",
            Self::Button => "button",
            Self::Switch => "switch",
            Self::Unknown => "unknown",
        }
    }
}

/// Color models a `format` payload may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModel {
    Rgb,
    Hsv,
}

/// Parsed `format` attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Format {
    /// Numeric range; either bound may be open.
    Range {
        start: Option<f64>,
        end: Option<f64>,
    },
    /// Enumerated set of allowed values.
    Enumeration(Vec<String>),
    /// Fixed color model.
    Color(ColorModel),
}

/// A single property attribute with its decoded value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyAttribute {
    Name(String),
    Settable(bool),
    Queryable(bool),
    DataType(DataType),
    Format(Option<Format>),
    Unit(Option<String>),
}

impl PropertyAttribute {
    /// Decode an attribute payload according to the attribute's value rule.
    ///
    /// The payload is expected to be charset-cleaned already. Boolean
    /// attributes never fail; `data-type` and `format` reject payloads
    /// outside their closed grammars.
    pub fn parse(attribute: PropertyAttributeName, payload: &str) -> ParseResult<Self> {
        match attribute {
            PropertyAttributeName::Name => Ok(Self::Name(payload::clean_name(payload))),
            PropertyAttributeName::Settable => Ok(Self::Settable(payload::parse_bool(payload))),
            PropertyAttributeName::Queryable => Ok(Self::Queryable(payload::parse_bool(payload))),
            PropertyAttributeName::DataType => match payload::present(payload) {
                Some(token) => DataType::from_token(token)
                    .map(Self::DataType)
                    .ok_or_else(|| ParseError::Value(format!("unknown data type `{token}`"))),
                None => Err(ParseError::Value("data type is missing".to_string())),
            },
            PropertyAttributeName::Format => Ok(Self::Format(parse_format(payload)?)),
            PropertyAttributeName::Unit => {
                Ok(Self::Unit(payload::present(payload).map(str::to_string)))
            }
        }
    }

    /// Name of the attribute this value belongs to.
    pub fn name(&self) -> PropertyAttributeName {
        match self {
            Self::Name(_) => PropertyAttributeName::Name,
            Self::Settable(_) => PropertyAttributeName::Settable,
            Self::Queryable(_) => PropertyAttributeName::Queryable,
            Self::DataType(_) => PropertyAttributeName::DataType,
            Self::Format(_) => PropertyAttributeName::Format,
            Self::Unit(_) => PropertyAttributeName::Unit,
        }
    }
}

/// Decode a `format` payload.
///
/// A payload containing `:` is a numeric range, a payload containing `,` is
/// an enumeration, the sentinel or an empty payload clears the format, and
/// anything else must name a known color model.
fn parse_format(payload: &str) -> ParseResult<Option<Format>> {
    if payload.contains(':') {
        let fields: Vec<&str> = payload.split(':').collect();

        let start = parse_bound(fields[0])?;
        let end = parse_bound(fields.get(1).copied().unwrap_or(""))?;

        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(ParseError::Value(format!(
                    "range start {start} exceeds end {end}"
                )));
            }
        }

        return Ok(Some(Format::Range { start, end }));
    }

    if payload.contains(',') {
        return Ok(Some(Format::Enumeration(payload::clean_list(payload))));
    }

    match payload::present(payload) {
        None => Ok(None),
        Some("rgb") => Ok(Some(Format::Color(ColorModel::Rgb))),
        Some("hsv") => Ok(Some(Format::Color(ColorModel::Hsv))),
        Some(other) => Err(ParseError::Value(format!("unknown format `{other}`"))),
    }
}

fn parse_bound(field: &str) -> ParseResult<Option<f64>> {
    if field.is_empty() {
        return Ok(None);
    }

    field
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ParseError::Value(format!("range bound `{field}` is not numeric")))
}

/// A device published a property value or property attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProperty {
    pub connector: ConnectorId,
    pub device: DeviceId,
    pub parent: Option<DeviceId>,
    pub property: PropertyId,
    /// Attribute carried by the topic, when the topic addressed one.
    pub attributes: Vec<PropertyAttribute>,
    /// Raw property value; `None` when the device published the absent-value
    /// sentinel or the topic addressed an attribute instead.
    pub value: Option<String>,
    pub retained: bool,
}

/// A device published a channel property value or property attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelProperty {
    pub connector: ConnectorId,
    pub device: DeviceId,
    pub parent: Option<DeviceId>,
    pub channel: ChannelId,
    pub property: PropertyId,
    pub attributes: Vec<PropertyAttribute>,
    pub value: Option<String>,
    pub retained: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settable_requires_exact_literal() {
        let parsed = PropertyAttribute::parse(PropertyAttributeName::Settable, "true").unwrap();
        assert_eq!(parsed, PropertyAttribute::Settable(true));

        let parsed = PropertyAttribute::parse(PropertyAttributeName::Settable, "yes").unwrap();
        assert_eq!(parsed, PropertyAttribute::Settable(false));

        let parsed = PropertyAttribute::parse(PropertyAttributeName::Queryable, "invalid").unwrap();
        assert_eq!(parsed, PropertyAttribute::Queryable(false));
    }

    #[test]
    fn test_format_range() {
        let parsed = PropertyAttribute::parse(PropertyAttributeName::Format, "1:10").unwrap();
        assert_eq!(
            parsed,
            PropertyAttribute::Format(Some(Format::Range {
                start: Some(1.0),
                end: Some(10.0),
            }))
        );
    }

    #[test]
    fn test_format_range_open_bounds() {
        let parsed = PropertyAttribute::parse(PropertyAttributeName::Format, ":10").unwrap();
        assert_eq!(
            parsed,
            PropertyAttribute::Format(Some(Format::Range {
                start: None,
                end: Some(10.0),
            }))
        );

        let parsed = PropertyAttribute::parse(PropertyAttributeName::Format, "5:").unwrap();
        assert_eq!(
            parsed,
            PropertyAttribute::Format(Some(Format::Range {
                start: Some(5.0),
                end: None,
            }))
        );
    }

    #[test]
    fn test_format_range_inverted_bounds() {
        let result = PropertyAttribute::parse(PropertyAttributeName::Format, "5:1");
        assert!(matches!(result, Err(ParseError::Value(_))));
    }

    #[test]
    fn test_format_range_non_numeric_bound() {
        let result = PropertyAttribute::parse(PropertyAttributeName::Format, "low:10");
        assert!(matches!(result, Err(ParseError::Value(_))));
    }

    #[test]
    fn test_format_enumeration() {
        let parsed = PropertyAttribute::parse(PropertyAttributeName::Format, "One,two,TWO").unwrap();
        assert_eq!(
            parsed,
            PropertyAttribute::Format(Some(Format::Enumeration(vec![
                "one".to_string(),
                "two".to_string(),
            ])))
        );
    }

    #[test]
    fn test_format_color_models() {
        let parsed = PropertyAttribute::parse(PropertyAttributeName::Format, "rgb").unwrap();
        assert_eq!(parsed, PropertyAttribute::Format(Some(Format::Color(ColorModel::Rgb))));

        let parsed = PropertyAttribute::parse(PropertyAttributeName::Format, "hsv").unwrap();
        assert_eq!(parsed, PropertyAttribute::Format(Some(Format::Color(ColorModel::Hsv))));

        let result = PropertyAttribute::parse(PropertyAttributeName::Format, "cmyk");
        assert!(matches!(result, Err(ParseError::Value(_))));
    }

    #[test]
    fn test_format_absent() {
        let parsed = PropertyAttribute::parse(PropertyAttributeName::Format, "value_not_set").unwrap();
        assert_eq!(parsed, PropertyAttribute::Format(None));

        let parsed = PropertyAttribute::parse(PropertyAttributeName::Format, "").unwrap();
        assert_eq!(parsed, PropertyAttribute::Format(None));
    }

    #[test]
    fn test_data_type_tokens() {
        let parsed = PropertyAttribute::parse(PropertyAttributeName::DataType, "float").unwrap();
        assert_eq!(parsed, PropertyAttribute::DataType(DataType::Float));

        let result = PropertyAttribute::parse(PropertyAttributeName::DataType, "decimal");
        assert!(matches!(result, Err(ParseError::Value(_))));
    }

    #[test]
    fn test_unit_sentinel_clears_value() {
        let parsed = PropertyAttribute::parse(PropertyAttributeName::Unit, "°C").unwrap();
        assert_eq!(parsed, PropertyAttribute::Unit(Some("°C".to_string())));

        let parsed = PropertyAttribute::parse(PropertyAttributeName::Unit, "value_not_set").unwrap();
        assert_eq!(parsed, PropertyAttribute::Unit(None));
    }

    #[test]
    fn test_attribute_name_introspection() {
        let parsed = PropertyAttribute::parse(PropertyAttributeName::Name, "Room sensor").unwrap();
        assert_eq!(parsed.name(), PropertyAttributeName::Name);
        assert_eq!(
            PropertyAttribute::Settable(true).name(),
            PropertyAttributeName::Settable
        );
    }
}
