//! Hardware and firmware extension attribute messages.

use serde::{Deserialize, Serialize};

use crate::identifier::{ConnectorId, DeviceId};

/// Extension namespace a parameter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extension {
    Hardware,
    Firmware,
}

impl Extension {
    /// Resolve an extension topic marker (`$hw` / `$fw`).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "$hw" => Some(Self::Hardware),
            "$fw" => Some(Self::Firmware),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hardware => "hardware",
            Self::Firmware => "firmware",
        }
    }

    /// Whether the extension namespace publishes the given parameter.
    pub fn allows(self, parameter: ExtensionParameter) -> bool {
        match self {
            Self::Hardware => matches!(
                parameter,
                ExtensionParameter::MacAddress
                    | ExtensionParameter::Manufacturer
                    | ExtensionParameter::Model
                    | ExtensionParameter::Version
            ),
            Self::Firmware => matches!(
                parameter,
                ExtensionParameter::Manufacturer
                    | ExtensionParameter::Name
                    | ExtensionParameter::Version
            ),
        }
    }
}

/// Extension parameter names across both namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtensionParameter {
    MacAddress,
    Manufacturer,
    Model,
    Version,
    Name,
}

impl ExtensionParameter {
    /// Resolve a topic token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "mac-address" => Some(Self::MacAddress),
            "manufacturer" => Some(Self::Manufacturer),
            "model" => Some(Self::Model),
            "version" => Some(Self::Version),
            "name" => Some(Self::Name),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MacAddress => "mac-address",
            Self::Manufacturer => "manufacturer",
            Self::Model => "model",
            Self::Version => "version",
            Self::Name => "name",
        }
    }
}

/// A device announced a hardware or firmware parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionAttribute {
    pub connector: ConnectorId,
    pub device: DeviceId,
    pub parent: Option<DeviceId>,
    pub extension: Extension,
    pub parameter: ExtensionParameter,
    /// Lower-cased, name-cleaned value; MAC addresses carry no separators.
    pub value: String,
    pub retained: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_markers() {
        assert_eq!(Extension::from_token("$hw"), Some(Extension::Hardware));
        assert_eq!(Extension::from_token("$fw"), Some(Extension::Firmware));
        assert_eq!(Extension::from_token("$sw"), None);
    }

    #[test]
    fn test_hardware_parameter_set() {
        let hw = Extension::Hardware;
        assert!(hw.allows(ExtensionParameter::MacAddress));
        assert!(hw.allows(ExtensionParameter::Manufacturer));
        assert!(hw.allows(ExtensionParameter::Model));
        assert!(hw.allows(ExtensionParameter::Version));
        assert!(!hw.allows(ExtensionParameter::Name));
    }

    #[test]
    fn test_firmware_parameter_set() {
        let fw = Extension::Firmware;
        assert!(fw.allows(ExtensionParameter::Manufacturer));
        assert!(fw.allows(ExtensionParameter::Name));
        assert!(fw.allows(ExtensionParameter::Version));
        assert!(!fw.allows(ExtensionParameter::MacAddress));
        assert!(!fw.allows(ExtensionParameter::Model));
    }

    #[test]
    fn test_parameter_tokens_round_trip() {
        for token in ["mac-address", "manufacturer", "model", "version", "name"] {
            let parameter = ExtensionParameter::from_token(token).unwrap();
            assert_eq!(parameter.as_str(), token);
        }
    }
}
